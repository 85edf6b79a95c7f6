// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Economizadores
==============

Cooling capacity of air loops and economizer requirements: requirement by capacity, high
limit shutoff, integration with mechanical cooling and prohibited control types.
*/

use log::{info, warn};
use serde_derive::Serialize;

use crate::error::HvacError;
use crate::rules::RuleSet;
use crate::types::{AirLoop, ClimateZone, CoolingCoil, EconomizerType, LockoutType, Template};
use crate::units::{btu_per_hr_to_w, btu_per_lb_to_j_per_kg, f_to_c, w_to_btu_per_hr};

/// Total cooling capacity of an air loop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoolingCapacity {
    /// Total cooling capacity [W]
    pub total: f64,
    /// Coils whose capacity is unknown or not covered
    pub warnings: Vec<String>,
}

/// Total cooling capacity of the DX and chilled water coils of an air loop, including
/// coils inside unitary systems.
///
/// Coils with an unknown capacity and coil types with no capacity field don't add to the
/// total and are reported as warnings.
pub fn total_cooling_capacity(air_loop: &AirLoop) -> CoolingCapacity {
    let mut total = 0.0;
    let mut warnings = Vec::new();
    for coil in air_loop.cooling_coils() {
        let msg = match coil.capacity() {
            Some(capacity) => match capacity.value() {
                Some(v) => {
                    total += v;
                    continue;
                }
                None => format!(
                    "{}: capacity of {} is not available, total cooling capacity will be incorrect",
                    air_loop.name,
                    coil.name()
                ),
            },
            None => {
                let kind = match coil {
                    CoolingCoil::Other { kind, .. } => kind.as_str(),
                    _ => "",
                };
                format!(
                    "{}: cooling coil {} ({}) is not covered by capacity checks",
                    air_loop.name,
                    coil.name(),
                    kind
                )
            }
        };
        warn!("{}", msg);
        warnings.push(msg);
    }
    CoolingCapacity { total, warnings }
}

/// True if the cooling capacity of the air loop requires an economizer
pub fn is_economizer_required(
    air_loop: &AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Result<bool, HvacError> {
    let min_capacity = match rules.economizer_min_capacity(template, climate_zone)? {
        Some(v) => v,
        None => {
            info!(
                "For {} {}: {}: economizer not required",
                template, climate_zone, air_loop.name
            );
            return Ok(false);
        }
    };
    let capacity = total_cooling_capacity(air_loop).total;
    let required = capacity >= btu_per_hr_to_w(min_capacity);
    info!(
        "For {} {}: {}: cooling capacity {:.0} Btu/h, economizer {} above {:.0} Btu/h",
        template,
        climate_zone,
        air_loop.name,
        w_to_btu_per_hr(capacity),
        if required { "required" } else { "not required" },
        min_capacity
    );
    Ok(required)
}

/// True if the air loop has an outdoor air system with an economizer
pub fn has_economizer(air_loop: &AirLoop) -> bool {
    air_loop
        .oa_controller()
        .map(|c| c.economizer_control_type != EconomizerType::NoEconomizer)
        .unwrap_or(false)
}

/// Set the economizer high limit shutoff values of the outdoor air controller.
///
/// Returns `false` when there is no outdoor air system or no economizer.
pub fn set_economizer_limits(
    air_loop: &mut AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> bool {
    let name = air_loop.name.clone();
    let controller = match air_loop.oa_controller_mut() {
        Some(c) => c,
        None => return false,
    };
    let economizer_type = controller.economizer_control_type;
    if economizer_type == EconomizerType::NoEconomizer {
        return false;
    }
    let limits = match rules.economizer_limits(template, climate_zone, economizer_type) {
        Some(limits) => limits,
        None => return true,
    };

    match economizer_type {
        EconomizerType::FixedDryBulb => {
            if let Some(db) = limits.dry_bulb_f {
                controller.economizer_maximum_limit_dry_bulb_temperature = Some(f_to_c(db));
                info!(
                    "For {} {}: {}: economizer type = {}, dry bulb limit = {}F",
                    template, climate_zone, name, economizer_type, db
                );
            }
        }
        EconomizerType::FixedEnthalpy => {
            if let Some(h) = limits.enthalpy_btu_per_lb {
                controller.economizer_maximum_limit_enthalpy = Some(btu_per_lb_to_j_per_kg(h));
                info!(
                    "For {} {}: {}: economizer type = {}, enthalpy limit = {}Btu/lb",
                    template, climate_zone, name, economizer_type, h
                );
            }
        }
        EconomizerType::FixedDewPointAndDryBulb => {
            if let (Some(db), Some(dp)) = (limits.dry_bulb_f, limits.dew_point_f) {
                controller.economizer_maximum_limit_dry_bulb_temperature = Some(f_to_c(db));
                controller.economizer_maximum_limit_dewpoint_temperature = Some(f_to_c(dp));
                info!(
                    "For {} {}: {}: economizer type = {}, dry bulb limit = {}F, dew point limit = {}F",
                    template, climate_zone, name, economizer_type, db, dp
                );
            }
        }
        _ => (),
    }
    true
}

/// True if the air loop has a variable volume supply fan, either placed on the supply side
/// or inside a unitary system
pub fn has_variable_volume_supply_fan(air_loop: &AirLoop) -> bool {
    air_loop.supply_fans().any(|f| f.is_variable_volume())
}

/// Set the economizer lockout: integrated economizers run with no lockout, non integrated
/// economizers are locked out with the compressor.
///
/// Returns `false` when there is no outdoor air system.
pub fn set_economizer_integration(
    air_loop: &mut AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Result<bool, HvacError> {
    if air_loop.outdoor_air_system.is_none() {
        return Ok(false);
    }
    let rule = rules.economizer_integration(template, climate_zone)?;
    let is_vav = has_variable_volume_supply_fan(air_loop);
    let num_zones = air_loop.zones.len();

    let integrated = if rule.multizone_vav_exception && is_vav && num_zones > 1 {
        info!(
            "For {} {}: {}: non integrated economizer per 6.5.1.3 exception a, DX VAV system",
            template, climate_zone, air_loop.name
        );
        false
    } else if let Some(min_capacity) = rule
        .small_dx_exception_btu_per_hr
        .filter(|min| total_cooling_capacity(air_loop).total < btu_per_hr_to_w(*min))
    {
        info!(
            "For {} {}: {}: non integrated economizer per 6.5.1.3 exception b, DX system below {}Btu/h",
            template, climate_zone, air_loop.name, min_capacity
        );
        false
    } else {
        if !rule.integrated {
            info!(
                "For {} {}: {}: non integrated economizer per 6.5.1.3 exception c, climate zone {}",
                template, climate_zone, air_loop.name, climate_zone
            );
        }
        rule.integrated
    };

    if let Some(controller) = air_loop.oa_controller_mut() {
        controller.lockout_type = if integrated {
            LockoutType::NoLockout
        } else {
            LockoutType::LockoutWithCompressor
        };
    }
    Ok(true)
}

/// True if the economizer control type of the air loop is allowed.
///
/// Loops without outdoor air system or without economizer are allowed.
pub fn is_economizer_type_allowable(
    air_loop: &AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Result<bool, HvacError> {
    let economizer_type = match air_loop.oa_controller() {
        Some(c) if c.economizer_control_type != EconomizerType::NoEconomizer => {
            c.economizer_control_type
        }
        _ => return Ok(true),
    };
    let prohibited = rules.prohibited_economizers(template, climate_zone)?;
    Ok(!prohibited.contains(&economizer_type))
}

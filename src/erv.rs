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
Recuperación de calor
=====================

Energy recovery ventilator requirement of air loops (6.5.6.1).
*/

use log::info;

use crate::error::HvacError;
use crate::rules::RuleSet;
use crate::types::{AirLoop, ClimateZone, Template};
use crate::units::m3_per_s_to_cfm;

/// Outdoor air fraction at design conditions, minimum outdoor air flow over design supply
/// air flow. `None` for loops without outdoor air system.
pub fn outdoor_air_fraction(air_loop: &AirLoop) -> Result<Option<f64>, HvacError> {
    let controller = match air_loop.oa_controller() {
        Some(c) => c,
        None => return Ok(None),
    };
    let dsn_flow = air_loop.design_supply_air_flow()?;
    if dsn_flow <= 0.0 {
        return Err(HvacError::ZeroFlow {
            object: air_loop.name.clone(),
            quantity: "design supply air flow rate",
        });
    }
    let min_oa = controller
        .minimum_outdoor_air_flow_rate
        .resolve(&controller.name, "minimum outdoor air flow rate")?;
    Ok(Some(min_oa / dsn_flow))
}

/// True if the air loop requires an energy recovery ventilator.
///
/// Not applicable to loops with demand controlled ventilation or without outdoor air
/// system. Unresolvable design or outdoor air flows are errors.
pub fn is_energy_recovery_ventilator_required(
    air_loop: &AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Result<bool, HvacError> {
    match air_loop.oa_controller() {
        None => {
            info!(
                "For {} {}: ERV not applicable because it has no OA intake",
                template, air_loop.name
            );
            return Ok(false);
        }
        Some(c) if c.mechanical_ventilation.demand_controlled_ventilation => {
            info!(
                "For {} {}: ERV not applicable because DCV enabled",
                template, air_loop.name
            );
            return Ok(false);
        }
        _ => (),
    };

    let pct_oa = outdoor_air_fraction(air_loop)?.unwrap_or(0.0);
    let dsn_flow_cfm = m3_per_s_to_cfm(air_loop.design_supply_air_flow()?);
    let required = match rules.erv_threshold(template, climate_zone, pct_oa)? {
        None => {
            info!(
                "For {} {}: ERV not required based on {:.0}% OA flow, design flow of {:.0}cfm, and climate zone {}",
                template, air_loop.name, pct_oa * 100.0, dsn_flow_cfm, climate_zone
            );
            false
        }
        Some(erv_cfm) if dsn_flow_cfm < erv_cfm => {
            info!(
                "For {} {}: ERV not required based on {:.0}% OA flow, design flow of {:.0}cfm, and climate zone {}. Does not exceed minimum flow requirement of {}cfm",
                template, air_loop.name, pct_oa * 100.0, dsn_flow_cfm, climate_zone, erv_cfm
            );
            false
        }
        Some(erv_cfm) => {
            info!(
                "For {} {}: ERV required based on {:.0}% OA flow, design flow of {:.0}cfm, and climate zone {}. Exceeds minimum flow requirement of {}cfm",
                template, air_loop.name, pct_oa * 100.0, dsn_flow_cfm, climate_zone, erv_cfm
            );
            true
        }
    };
    Ok(required)
}

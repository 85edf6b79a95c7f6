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
Ventilación controlada por demanda
==================================

Demand controlled ventilation requirement (6.4.3.9) and its activation on the outdoor
air controller.
*/

use std::fmt;

use log::info;
use serde_derive::Serialize;

use crate::economizer::has_economizer;
use crate::erv::is_energy_recovery_ventilator_required;
use crate::error::HvacError;
use crate::rules::RuleSet;
use crate::types::{AirLoop, ClimateZone, Sizing, Template};
use crate::units::{m2_to_ft2, m3_per_s_to_cfm};

/// Result of enabling demand controlled ventilation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum DcvOutcome {
    /// DCV has been enabled and the minimum outdoor air flow set to zero
    Enabled,
    /// DCV was already enabled, the controller is left unchanged
    AlreadyEnabled,
    /// The loop has no outdoor air system
    NoOutdoorAirSystem,
}

impl DcvOutcome {
    /// True if the loop ends with DCV enabled
    pub fn is_enabled(self) -> bool {
        self != DcvOutcome::NoOutdoorAirSystem
    }
}

impl fmt::Display for DcvOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DcvOutcome::Enabled => "enabled",
            DcvOutcome::AlreadyEnabled => "already enabled",
            DcvOutcome::NoOutdoorAirSystem => "no outdoor air system",
        };
        write!(f, "{}", msg)
    }
}

/// True if demand controlled ventilation is required for the air loop
pub fn is_demand_control_ventilation_required(
    air_loop: &AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Result<bool, HvacError> {
    let limits = match rules.dcv_limits(template)? {
        Some(limits) => limits,
        None => {
            info!(
                "For {} {}: DCV is not required for this template",
                template, air_loop.name
            );
            return Ok(false);
        }
    };

    if is_energy_recovery_ventilator_required(air_loop, template, climate_zone, rules)? {
        info!(
            "For {} {}: DCV is not required since the system has energy recovery",
            template, air_loop.name
        );
        return Ok(false);
    }

    let area_ft2 = m2_to_ft2(air_loop.floor_area_served());
    if area_ft2 <= 0.0 || area_ft2 < limits.min_area_ft2 {
        info!(
            "For {} {}: DCV is not required since the system serves {:.0}ft2, but the minimum size is {:.0}ft2",
            template, air_loop.name, area_ft2, limits.min_area_ft2
        );
        return Ok(false);
    }

    let occ_per_1000_ft2 = air_loop.number_of_people_served() / area_ft2 * 1000.0;
    if occ_per_1000_ft2 < limits.min_occupants_per_1000_ft2 {
        info!(
            "For {} {}: DCV is not required since the system occupant density is {:.0}/1000ft2, but the minimum is {:.0}/1000ft2",
            template, air_loop.name, occ_per_1000_ft2, limits.min_occupants_per_1000_ft2
        );
        return Ok(false);
    }

    let controller = match air_loop.oa_controller() {
        Some(c) => c,
        None => {
            info!(
                "For {} {}: DCV is not applicable because the system has no OA intake",
                template, air_loop.name
            );
            return Ok(false);
        }
    };
    let oa_flow_cfm = m3_per_s_to_cfm(
        controller
            .minimum_outdoor_air_flow_rate
            .resolve(&controller.name, "minimum outdoor air flow rate")?,
    );

    let (min_oa_cfm, econ) = if has_economizer(air_loop) {
        (limits.min_oa_with_economizer_cfm, "with")
    } else {
        (limits.min_oa_without_economizer_cfm, "without")
    };
    if oa_flow_cfm < min_oa_cfm {
        info!(
            "For {} {}: DCV is not required since the system min oa flow is {:.0}cfm, less than the minimum of {:.0}cfm for systems {} an economizer",
            template, air_loop.name, oa_flow_cfm, min_oa_cfm, econ
        );
        return Ok(false);
    }

    info!("For {} {}: DCV is required", template, air_loop.name);
    Ok(true)
}

/// Enable demand controlled ventilation on the outdoor air controller
///
/// The minimum outdoor air flow rate is set to zero so that it's driven by the zone
/// requirements.
pub fn enable_demand_control_ventilation(air_loop: &mut AirLoop) -> DcvOutcome {
    let name = air_loop.name.clone();
    let controller = match air_loop.oa_controller_mut() {
        Some(c) => c,
        None => {
            info!("For {}: DCV not enabled, the system has no OA intake", name);
            return DcvOutcome::NoOutdoorAirSystem;
        }
    };
    if controller.mechanical_ventilation.demand_controlled_ventilation {
        info!("For {}: DCV was already enabled", name);
        return DcvOutcome::AlreadyEnabled;
    }
    controller.minimum_outdoor_air_flow_rate = Sizing::Fixed(0.0);
    controller.mechanical_ventilation.demand_controlled_ventilation = true;
    info!("For {}: DCV enabled", name);
    DcvOutcome::Enabled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;
    use crate::types::{bare_loop, oa_system, vav_zone, EconomizerType};
    use crate::units::cfm_to_m3_per_s;
    use pretty_assertions::assert_eq;

    // 10 zones of 100 m2 (1076 ft2 each) with `people` occupants each
    fn dense_loop(people: f64, oa_cfm: f64, economizer: EconomizerType) -> AirLoop {
        let zones = (0..10)
            .map(|i| {
                let mut z = vav_zone(&format!("Z{}", i), 1.0, None);
                z.spaces[0].number_of_people = people;
                z
            })
            .collect();
        let mut aloop = bare_loop("Dining", Sizing::Autosized(10.0), zones);
        aloop.outdoor_air_system = Some(oa_system(
            economizer,
            Sizing::Fixed(cfm_to_m3_per_s(oa_cfm)),
        ));
        aloop
    }

    #[test]
    fn dcv_requirement() {
        let rules = default_rules().unwrap();
        let (t, cz) = (Template::Ashrae2010, ClimateZone::CZ4A);
        // 50 people per zone -> 46 people / 1000 ft2
        let aloop = dense_loop(50.0, 4000.0, EconomizerType::NoEconomizer);
        assert_eq!(
            is_demand_control_ventilation_required(&aloop, t, cz, &rules),
            Ok(true)
        );
        // Old templates never require DCV
        assert_eq!(
            is_demand_control_ventilation_required(&aloop, Template::DoeRef1980_2004, cz, &rules),
            Ok(false)
        );
        // Sparse occupancy
        let sparse = dense_loop(5.0, 4000.0, EconomizerType::NoEconomizer);
        assert_eq!(
            is_demand_control_ventilation_required(&sparse, t, cz, &rules),
            Ok(false)
        );
        // Small OA flow without economizer, large enough with economizer
        let small_oa = dense_loop(50.0, 2000.0, EconomizerType::NoEconomizer);
        assert_eq!(
            is_demand_control_ventilation_required(&small_oa, t, cz, &rules),
            Ok(false)
        );
        let small_oa_econ = dense_loop(50.0, 2000.0, EconomizerType::FixedDryBulb);
        assert_eq!(
            is_demand_control_ventilation_required(&small_oa_econ, t, cz, &rules),
            Ok(true)
        );
        // No floor area
        let mut empty = dense_loop(50.0, 4000.0, EconomizerType::NoEconomizer);
        empty.zones.clear();
        assert_eq!(
            is_demand_control_ventilation_required(&empty, t, cz, &rules),
            Ok(false)
        );
    }

    #[test]
    fn dcv_enable() {
        let mut aloop = dense_loop(50.0, 4000.0, EconomizerType::NoEconomizer);
        assert_eq!(enable_demand_control_ventilation(&mut aloop), DcvOutcome::Enabled);
        let controller = aloop.oa_controller().unwrap();
        assert_eq!(controller.minimum_outdoor_air_flow_rate, Sizing::Fixed(0.0));
        assert!(controller.mechanical_ventilation.demand_controlled_ventilation);
        assert_eq!(
            enable_demand_control_ventilation(&mut aloop),
            DcvOutcome::AlreadyEnabled
        );
        aloop.outdoor_air_system = None;
        let outcome = enable_demand_control_ventilation(&mut aloop);
        assert_eq!(outcome, DcvOutcome::NoOutdoorAirSystem);
        assert!(!outcome.is_enabled());
    }
}

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
Optimización multizona
======================

Multizone VAV outdoor air optimization (6.5.3.3). Enabling the optimization switches the
system outdoor air method of the mechanical ventilation controller to the ventilation
rate procedure.
*/

use log::info;

use crate::erv::{is_energy_recovery_ventilator_required, outdoor_air_fraction};
use crate::error::HvacError;
use crate::rules::RuleSet;
use crate::types::{AirLoop, ClimateZone, OutdoorAirMethod, Template, ThermalZone};

/// True if the loop serves more than one zone through a variable volume supply fan
pub fn is_multizone_vav_system(air_loop: &AirLoop) -> bool {
    air_loop.zones.len() > 1 && air_loop.supply_fans().any(|f| f.is_variable_volume())
}

/// True if multizone VAV optimization is required for the air loop
///
/// Exempt are systems with fan powered terminals, systems that require an energy recovery
/// ventilator, systems without outdoor air intake and those whose outdoor air fraction
/// exceeds the template limit.
pub fn is_multizone_vav_optimization_required(
    air_loop: &AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Result<bool, HvacError> {
    let rule = rules.multizone_opt(template)?;
    if !rule.required {
        info!(
            "For {} {}: multizone vav optimization is not required for this template",
            template, air_loop.name
        );
        return Ok(false);
    }

    if air_loop.zones.iter().any(ThermalZone::has_fan_powered_terminal) {
        info!(
            "For {} {}: multizone vav optimization is not required because the system has fan powered terminals",
            template, air_loop.name
        );
        return Ok(false);
    }

    if is_energy_recovery_ventilator_required(air_loop, template, climate_zone, rules)? {
        info!(
            "For {} {}: multizone vav optimization is not required because the system has energy recovery",
            template, air_loop.name
        );
        return Ok(false);
    }

    let pct_oa = match outdoor_air_fraction(air_loop)? {
        Some(pct_oa) => pct_oa,
        None => {
            info!(
                "For {} {}: multizone optimization is not applicable because the system has no OA intake",
                template, air_loop.name
            );
            return Ok(false);
        }
    };

    if let Some(max_oa) = rule.max_oa_fraction {
        if pct_oa > max_oa {
            info!(
                "For {} {}: multizone optimization is not applicable because the system is more than {:.0}% OA",
                template, air_loop.name, max_oa * 100.0
            );
            return Ok(false);
        }
    }

    info!(
        "For {} {}: multizone vav optimization is required",
        template, air_loop.name
    );
    Ok(true)
}

fn set_outdoor_air_method(air_loop: &mut AirLoop, method: OutdoorAirMethod) -> bool {
    let name = air_loop.name.clone();
    match air_loop.oa_controller_mut() {
        Some(controller) => {
            controller.mechanical_ventilation.system_outdoor_air_method = method;
            info!("For {}: system outdoor air method set to {}", name, method);
            true
        }
        None => {
            info!(
                "For {}: no outdoor air system, outdoor air method not changed",
                name
            );
            false
        }
    }
}

/// Set the system outdoor air method to the ventilation rate procedure
///
/// Returns false when the loop has no outdoor air system.
pub fn enable_multizone_vav_optimization(air_loop: &mut AirLoop) -> bool {
    set_outdoor_air_method(air_loop, OutdoorAirMethod::VentilationRateProcedure)
}

/// Set the system outdoor air method back to the sum of zone requirements
///
/// Returns false when the loop has no outdoor air system.
pub fn disable_multizone_vav_optimization(air_loop: &mut AirLoop) -> bool {
    set_outdoor_air_method(air_loop, OutdoorAirMethod::ZoneSum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;
    use crate::types::{
        bare_loop, oa_system, test_fan, vav_zone, AirTerminal, EconomizerType, FanKind, Sizing,
        SupplyComponent,
    };
    use pretty_assertions::assert_eq;

    fn vav_loop(oa_fraction: f64) -> AirLoop {
        let mut aloop = bare_loop(
            "VAV",
            Sizing::Autosized(2.0),
            vec![vav_zone("Z1", 1.0, None), vav_zone("Z2", 1.0, None)],
        );
        aloop.supply_components.push(SupplyComponent::Fan(test_fan(
            "Supply fan",
            FanKind::VariableVolume,
            2.0,
            1000.0,
        )));
        aloop.outdoor_air_system = Some(oa_system(
            EconomizerType::FixedDryBulb,
            Sizing::Fixed(2.0 * oa_fraction),
        ));
        aloop
    }

    #[test]
    fn multizone_detection() {
        let mut aloop = vav_loop(0.2);
        assert!(is_multizone_vav_system(&aloop));
        aloop.zones.pop();
        assert!(!is_multizone_vav_system(&aloop));
        let mut cv = vav_loop(0.2);
        cv.supply_components = vec![SupplyComponent::Fan(test_fan(
            "CV fan",
            FanKind::ConstantVolume,
            2.0,
            500.0,
        ))];
        assert!(!is_multizone_vav_system(&cv));
    }

    #[test]
    fn multizone_requirement() {
        let rules = default_rules().unwrap();
        let cz = ClimateZone::CZ3B;
        let aloop = vav_loop(0.2);
        assert_eq!(
            is_multizone_vav_optimization_required(&aloop, Template::Ashrae2007, cz, &rules),
            Ok(false)
        );
        assert_eq!(
            is_multizone_vav_optimization_required(&aloop, Template::Ashrae2010, cz, &rules),
            Ok(true)
        );

        // Too much outdoor air (0.75 > 0.7, and no ERV under 5000 cfm)
        let high_oa = vav_loop(0.75);
        assert_eq!(
            is_multizone_vav_optimization_required(&high_oa, Template::Ashrae2010, cz, &rules),
            Ok(false)
        );

        let mut piu = vav_loop(0.2);
        piu.zones[0].terminals = vec![AirTerminal::SeriesPiuReheat {
            name: "PIU".into(),
            fan: test_fan("PIU fan", FanKind::ConstantVolume, 0.5, 200.0),
        }];
        assert_eq!(
            is_multizone_vav_optimization_required(&piu, Template::Ashrae2010, cz, &rules),
            Ok(false)
        );

        let mut no_oa = vav_loop(0.2);
        no_oa.outdoor_air_system = None;
        assert_eq!(
            is_multizone_vav_optimization_required(&no_oa, Template::Ashrae2010, cz, &rules),
            Ok(false)
        );
    }

    #[test]
    fn multizone_enable_disable() {
        let mut aloop = vav_loop(0.2);
        assert!(enable_multizone_vav_optimization(&mut aloop));
        assert_eq!(
            aloop
                .oa_controller()
                .unwrap()
                .mechanical_ventilation
                .system_outdoor_air_method,
            OutdoorAirMethod::VentilationRateProcedure
        );
        assert!(disable_multizone_vav_optimization(&mut aloop));
        assert_eq!(
            aloop
                .oa_controller()
                .unwrap()
                .mechanical_ventilation
                .system_outdoor_air_method,
            OutdoorAirMethod::ZoneSum
        );
        aloop.outdoor_air_system = None;
        assert!(!enable_multizone_vav_optimization(&mut aloop));
    }
}

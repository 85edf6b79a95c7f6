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
Eficiencia de baterías DX
=========================

Minimum efficiency and performance curves of DX cooling coils from the unitary air
conditioner table (Table 6.8.1A, air cooled, single package).
*/

use log::{info, warn};
use serde_derive::Serialize;

use crate::error::HvacError;
use crate::rules::{EfficiencyRating, RuleSet};
use crate::types::{
    AirLoop, CondenserType, CoolingCoil, HeatingCoil, HeatingType, SupplyComponent, Template,
};
use crate::units::w_to_btu_per_hr;

/// Convert a seasonal energy efficiency ratio to an energy efficiency ratio
pub fn seer_to_eer(seer: f64) -> f64 {
    -0.0182 * seer * seer + 1.1088 * seer
}

/// Convert an energy efficiency ratio to a COP, excluding the indoor fan power
pub fn eer_to_cop(eer: f64) -> f64 {
    (eer / 3.413 + 0.12) / (1.0 - 0.12)
}

/// Convert a seasonal energy efficiency ratio to a COP, excluding the indoor fan power
pub fn seer_to_cop(seer: f64) -> f64 {
    eer_to_cop(seer_to_eer(seer))
}

impl EfficiencyRating {
    /// Equivalent COP [-]
    pub fn cop(self) -> f64 {
        match self {
            EfficiencyRating::Seer(seer) => seer_to_cop(seer),
            EfficiencyRating::Eer(eer) => eer_to_cop(eer),
        }
    }
}

/// Heating type of the DX coils of an air loop
///
/// Any electric heating coil makes it "Electric Resistance or None", otherwise any other
/// heating coil makes it "All Other".
pub fn heating_type_for_air_loop(air_loop: &AirLoop) -> HeatingType {
    let coils: Vec<&HeatingCoil> = air_loop.heating_coils().collect();
    if coils.iter().any(|c| !c.is_non_electric()) {
        HeatingType::ElectricResistanceOrNone
    } else if coils.iter().any(|c| c.is_non_electric()) {
        HeatingType::AllOther
    } else {
        HeatingType::ElectricResistanceOrNone
    }
}

/// Efficiency values given to a DX coil
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoilEfficiency {
    /// Coil name before the change
    pub original_name: String,
    /// New coil name, with capacity and rating
    pub name: String,
    pub heating_type: HeatingType,
    /// Rated (high speed) capacity [kBtu/h]
    pub capacity_kbtu_per_hr: f64,
    pub rating: EfficiencyRating,
    /// Rated COP of every speed [-]
    pub cop: f64,
}

/// Set the minimum efficiency and the performance curves of a DX cooling coil
///
/// Two speed coils get the COP for both speeds, the five high speed curves and the low
/// speed temperature curves. Single speed coils only get the COP. The coil is renamed after
/// its capacity and efficiency rating.
pub fn apply_standard_efficiency_and_curves(
    coil: &mut CoolingCoil,
    heating_type: HeatingType,
    template: Template,
    rules: &RuleSet,
) -> Result<CoilEfficiency, HvacError> {
    let original_name = coil.name().to_string();
    let capacity_w = match &*coil {
        CoolingCoil::DxTwoSpeed {
            name,
            condenser_type,
            rated_high_speed_capacity,
            ..
        } => {
            if *condenser_type != CondenserType::AirCooled {
                return Err(HvacError::NoMatchingRule(format!(
                    "UNITARY_AC (evaporatively cooled condenser of {})",
                    name
                )));
            }
            rated_high_speed_capacity.resolve(name, "rated high speed total cooling capacity")?
        }
        CoolingCoil::DxSingleSpeed {
            name,
            rated_capacity,
            ..
        } => rated_capacity.resolve(name, "rated total cooling capacity")?,
        CoolingCoil::Water { name, .. } | CoolingCoil::Other { name, .. } => {
            return Err(HvacError::UnsupportedComponent {
                object: name.clone(),
                kind: "non DX cooling coils",
            });
        }
    };
    let capacity_btu_per_hr = w_to_btu_per_hr(capacity_w);
    let capacity_kbtu_per_hr = capacity_btu_per_hr / 1000.0;

    let rule = rules.unitary_ac(template, heating_type, capacity_btu_per_hr)?;
    let cop = rule.rating.cop();
    let new_name = format!(
        "{} {:.0}kBtu/hr {}",
        original_name, capacity_kbtu_per_hr, rule.rating
    );

    match coil {
        CoolingCoil::DxTwoSpeed {
            name,
            rated_high_speed_cop,
            rated_low_speed_cop,
            high_speed_curves,
            low_speed_curves,
            ..
        } => {
            *rated_high_speed_cop = Some(cop);
            *rated_low_speed_cop = Some(cop);
            *high_speed_curves = rule.curves.clone();
            low_speed_curves.cap_ft = rule.curves.cap_ft.clone();
            low_speed_curves.eir_ft = rule.curves.eir_ft.clone();
            *name = new_name.clone();
        }
        CoolingCoil::DxSingleSpeed {
            name, rated_cop, ..
        } => {
            *rated_cop = Some(cop);
            *name = new_name.clone();
        }
        _ => (),
    }

    info!(
        "For {}: {}: {} Capacity = {:.0}kBtu/hr; {}",
        template, new_name, heating_type, capacity_kbtu_per_hr, rule.rating
    );

    Ok(CoilEfficiency {
        original_name,
        name: new_name,
        heating_type,
        capacity_kbtu_per_hr,
        rating: rule.rating,
        cop,
    })
}

/// Apply the standard efficiency to every DX cooling coil of the air loop, including the
/// coils of unitary systems
///
/// Coils of air to air heat pumps use the "Electric Resistance or None" heating type. Non
/// DX coils are skipped. Each coil result is returned in supply side order.
pub fn apply_standard_coil_efficiencies(
    air_loop: &mut AirLoop,
    template: Template,
    rules: &RuleSet,
) -> Vec<Result<CoilEfficiency, HvacError>> {
    let loop_heating_type = heating_type_for_air_loop(air_loop);
    let loop_name = air_loop.name.clone();
    let mut results = Vec::new();
    for component in air_loop.supply_components.iter_mut() {
        let (coil, heating_type) = match component {
            SupplyComponent::CoolingCoil(coil) => (coil, loop_heating_type),
            SupplyComponent::Unitary(unitary) => {
                let heating_type = if unitary.is_heat_pump() {
                    HeatingType::ElectricResistanceOrNone
                } else {
                    loop_heating_type
                };
                match unitary.cooling_coil.as_mut() {
                    Some(coil) => (coil, heating_type),
                    None => continue,
                }
            }
            _ => continue,
        };
        if !coil.is_dx() {
            continue;
        }
        let result = apply_standard_efficiency_and_curves(coil, heating_type, template, rules);
        if let Err(e) = &result {
            warn!("For {}: coil efficiency not set: {}", loop_name, e);
        }
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;
    use crate::types::{
        bare_loop, DxCurves, HeatingCoilKind, Sizing, UnitaryKind, UnitarySystem,
    };
    use crate::units::btu_per_hr_to_w;
    use pretty_assertions::assert_eq;

    fn two_speed(name: &str, capacity_btuh: f64) -> CoolingCoil {
        CoolingCoil::DxTwoSpeed {
            name: name.into(),
            rated_high_speed_capacity: Sizing::Fixed(btu_per_hr_to_w(capacity_btuh)),
            rated_high_speed_cop: None,
            rated_low_speed_cop: None,
            high_speed_curves: DxCurves::default(),
            low_speed_curves: DxCurves::default(),
            condenser_type: CondenserType::AirCooled,
        }
    }

    fn heating(kind: HeatingCoilKind) -> SupplyComponent {
        SupplyComponent::HeatingCoil(HeatingCoil {
            name: format!("{:?} coil", kind),
            kind,
        })
    }

    #[test]
    fn efficiency_conversions() {
        assert!((seer_to_eer(13.0) - 11.3386).abs() < 1e-4);
        assert!((seer_to_cop(13.0) - 3.9116).abs() < 1e-3);
        assert!((eer_to_cop(11.0) - 3.7989).abs() < 1e-3);
        assert_eq!(EfficiencyRating::Eer(11.0).cop(), eer_to_cop(11.0));
    }

    #[test]
    fn loop_heating_type() {
        let mut aloop = bare_loop("RTU", Sizing::Autosized(1.0), vec![]);
        assert_eq!(
            heating_type_for_air_loop(&aloop),
            HeatingType::ElectricResistanceOrNone
        );
        aloop.supply_components.push(heating(HeatingCoilKind::Gas));
        assert_eq!(heating_type_for_air_loop(&aloop), HeatingType::AllOther);
        aloop.supply_components.push(heating(HeatingCoilKind::Electric));
        assert_eq!(
            heating_type_for_air_loop(&aloop),
            HeatingType::ElectricResistanceOrNone
        );
    }

    #[test]
    fn two_speed_coil_efficiency() {
        let rules = default_rules().unwrap();
        let mut coil = two_speed("DX Coil", 100_000.0);
        let eff = apply_standard_efficiency_and_curves(
            &mut coil,
            HeatingType::AllOther,
            Template::Ashrae2010,
            &rules,
        )
        .unwrap();
        assert_eq!(eff.rating, EfficiencyRating::Eer(11.0));
        assert_eq!(eff.name, "DX Coil 100kBtu/hr 11.0EER");
        match coil {
            CoolingCoil::DxTwoSpeed {
                name,
                rated_high_speed_cop,
                rated_low_speed_cop,
                high_speed_curves,
                low_speed_curves,
                ..
            } => {
                assert_eq!(name, "DX Coil 100kBtu/hr 11.0EER");
                assert_eq!(rated_high_speed_cop, Some(eer_to_cop(11.0)));
                assert_eq!(rated_low_speed_cop, Some(eer_to_cop(11.0)));
                assert_eq!(high_speed_curves.plf_fplr, "DOE Ref DX Clg Coil Cool-PLF-fPLR");
                assert_eq!(low_speed_curves.cap_ft, "DOE Ref DX Clg Coil Cool-Cap-fT");
                assert_eq!(low_speed_curves.plf_fplr, "");
            }
            _ => panic!("coil kind changed"),
        }
    }

    #[test]
    fn coil_efficiency_errors() {
        let rules = default_rules().unwrap();
        let mut pending = two_speed("Pending", 0.0);
        if let CoolingCoil::DxTwoSpeed {
            rated_high_speed_capacity,
            ..
        } = &mut pending
        {
            *rated_high_speed_capacity = Sizing::Autosize;
        }
        assert!(apply_standard_efficiency_and_curves(
            &mut pending,
            HeatingType::AllOther,
            Template::Ashrae2010,
            &rules
        )
        .is_err());
        let mut water = CoolingCoil::Water {
            name: "CHW".into(),
            design_coil_load: Sizing::Fixed(10_000.0),
        };
        assert!(apply_standard_efficiency_and_curves(
            &mut water,
            HeatingType::AllOther,
            Template::Ashrae2010,
            &rules
        )
        .is_err());
    }

    #[test]
    fn loop_coil_efficiencies() {
        let rules = default_rules().unwrap();
        let mut aloop = bare_loop("RTU", Sizing::Autosized(1.0), vec![]);
        aloop.supply_components = vec![
            heating(HeatingCoilKind::Gas),
            SupplyComponent::CoolingCoil(two_speed("Loop coil", 100_000.0)),
            SupplyComponent::Unitary(UnitarySystem {
                name: "HP".into(),
                kind: UnitaryKind::HeatPumpAirToAir,
                supply_fan: None,
                cooling_coil: Some(two_speed("HP coil", 100_000.0)),
                heating_coil: None,
            }),
        ];
        let results = apply_standard_coil_efficiencies(&mut aloop, Template::Ashrae2010, &rules);
        assert_eq!(results.len(), 2);
        let loop_coil = results[0].as_ref().unwrap();
        assert_eq!(loop_coil.heating_type, HeatingType::AllOther);
        assert_eq!(loop_coil.rating, EfficiencyRating::Eer(11.0));
        let hp_coil = results[1].as_ref().unwrap();
        assert_eq!(hp_coil.heating_type, HeatingType::ElectricResistanceOrNone);
        assert_eq!(hp_coil.rating, EfficiencyRating::Eer(11.2));
    }
}

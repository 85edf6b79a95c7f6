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

// == Air loops, outdoor air systems and thermal zones ==

use serde_derive::{Deserialize, Serialize};

use crate::error::HvacError;
use crate::types::{
    AirTerminal, CoolingCoil, EconomizerType, Fan, HeatingCoil, LockoutType, OutdoorAirMethod,
    Sizing,
};

/// Kind of unitary system
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitaryKind {
    UnitarySystem,
    HeatCoolVavChangeoverBypass,
    HeatPumpAirToAir,
    HeatPumpAirToAirMultiSpeed,
}

/// Packaged unitary equipment placed on the supply side of an air loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitarySystem {
    pub name: String,
    pub kind: UnitaryKind,
    #[serde(default)]
    pub supply_fan: Option<Fan>,
    #[serde(default)]
    pub cooling_coil: Option<CoolingCoil>,
    #[serde(default)]
    pub heating_coil: Option<HeatingCoil>,
}

impl UnitarySystem {
    /// True for air to air heat pumps
    pub fn is_heat_pump(&self) -> bool {
        matches!(
            self.kind,
            UnitaryKind::HeatPumpAirToAir | UnitaryKind::HeatPumpAirToAirMultiSpeed
        )
    }
}

/// Component of the supply side of an air loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", content = "data")]
pub enum SupplyComponent {
    Fan(Fan),
    CoolingCoil(CoolingCoil),
    HeatingCoil(HeatingCoil),
    Unitary(UnitarySystem),
}

/// Demand controlled ventilation and system outdoor air method
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MechanicalVentilation {
    #[serde(default)]
    pub demand_controlled_ventilation: bool,
    #[serde(default)]
    pub system_outdoor_air_method: OutdoorAirMethod,
}

/// Outdoor air controller
///
/// Economizer limits are stored in SI units: dry bulb and dew point [ºC], enthalpy [J/kg].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerOutdoorAir {
    pub name: String,
    #[serde(default)]
    pub economizer_control_type: EconomizerType,
    #[serde(default)]
    pub lockout_type: LockoutType,
    /// Minimum outdoor air flow rate [m3/s]
    #[serde(default)]
    pub minimum_outdoor_air_flow_rate: Sizing,
    #[serde(default)]
    pub economizer_maximum_limit_dry_bulb_temperature: Option<f64>,
    #[serde(default)]
    pub economizer_maximum_limit_enthalpy: Option<f64>,
    #[serde(default)]
    pub economizer_maximum_limit_dewpoint_temperature: Option<f64>,
    #[serde(default)]
    pub mechanical_ventilation: MechanicalVentilation,
}

/// Outdoor air system of an air loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdoorAirSystem {
    pub controller: ControllerOutdoorAir,
    /// Relief and exhaust fans of the outdoor air side
    #[serde(default)]
    pub fans: Vec<Fan>,
}

/// Space of a thermal zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    /// Floor area [m2]
    pub floor_area: f64,
    /// Design number of people
    #[serde(default)]
    pub number_of_people: f64,
}

/// Thermal zone served by an air loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalZone {
    pub name: String,
    /// Required outdoor air flow rate [m3/s], computed from the design specification
    #[serde(default)]
    pub outdoor_air_flow_rate: Option<f64>,
    /// Design cooling air flow rate [m3/s]
    #[serde(default)]
    pub design_cooling_air_flow_rate: Sizing,
    /// Design heating air flow rate [m3/s]
    #[serde(default)]
    pub design_heating_air_flow_rate: Sizing,
    #[serde(default)]
    pub spaces: Vec<Space>,
    #[serde(default)]
    pub terminals: Vec<AirTerminal>,
}

impl ThermalZone {
    /// Floor area [m2]
    pub fn floor_area(&self) -> f64 {
        self.spaces.iter().map(|s| s.floor_area).sum()
    }

    /// Design number of people
    pub fn number_of_people(&self) -> f64 {
        self.spaces.iter().map(|s| s.number_of_people).sum()
    }

    /// Required outdoor air flow rate [m3/s]
    pub fn required_outdoor_air(&self) -> Result<f64, HvacError> {
        let v_bz = self.outdoor_air_flow_rate.ok_or_else(|| HvacError::Unavailable {
            object: self.name.clone(),
            quantity: "required outdoor air flow rate",
            state: "not set",
        })?;
        self.non_negative("required outdoor air flow rate", v_bz)
    }

    /// Primary design air flow [m3/s], the larger of cooling and heating design flows
    pub fn primary_design_air_flow(&self) -> Result<f64, HvacError> {
        let cooling = self
            .design_cooling_air_flow_rate
            .resolve(&self.name, "design cooling air flow rate")?;
        let heating = self
            .design_heating_air_flow_rate
            .resolve(&self.name, "design heating air flow rate")?;
        self.non_negative("primary design air flow", cooling.max(heating))
    }

    /// Negative or non finite flows are invalid
    fn non_negative(&self, quantity: &'static str, value: f64) -> Result<f64, HvacError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(HvacError::InvalidValue {
                object: self.name.clone(),
                quantity,
                value,
            })
        }
    }

    /// Air terminals with a damper
    pub fn damper_terminals(&self) -> impl Iterator<Item = &AirTerminal> {
        self.terminals.iter().filter(|t| t.has_damper())
    }

    /// True if any air terminal of the zone is fan powered
    pub fn has_fan_powered_terminal(&self) -> bool {
        self.terminals.iter().any(AirTerminal::is_fan_powered)
    }
}

/// Air loop (air handling system)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirLoop {
    pub name: String,
    /// Design supply air flow rate [m3/s]
    #[serde(default)]
    pub design_supply_air_flow_rate: Sizing,
    /// Supply side components, ordered from the supply inlet to the demand outlet
    #[serde(default)]
    pub supply_components: Vec<SupplyComponent>,
    #[serde(default)]
    pub outdoor_air_system: Option<OutdoorAirSystem>,
    /// Return and exhaust air are fully ducted to the mechanical room
    #[serde(default)]
    pub fully_ducted_return: bool,
    #[serde(default)]
    pub zones: Vec<ThermalZone>,
}

impl AirLoop {
    /// Design supply air flow rate [m3/s]
    pub fn design_supply_air_flow(&self) -> Result<f64, HvacError> {
        self.design_supply_air_flow_rate
            .resolve(&self.name, "design supply air flow rate")
    }

    /// Outdoor air controller, if the loop has an outdoor air system
    pub fn oa_controller(&self) -> Option<&ControllerOutdoorAir> {
        self.outdoor_air_system.as_ref().map(|oas| &oas.controller)
    }

    /// Mutable outdoor air controller, if the loop has an outdoor air system
    pub fn oa_controller_mut(&mut self) -> Option<&mut ControllerOutdoorAir> {
        self.outdoor_air_system
            .as_mut()
            .map(|oas| &mut oas.controller)
    }

    /// Fans placed directly on the supply side
    pub fn direct_supply_fans(&self) -> impl Iterator<Item = &Fan> {
        self.supply_components.iter().filter_map(|c| match c {
            SupplyComponent::Fan(fan) => Some(fan),
            _ => None,
        })
    }

    /// Supply fans, either placed on the supply side or inside unitary systems,
    /// in supply inlet to demand outlet order
    pub fn supply_fans(&self) -> impl Iterator<Item = &Fan> {
        self.supply_components.iter().filter_map(|c| match c {
            SupplyComponent::Fan(fan) => Some(fan),
            SupplyComponent::Unitary(unitary) => unitary.supply_fan.as_ref(),
            _ => None,
        })
    }

    /// Cooling coils, either placed on the supply side or inside unitary systems
    pub fn cooling_coils(&self) -> impl Iterator<Item = &CoolingCoil> {
        self.supply_components.iter().filter_map(|c| match c {
            SupplyComponent::CoolingCoil(coil) => Some(coil),
            SupplyComponent::Unitary(unitary) => unitary.cooling_coil.as_ref(),
            _ => None,
        })
    }

    /// Heating coils, either placed on the supply side or inside unitary systems
    pub fn heating_coils(&self) -> impl Iterator<Item = &HeatingCoil> {
        self.supply_components.iter().filter_map(|c| match c {
            SupplyComponent::HeatingCoil(coil) => Some(coil),
            SupplyComponent::Unitary(unitary) => unitary.heating_coil.as_ref(),
            _ => None,
        })
    }

    /// Unitary systems of the supply side
    pub fn unitary_systems(&self) -> impl Iterator<Item = &UnitarySystem> {
        self.supply_components.iter().filter_map(|c| match c {
            SupplyComponent::Unitary(unitary) => Some(unitary),
            _ => None,
        })
    }

    /// Floor area served [m2]
    pub fn floor_area_served(&self) -> f64 {
        self.zones.iter().map(ThermalZone::floor_area).sum()
    }

    /// Design number of people served
    pub fn number_of_people_served(&self) -> f64 {
        self.zones.iter().map(ThermalZone::number_of_people).sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{test_fan, FanKind};
    use pretty_assertions::assert_eq;

    /// Thermal zone with one VAV reheat terminal and no OA requirement
    pub fn vav_zone(name: &str, v_pz: f64, mdp: Option<f64>) -> ThermalZone {
        ThermalZone {
            name: name.into(),
            outdoor_air_flow_rate: None,
            design_cooling_air_flow_rate: Sizing::Autosized(v_pz),
            design_heating_air_flow_rate: Sizing::Autosized(v_pz * 0.5),
            spaces: vec![Space {
                name: format!("{} space", name),
                floor_area: 100.0,
                number_of_people: 5.0,
            }],
            terminals: vec![AirTerminal::VavReheat {
                name: format!("{} VAV", name),
                minimum_air_flow_fraction: mdp,
            }],
        }
    }

    /// Outdoor air system without relief fans
    pub fn oa_system(economizer: EconomizerType, min_oa: Sizing) -> OutdoorAirSystem {
        OutdoorAirSystem {
            controller: ControllerOutdoorAir {
                name: "OA controller".into(),
                economizer_control_type: economizer,
                minimum_outdoor_air_flow_rate: min_oa,
                ..Default::default()
            },
            fans: vec![],
        }
    }

    /// Air loop without supply components or OA system
    pub fn bare_loop(name: &str, v_ps: Sizing, zones: Vec<ThermalZone>) -> AirLoop {
        AirLoop {
            name: name.into(),
            design_supply_air_flow_rate: v_ps,
            supply_components: vec![],
            outdoor_air_system: None,
            fully_ducted_return: false,
            zones,
        }
    }

    #[test]
    fn zone_flows() {
        let zone = vav_zone("Zone", 1.0, Some(0.3));
        assert_eq!(zone.primary_design_air_flow(), Ok(1.0));
        assert!(zone.required_outdoor_air().is_err());
        assert_eq!(zone.floor_area(), 100.0);

        let mut pending = zone.clone();
        pending.design_heating_air_flow_rate = Sizing::Autosize;
        assert_eq!(
            pending.primary_design_air_flow(),
            Err(HvacError::Unavailable {
                object: "Zone".into(),
                quantity: "design heating air flow rate",
                state: "autosize pending"
            })
        );
    }

    #[test]
    fn negative_zone_flows_are_invalid() {
        let mut zone = vav_zone("Zone", 1.0, Some(0.3));
        zone.outdoor_air_flow_rate = Some(-500.0);
        assert_eq!(
            zone.required_outdoor_air(),
            Err(HvacError::InvalidValue {
                object: "Zone".into(),
                quantity: "required outdoor air flow rate",
                value: -500.0
            })
        );
        zone.outdoor_air_flow_rate = Some(0.0);
        assert_eq!(zone.required_outdoor_air(), Ok(0.0));

        zone.design_cooling_air_flow_rate = Sizing::Fixed(-2.0);
        zone.design_heating_air_flow_rate = Sizing::Fixed(-1.0);
        assert_eq!(
            zone.primary_design_air_flow(),
            Err(HvacError::InvalidValue {
                object: "Zone".into(),
                quantity: "primary design air flow",
                value: -1.0
            })
        );
    }

    #[test]
    fn supply_side_walk() {
        let mut aloop = bare_loop("AHU", Sizing::Fixed(2.0), vec![]);
        aloop.supply_components = vec![
            SupplyComponent::Fan(test_fan("Return fan", FanKind::ConstantVolume, 2.0, 300.0)),
            SupplyComponent::Unitary(UnitarySystem {
                name: "RTU".into(),
                kind: UnitaryKind::UnitarySystem,
                supply_fan: Some(test_fan("RTU fan", FanKind::OnOff, 2.0, 600.0)),
                cooling_coil: Some(CoolingCoil::Water {
                    name: "CHW".into(),
                    design_coil_load: Sizing::Fixed(10000.0),
                }),
                heating_coil: None,
            }),
        ];
        let names: Vec<&str> = aloop.supply_fans().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Return fan", "RTU fan"]);
        assert_eq!(aloop.direct_supply_fans().count(), 1);
        assert_eq!(aloop.cooling_coils().count(), 1);
        assert_eq!(aloop.heating_coils().count(), 0);
        assert!(aloop.oa_controller().is_none());
    }
}

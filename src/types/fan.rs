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

// == Fans ==

use serde_derive::{Deserialize, Serialize};

use crate::error::HvacError;
use crate::types::Sizing;
use crate::units::{m3_per_s_to_cfm, pa_to_in_h2o, FAN_BHP_CONSTANT};

/// Fan kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanKind {
    ConstantVolume,
    VariableVolume,
    OnOff,
}

/// Fan of an air loop, a unitary system or a fan powered terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fan {
    /// Fan name
    pub name: String,
    /// Fan kind
    pub kind: FanKind,
    /// Design (maximum) flow rate [m3/s]
    #[serde(default)]
    pub maximum_flow_rate: Sizing,
    /// Pressure rise [Pa]
    pub pressure_rise: f64,
    /// Total fan efficiency (impeller x motor) [-]
    pub fan_efficiency: f64,
    /// Motor efficiency [-]
    pub motor_efficiency: f64,
}

impl Fan {
    /// Design flow rate [m3/s]
    pub fn design_flow_rate(&self) -> Result<f64, HvacError> {
        self.maximum_flow_rate
            .resolve(&self.name, "design supply air flow rate")
    }

    /// Impeller efficiency, total fan efficiency over motor efficiency
    pub fn impeller_efficiency(&self) -> f64 {
        self.fan_efficiency / self.motor_efficiency
    }

    /// Brake horsepower [hp]
    pub fn brake_horsepower(&self) -> Result<f64, HvacError> {
        let flow_cfm = m3_per_s_to_cfm(self.design_flow_rate()?);
        let impeller_eff = self.impeller_efficiency();
        if !(impeller_eff > 0.0) {
            return Err(HvacError::InvalidValue {
                object: self.name.clone(),
                quantity: "impeller efficiency",
                value: impeller_eff,
            });
        }
        Ok(pa_to_in_h2o(self.pressure_rise) * flow_cfm / (impeller_eff * FAN_BHP_CONSTANT))
    }

    /// Change the impeller efficiency, keeping the motor efficiency
    pub fn change_impeller_efficiency(&mut self, impeller_eff: f64) {
        self.fan_efficiency = impeller_eff * self.motor_efficiency;
    }

    /// Change the motor efficiency, keeping the impeller efficiency
    pub fn change_motor_efficiency(&mut self, motor_eff: f64) {
        let impeller_eff = self.impeller_efficiency();
        self.motor_efficiency = motor_eff;
        self.fan_efficiency = impeller_eff * motor_eff;
    }

    /// True for variable volume fans
    pub fn is_variable_volume(&self) -> bool {
        self.kind == FanKind::VariableVolume
    }
}

#[cfg(test)]
pub(crate) fn test_fan(name: &str, kind: FanKind, flow_m3_per_s: f64, pressure_rise: f64) -> Fan {
    Fan {
        name: name.into(),
        kind,
        maximum_flow_rate: Sizing::Autosized(flow_m3_per_s),
        pressure_rise,
        fan_efficiency: 0.6,
        motor_efficiency: 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brake_horsepower() {
        // 1 in w.c., 6356 cfm, impeller 100% -> 1 bhp
        let mut fan = test_fan(
            "Supply fan",
            FanKind::VariableVolume,
            6356.0 / crate::units::CFM_PER_M3_PER_S,
            crate::units::PA_PER_IN_H2O,
        );
        fan.fan_efficiency = 0.9;
        fan.motor_efficiency = 0.9;
        assert!((fan.brake_horsepower().unwrap() - 1.0).abs() < 1e-9);
        fan.maximum_flow_rate = Sizing::Autosize;
        assert!(fan.brake_horsepower().is_err());
    }

    #[test]
    fn efficiency_changes() {
        let mut fan = test_fan("Fan", FanKind::ConstantVolume, 1.0, 500.0);
        fan.change_impeller_efficiency(0.65);
        assert!((fan.fan_efficiency - 0.65 * 0.9).abs() < 1e-12);
        fan.change_motor_efficiency(0.93);
        assert!((fan.impeller_efficiency() - 0.65).abs() < 1e-12);
        assert!((fan.motor_efficiency - 0.93).abs() < 1e-12);
    }
}

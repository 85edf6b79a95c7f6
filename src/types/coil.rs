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

// == Coils ==

use serde_derive::{Deserialize, Serialize};

use crate::types::Sizing;

/// Condenser type of DX coils
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondenserType {
    AirCooled,
    EvaporativelyCooled,
}

impl Default for CondenserType {
    fn default() -> Self {
        CondenserType::AirCooled
    }
}

/// Performance curves of a two speed DX coil
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DxCurves {
    /// Total cooling capacity as a function of temperature
    pub cap_ft: String,
    /// Total cooling capacity as a function of flow fraction
    pub cap_fff: String,
    /// Energy input ratio as a function of temperature
    pub eir_ft: String,
    /// Energy input ratio as a function of flow fraction
    pub eir_fff: String,
    /// Part load fraction correlation
    pub plf_fplr: String,
}

/// Cooling coil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CoolingCoil {
    /// Single speed DX coil
    DxSingleSpeed {
        name: String,
        /// Rated total cooling capacity [W]
        #[serde(default)]
        rated_capacity: Sizing,
        /// Rated COP [-]
        #[serde(default)]
        rated_cop: Option<f64>,
    },
    /// Two speed DX coil
    DxTwoSpeed {
        name: String,
        /// Rated high speed total cooling capacity [W]
        #[serde(default)]
        rated_high_speed_capacity: Sizing,
        /// Rated high speed COP [-]
        #[serde(default)]
        rated_high_speed_cop: Option<f64>,
        /// Rated low speed COP [-]
        #[serde(default)]
        rated_low_speed_cop: Option<f64>,
        /// High speed performance curves
        #[serde(default)]
        high_speed_curves: DxCurves,
        /// Low speed performance curves
        #[serde(default)]
        low_speed_curves: DxCurves,
        #[serde(default)]
        condenser_type: CondenserType,
    },
    /// Chilled water coil
    Water {
        name: String,
        /// Design coil load [W]
        #[serde(default)]
        design_coil_load: Sizing,
    },
    /// Other cooling coils (heat pump, packaged terminal...), not covered by capacity checks
    Other { name: String, kind: String },
}

impl CoolingCoil {
    /// Coil name
    pub fn name(&self) -> &str {
        match self {
            CoolingCoil::DxSingleSpeed { name, .. }
            | CoolingCoil::DxTwoSpeed { name, .. }
            | CoolingCoil::Water { name, .. }
            | CoolingCoil::Other { name, .. } => name,
        }
    }

    /// Capacity of the coil [W], `None` for coil types with no capacity field
    pub fn capacity(&self) -> Option<&Sizing> {
        match self {
            CoolingCoil::DxSingleSpeed { rated_capacity, .. } => Some(rated_capacity),
            CoolingCoil::DxTwoSpeed {
                rated_high_speed_capacity,
                ..
            } => Some(rated_high_speed_capacity),
            CoolingCoil::Water {
                design_coil_load, ..
            } => Some(design_coil_load),
            CoolingCoil::Other { .. } => None,
        }
    }

    /// True for DX coils
    pub fn is_dx(&self) -> bool {
        matches!(
            self,
            CoolingCoil::DxSingleSpeed { .. } | CoolingCoil::DxTwoSpeed { .. }
        )
    }
}

/// Heating coil kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingCoilKind {
    Electric,
    Gas,
    Water,
    DxSingleSpeed,
    GasMultiStage,
    Desuperheater,
    WaterToAirHeatPump,
}

/// Heating coil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingCoil {
    pub name: String,
    pub kind: HeatingCoilKind,
}

impl HeatingCoil {
    /// True for coils that use fuel, hot water or a refrigerant cycle
    pub fn is_non_electric(&self) -> bool {
        self.kind != HeatingCoilKind::Electric
    }
}

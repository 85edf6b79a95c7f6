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

// == Air terminals ==

use serde_derive::{Deserialize, Serialize};

use crate::error::HvacError;
use crate::types::Fan;

/// Air terminal unit of a thermal zone
///
/// VAV terminals carry the minimum air flow fraction of their damper. The no reheat and
/// reheat variants may leave the field unset, which reads as 1.0. Heat and cool terminals
/// always carry a value. Powered induction units and uncontrolled terminals have no damper
/// fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AirTerminal {
    VavNoReheat {
        name: String,
        #[serde(default)]
        minimum_air_flow_fraction: Option<f64>,
    },
    VavReheat {
        name: String,
        #[serde(default)]
        minimum_air_flow_fraction: Option<f64>,
    },
    VavHeatAndCoolNoReheat {
        name: String,
        minimum_air_flow_fraction: f64,
    },
    VavHeatAndCoolReheat {
        name: String,
        minimum_air_flow_fraction: f64,
    },
    SeriesPiuReheat { name: String, fan: Fan },
    ParallelPiuReheat { name: String, fan: Fan },
    Uncontrolled { name: String },
}

impl AirTerminal {
    /// Terminal name
    pub fn name(&self) -> &str {
        use AirTerminal::*;
        match self {
            VavNoReheat { name, .. }
            | VavReheat { name, .. }
            | VavHeatAndCoolNoReheat { name, .. }
            | VavHeatAndCoolReheat { name, .. }
            | SeriesPiuReheat { name, .. }
            | ParallelPiuReheat { name, .. }
            | Uncontrolled { name } => name,
        }
    }

    /// Minimum air flow fraction of the damper, `None` for terminals without damper
    pub fn minimum_air_flow_fraction(&self) -> Option<f64> {
        use AirTerminal::*;
        match self {
            VavNoReheat {
                minimum_air_flow_fraction,
                ..
            }
            | VavReheat {
                minimum_air_flow_fraction,
                ..
            } => Some(minimum_air_flow_fraction.unwrap_or(1.0)),
            VavHeatAndCoolNoReheat {
                minimum_air_flow_fraction,
                ..
            }
            | VavHeatAndCoolReheat {
                minimum_air_flow_fraction,
                ..
            } => Some(*minimum_air_flow_fraction),
            SeriesPiuReheat { .. } | ParallelPiuReheat { .. } | Uncontrolled { .. } => None,
        }
    }

    /// Minimum air flow fraction checked against the [0, 1] range
    pub fn checked_minimum_air_flow_fraction(&self) -> Result<Option<f64>, HvacError> {
        match self.minimum_air_flow_fraction() {
            Some(v) if !(0.0..=1.0).contains(&v) => Err(HvacError::InvalidValue {
                object: self.name().into(),
                quantity: "minimum air flow fraction",
                value: v,
            }),
            other => Ok(other),
        }
    }

    /// Set the minimum air flow fraction of the damper.
    ///
    /// Returns `false` for terminals without damper.
    pub fn set_minimum_air_flow_fraction(&mut self, value: f64) -> bool {
        use AirTerminal::*;
        match self {
            VavNoReheat {
                minimum_air_flow_fraction,
                ..
            }
            | VavReheat {
                minimum_air_flow_fraction,
                ..
            } => {
                *minimum_air_flow_fraction = Some(value);
                true
            }
            VavHeatAndCoolNoReheat {
                minimum_air_flow_fraction,
                ..
            }
            | VavHeatAndCoolReheat {
                minimum_air_flow_fraction,
                ..
            } => {
                *minimum_air_flow_fraction = value;
                true
            }
            SeriesPiuReheat { .. } | ParallelPiuReheat { .. } | Uncontrolled { .. } => false,
        }
    }

    /// True for terminals with a damper
    pub fn has_damper(&self) -> bool {
        self.minimum_air_flow_fraction().is_some()
    }

    /// Fan of powered induction units
    pub fn fan(&self) -> Option<&Fan> {
        match self {
            AirTerminal::SeriesPiuReheat { fan, .. } | AirTerminal::ParallelPiuReheat { fan, .. } => {
                Some(fan)
            }
            _ => None,
        }
    }

    /// True for fan powered terminals
    pub fn is_fan_powered(&self) -> bool {
        self.fan().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn damper_fraction() {
        let mut t = AirTerminal::VavReheat {
            name: "VAV 1".into(),
            minimum_air_flow_fraction: None,
        };
        assert_eq!(t.minimum_air_flow_fraction(), Some(1.0));
        assert!(t.set_minimum_air_flow_fraction(0.3));
        assert_eq!(t.minimum_air_flow_fraction(), Some(0.3));

        let mut u = AirTerminal::Uncontrolled {
            name: "Diffuser".into(),
        };
        assert_eq!(u.minimum_air_flow_fraction(), None);
        assert!(!u.set_minimum_air_flow_fraction(0.3));
        assert!(!u.has_damper());
    }

    #[test]
    fn out_of_range_fraction() {
        let t = AirTerminal::VavHeatAndCoolReheat {
            name: "VAV HC".into(),
            minimum_air_flow_fraction: 1.2,
        };
        assert_eq!(
            t.checked_minimum_air_flow_fraction(),
            Err(HvacError::InvalidValue {
                object: "VAV HC".into(),
                quantity: "minimum air flow fraction",
                value: 1.2
            })
        );
    }
}

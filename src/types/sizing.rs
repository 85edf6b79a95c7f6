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

// == Sizable fields ==

use serde_derive::{Deserialize, Serialize};

use crate::error::HvacError;

/// Value of a sizable model field (flow rates, capacities).
///
/// Separates fields that were hard sized from autosized fields, with or without a solved
/// value, and from fields that are not set at all.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Hard sized value
    Fixed(f64),
    /// Autosized field, value solved by the sizing run
    Autosized(f64),
    /// Autosized field, sizing run not done yet
    Autosize,
    /// Field not set
    Unset,
}

impl Default for Sizing {
    fn default() -> Self {
        Sizing::Unset
    }
}

impl Sizing {
    /// Value of the field, if known
    pub fn value(&self) -> Option<f64> {
        match *self {
            Sizing::Fixed(v) | Sizing::Autosized(v) => Some(v),
            Sizing::Autosize | Sizing::Unset => None,
        }
    }

    /// Hard sized value, if any
    pub fn fixed(&self) -> Option<f64> {
        match *self {
            Sizing::Fixed(v) => Some(v),
            _ => None,
        }
    }

    /// True for autosized fields, solved or not
    pub fn is_autosized(&self) -> bool {
        matches!(self, Sizing::Autosized(_) | Sizing::Autosize)
    }

    /// Value of the field or an error naming the object, the quantity and the field state
    pub fn resolve(&self, object: &str, quantity: &'static str) -> Result<f64, HvacError> {
        match *self {
            Sizing::Fixed(v) | Sizing::Autosized(v) => Ok(v),
            Sizing::Autosize => Err(HvacError::Unavailable {
                object: object.into(),
                quantity,
                state: "autosize pending",
            }),
            Sizing::Unset => Err(HvacError::Unavailable {
                object: object.into(),
                quantity,
                state: "not set",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_states() {
        assert_eq!(Sizing::Fixed(1.5).resolve("AHU", "flow"), Ok(1.5));
        assert_eq!(Sizing::Autosized(2.0).resolve("AHU", "flow"), Ok(2.0));
        assert_eq!(
            Sizing::Autosize.resolve("AHU", "flow"),
            Err(HvacError::Unavailable {
                object: "AHU".into(),
                quantity: "flow",
                state: "autosize pending"
            })
        );
        assert_eq!(Sizing::default().value(), None);
        assert_eq!(Sizing::Autosized(2.0).fixed(), None);
    }

    #[test]
    fn json_form() {
        let v: Vec<Sizing> =
            serde_json::from_str(r#"[{"fixed": 1.0}, {"autosized": 2.0}, "autosize", "unset"]"#)
                .unwrap();
        assert_eq!(
            v,
            vec![
                Sizing::Fixed(1.0),
                Sizing::Autosized(2.0),
                Sizing::Autosize,
                Sizing::Unset
            ]
        );
    }
}

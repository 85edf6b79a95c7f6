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
Metadatos
=========

- Tipo Meta y trait MetaVec
*/

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::HvacError;

/// Well known metadata key for the code vintage of a model
pub const META_TEMPLATE: &str = "TEMPLATE";
/// Well known metadata key for the climate zone of a model
pub const META_CLIMATE_ZONE: &str = "CLIMATE_ZONE";

/// Metadata of models and rule tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// metadata name.
    pub key: String,
    /// metadata value
    pub value: String,
}

impl Meta {
    /// Metadata constructor
    pub fn new<T, U>(key: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#META {}: {}", self.key, self.value)
    }
}

impl FromStr for Meta {
    type Err = HvacError;

    fn from_str(s: &str) -> Result<Meta, Self::Err> {
        let s = s.trim();
        if !s.starts_with("#META") {
            return Err(HvacError::ParseError(s.into()));
        }
        let items: Vec<&str> = s[5..].splitn(2, ':').map(str::trim).collect();
        if items.len() == 2 && !items[0].is_empty() {
            Ok(Meta::new(items[0], items[1]))
        } else {
            Err(HvacError::ParseError(s.into()))
        }
    }
}

/// Common trait for metadata handling
pub trait MetaVec {
    /// Get vector of metadata
    fn get_metavec(&self) -> &Vec<Meta>;

    /// Get mutable vector of metadata
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta>;

    /// Check if key is included in metadata
    fn has_meta(&self, key: &str) -> bool {
        self.get_metavec().iter().any(|m| m.key == key)
    }

    /// Get (optional) metadata value by key
    fn get_meta(&self, key: &str) -> Option<String> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .map(|v| v.value.clone())
    }

    /// Get (optional) metadata value by key as f64
    fn get_meta_f64(&self, key: &str) -> Option<f64> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .and_then(|v| f64::from_str(v.value.trim()).ok())
    }

    /// Update metadata value for key or insert new metadata.
    fn update_meta(&mut self, key: &str, value: &str) {
        let metavec = self.get_mut_metavec();
        match metavec.iter().position(|m| m.key == key) {
            Some(pos) => metavec[pos].value = value.to_string(),
            None => metavec.push(Meta::new(key, value)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Holder(Vec<Meta>);

    impl MetaVec for Holder {
        fn get_metavec(&self) -> &Vec<Meta> {
            &self.0
        }
        fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
            &mut self.0
        }
    }

    #[test]
    fn meta_text() {
        let meta = Meta::new("SOURCE", "ASHRAE 90.1");
        let metastr = "#META SOURCE: ASHRAE 90.1";
        assert_eq!(format!("{}", meta), metastr);
        assert_eq!(metastr.parse::<Meta>().unwrap(), meta);
        assert!("# SOURCE: x".parse::<Meta>().is_err());
        assert!("#META SOURCE".parse::<Meta>().is_err());
    }

    #[test]
    fn metavec_update() {
        let mut h = Holder(vec![Meta::new(META_TEMPLATE, "90.1-2010")]);
        assert!(h.has_meta(META_TEMPLATE));
        h.update_meta(META_TEMPLATE, "90.1-2013");
        h.update_meta("AREA", " 12.5");
        assert_eq!(h.get_meta(META_TEMPLATE).unwrap(), "90.1-2013");
        assert_eq!(h.get_meta_f64("AREA"), Some(12.5));
        assert_eq!(h.get_meta(META_CLIMATE_ZONE), None);
    }
}

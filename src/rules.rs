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

/*! Tablas de requisitos
 *
 * - tablas de requisitos por plantilla (template) y zona climática
 * - tablas por defecto (DOE reference buildings, ASHRAE 90.1-2004 a 90.1-2013)
 * - lectura de tablas de usuario
*/

mod data;
mod tables;

use std::fs::read_to_string;
use std::path::Path;

pub use data::*;
pub use tables::*;

use crate::error::HvacError;

/// Default rule tables, checked for completeness
pub fn default_rules() -> Result<RuleSet, HvacError> {
    RuleSet::from_text(RULES_901)
}

/// Read rule tables from a file, replacing the default tables
pub fn rules_from_file<P: AsRef<Path>>(path: P) -> Result<RuleSet, HvacError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(HvacError::FileNotFound(path.display().to_string()));
    }
    RuleSet::from_text(&read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClimateZone, EconomizerType, HeatingType, Template};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_rules_are_complete() {
        let rules = default_rules().unwrap();
        assert_eq!(rules.validate(), Ok(()));
    }

    #[test]
    fn economizer_dry_bulb_limit_2010_6a() {
        let rules = default_rules().unwrap();
        let limits = rules
            .economizer_limits(
                Template::Ashrae2010,
                ClimateZone::CZ6A,
                EconomizerType::FixedDryBulb,
            )
            .unwrap();
        assert_eq!(limits.dry_bulb_f, Some(70.0));
        // No fixed dry bulb limit for humid zones since 90.1-2010
        assert!(rules
            .economizer_limits(
                Template::Ashrae2010,
                ClimateZone::CZ2A,
                EconomizerType::FixedDryBulb
            )
            .is_none());
    }

    #[test]
    fn erv_not_required_pre1980() {
        let rules = default_rules().unwrap();
        for oa in &[0.0, 0.35, 0.7, 0.95, 1.0] {
            assert_eq!(
                rules.erv_threshold(Template::DoeRefPre1980, ClimateZone::CZ1A, *oa),
                Ok(None)
            );
        }
    }

    #[test]
    fn erv_band_lower_bound_is_inclusive() {
        let rules = default_rules().unwrap();
        assert_eq!(
            rules.erv_threshold(Template::Ashrae2010, ClimateZone::CZ6B, 0.3),
            Ok(Some(11000.0))
        );
        assert_eq!(
            rules.erv_threshold(Template::Ashrae2010, ClimateZone::CZ6B, 0.29),
            Ok(None)
        );
        assert_eq!(
            rules.erv_threshold(Template::Ashrae2013, ClimateZone::CZ7A, 0.1),
            Ok(Some(0.0))
        );
    }

    #[test]
    fn economizer_tables() {
        let rules = default_rules().unwrap();
        assert_eq!(
            rules.economizer_min_capacity(Template::Ashrae2007, ClimateZone::CZ4A),
            Ok(None)
        );
        assert_eq!(
            rules.economizer_min_capacity(Template::Ashrae2007, ClimateZone::CZ2B),
            Ok(Some(35000.0))
        );
        assert_eq!(
            rules.economizer_min_capacity(Template::Ashrae2013, ClimateZone::CZ4A),
            Ok(Some(54000.0))
        );
        assert_eq!(
            rules.prohibited_economizers(Template::Ashrae2013, ClimateZone::CZ3A),
            Ok(&[EconomizerType::FixedDryBulb, EconomizerType::DifferentialDryBulb][..])
        );
        assert_eq!(
            rules.prohibited_economizers(Template::Ashrae2004, ClimateZone::CZ5C),
            Ok(&[][..])
        );
        let integration = rules
            .economizer_integration(Template::Ashrae2004, ClimateZone::CZ3B)
            .unwrap();
        assert!(integration.integrated);
        assert_eq!(integration.small_dx_exception_btu_per_hr, Some(65000.0));
    }

    #[test]
    fn equipment_tables() {
        let rules = default_rules().unwrap();
        assert_eq!(rules.motor_efficiency(Template::Ashrae2010, 7.5), Ok(0.91));
        assert_eq!(rules.motor_efficiency(Template::Ashrae2004, 7.6), Ok(0.895));
        assert_eq!(rules.motor_efficiency(Template::Ashrae2013, 450.0), Ok(0.958));
        let ac = rules
            .unitary_ac(Template::Ashrae2010, HeatingType::AllOther, 100_000.0)
            .unwrap();
        assert_eq!(ac.rating, EfficiencyRating::Eer(11.0));
        let fp = rules.fan_power(Template::DoeRef1980_2004).unwrap();
        assert!(!fp.single_zone_vav_uses_cv);
        assert_eq!(fp.impeller_efficiency, 0.65);
    }

    #[test]
    fn missing_rules_file() {
        assert!(rules_from_file("no/such/rules.txt").is_err());
    }
}

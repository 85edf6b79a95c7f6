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

/*! # Tablas de requisitos

Rule tables of ASHRAE 90.1 / DOE reference buildings, read from text data.

Each row is one line of comma separated values, starting with the table name. The template
and climate zone columns hold lists of values separated by `|` or `*` for all of them. A `-`
marks a missing value ("not required", "no limit"). Lines starting with `#META` hold
metadata and `#` starts a comment.

Rows are looked up in order and the first matching row wins, so catch-all rows (`*`) go
after the specific ones.
*/

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde_derive::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::HvacError;
use crate::types::{
    ClimateZone, DxCurves, EconomizerType, HeatingType, Meta, MetaVec, Template,
};

/// Rule table names
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter, Serialize)]
pub enum RuleTable {
    #[strum(serialize = "ECONOMIZER_REQUIRED")]
    EconomizerRequired,
    #[strum(serialize = "ECONOMIZER_LIMITS")]
    EconomizerLimits,
    #[strum(serialize = "ECONOMIZER_INTEGRATION")]
    EconomizerIntegration,
    #[strum(serialize = "ECONOMIZER_PROHIBITED")]
    EconomizerProhibited,
    #[strum(serialize = "ERV")]
    Erv,
    #[strum(serialize = "DCV")]
    Dcv,
    #[strum(serialize = "MULTIZONE_OPT")]
    MultizoneOpt,
    #[strum(serialize = "FAN_POWER")]
    FanPower,
    #[strum(serialize = "MOTOR")]
    Motor,
    #[strum(serialize = "UNITARY_AC")]
    UnitaryAc,
}

/// Template and climate zone keys of a row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleKey {
    pub templates: Vec<Template>,
    pub zones: Vec<ClimateZone>,
}

impl RuleKey {
    fn matches(&self, template: Template, zone: ClimateZone) -> bool {
        self.templates.contains(&template) && self.zones.contains(&zone)
    }
}

/// Minimum cooling capacity requiring an economizer (Table 6.5.1)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomizerRequiredRule {
    pub key: RuleKey,
    /// Minimum cooling capacity [Btu/h], `None` if never required
    pub min_capacity_btu_per_hr: Option<f64>,
}

/// High limit shutoff of economizers (Table 6.5.1.1.3B)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomizerLimitsRule {
    pub key: RuleKey,
    pub economizer_types: Vec<EconomizerType>,
    /// Dry bulb limit [ºF]
    pub dry_bulb_f: Option<f64>,
    /// Enthalpy limit [Btu/lb]
    pub enthalpy_btu_per_lb: Option<f64>,
    /// Dew point limit [ºF]
    pub dew_point_f: Option<f64>,
}

/// Integrated economizer control (6.5.1.3)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomizerIntegrationRule {
    pub key: RuleKey,
    /// Integrated economizer required, unless one of the exceptions applies
    pub integrated: bool,
    /// DX systems below this capacity [Btu/h] may use non integrated economizers
    pub small_dx_exception_btu_per_hr: Option<f64>,
    /// Multizone VAV systems may use non integrated economizers
    pub multizone_vav_exception: bool,
}

/// Prohibited economizer high limit controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomizerProhibitedRule {
    pub key: RuleKey,
    pub prohibited: Vec<EconomizerType>,
}

/// Energy recovery requirement (Table 6.5.6.1)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErvRule {
    pub key: RuleKey,
    /// Lower bound (inclusive) of the outdoor air fraction band
    pub oa_fraction_min: f64,
    /// Upper bound (exclusive) of the outdoor air fraction band
    pub oa_fraction_max: f64,
    /// Design supply flow threshold [cfm], `None` if not required
    pub threshold_cfm: Option<f64>,
}

/// Demand controlled ventilation limits (6.4.3.9)
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct DcvLimits {
    pub min_area_ft2: f64,
    pub min_occupants_per_1000_ft2: f64,
    pub min_oa_without_economizer_cfm: f64,
    pub min_oa_with_economizer_cfm: f64,
}

/// Demand controlled ventilation requirement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DcvRule {
    pub templates: Vec<Template>,
    /// Limits, `None` if never required
    pub limits: Option<DcvLimits>,
}

/// Multizone VAV optimization (6.5.3.3)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultizoneOptRule {
    pub templates: Vec<Template>,
    pub required: bool,
    /// Systems with a larger outdoor air fraction are exempt
    pub max_oa_fraction: Option<f64>,
}

/// Fan power limitation (Table 6.5.3.1.1A and G3.1.2.10)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FanPowerRule {
    pub templates: Vec<Template>,
    /// Constant volume limit [bhp/cfm]
    pub cv_bhp_per_cfm: f64,
    /// Variable volume limit [bhp/cfm]
    pub vav_bhp_per_cfm: f64,
    /// Single zone VAV systems use the constant volume limit
    pub single_zone_vav_uses_cv: bool,
    /// Baseline fan impeller efficiency [-]
    pub impeller_efficiency: f64,
}

/// Minimum nominal full load efficiency of 4 pole open drip-proof motors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotorRule {
    pub templates: Vec<Template>,
    /// Lower bound (exclusive) [hp]
    pub hp_min: f64,
    /// Upper bound (inclusive) [hp]
    pub hp_max: f64,
    /// Nominal full load efficiency [-]
    pub efficiency: f64,
}

/// Efficiency rating of unitary air conditioners
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub enum EfficiencyRating {
    /// Seasonal energy efficiency ratio [Btu/Wh]
    Seer(f64),
    /// Energy efficiency ratio [Btu/Wh]
    Eer(f64),
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyRating::Seer(v) => write!(f, "{:.1}SEER", v),
            EfficiencyRating::Eer(v) => write!(f, "{:.1}EER", v),
        }
    }
}

impl FromStr for EfficiencyRating {
    type Err = HvacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let items: Vec<&str> = s.split_whitespace().collect();
        match items.as_slice() {
            ["SEER", v] => Ok(EfficiencyRating::Seer(v.parse()?)),
            ["EER", v] => Ok(EfficiencyRating::Eer(v.parse()?)),
            _ => Err(HvacError::ParseError(s.into())),
        }
    }
}

/// Minimum efficiency and curves of air cooled single package air conditioners (Table 6.8.1A)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitaryAcRule {
    pub templates: Vec<Template>,
    pub heating_types: Vec<HeatingType>,
    /// Lower bound (inclusive) [Btu/h]
    pub capacity_min_btu_per_hr: f64,
    /// Upper bound (exclusive) [Btu/h]
    pub capacity_max_btu_per_hr: f64,
    pub rating: EfficiencyRating,
    pub curves: DxCurves,
}

/// Set of rule tables
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RuleSet {
    pub meta: Vec<Meta>,
    pub economizer_required: Vec<EconomizerRequiredRule>,
    pub economizer_limits: Vec<EconomizerLimitsRule>,
    pub economizer_integration: Vec<EconomizerIntegrationRule>,
    pub economizer_prohibited: Vec<EconomizerProhibitedRule>,
    pub erv: Vec<ErvRule>,
    pub dcv: Vec<DcvRule>,
    pub multizone_opt: Vec<MultizoneOptRule>,
    pub fan_power: Vec<FanPowerRule>,
    pub motor: Vec<MotorRule>,
    pub unitary_ac: Vec<UnitaryAcRule>,
}

impl MetaVec for RuleSet {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }

    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

// ---------------- Parsing -----------------------

fn parse_templates(s: &str) -> Result<Vec<Template>, HvacError> {
    if s == "*" {
        return Ok(Template::all());
    }
    s.split('|').map(Template::parse).collect()
}

fn parse_zones(s: &str) -> Result<Vec<ClimateZone>, HvacError> {
    if s == "*" {
        return Ok(ClimateZone::all());
    }
    s.split('|').map(ClimateZone::parse).collect()
}

fn parse_economizer_types(s: &str) -> Result<Vec<EconomizerType>, HvacError> {
    if s == "-" {
        return Ok(vec![]);
    }
    s.split('|').map(EconomizerType::parse).collect()
}

fn parse_heating_types(s: &str) -> Result<Vec<HeatingType>, HvacError> {
    if s == "*" {
        return Ok(HeatingType::iter().collect());
    }
    s.split('|')
        .map(|h| {
            h.trim()
                .parse()
                .map_err(|_| HvacError::ParseError(h.trim().into()))
        })
        .collect()
}

fn parse_f64(s: &str) -> Result<f64, HvacError> {
    match s {
        "inf" => Ok(std::f64::INFINITY),
        _ => Ok(s.parse::<f64>()?),
    }
}

fn parse_opt_f64(s: &str) -> Result<Option<f64>, HvacError> {
    match s {
        "-" => Ok(None),
        _ => parse_f64(s).map(Some),
    }
}

fn parse_bool(s: &str) -> Result<bool, HvacError> {
    match s {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(HvacError::ParseError(s.into())),
    }
}

fn parse_curves(s: &str) -> Result<DxCurves, HvacError> {
    let names: Vec<&str> = s.split('|').map(str::trim).collect();
    match names.as_slice() {
        [cap_ft, cap_fff, eir_ft, eir_fff, plf_fplr] => Ok(DxCurves {
            cap_ft: (*cap_ft).into(),
            cap_fff: (*cap_fff).into(),
            eir_ft: (*eir_ft).into(),
            eir_fff: (*eir_fff).into(),
            plf_fplr: (*plf_fplr).into(),
        }),
        _ => Err(HvacError::ParseError(s.into())),
    }
}

impl RuleSet {
    fn push_row(&mut self, table: RuleTable, cols: &[&str], line: &str) -> Result<(), HvacError> {
        let expected = match table {
            RuleTable::EconomizerRequired => 3,
            RuleTable::EconomizerLimits => 6,
            RuleTable::EconomizerIntegration => 5,
            RuleTable::EconomizerProhibited => 3,
            RuleTable::Erv => 5,
            RuleTable::Dcv => 5,
            RuleTable::MultizoneOpt => 3,
            RuleTable::FanPower => 5,
            RuleTable::Motor => 4,
            RuleTable::UnitaryAc => 5,
        };
        if cols.len() != expected {
            return Err(HvacError::ParseError(line.into()));
        }
        let key = || -> Result<RuleKey, HvacError> {
            Ok(RuleKey {
                templates: parse_templates(cols[0])?,
                zones: parse_zones(cols[1])?,
            })
        };
        match table {
            RuleTable::EconomizerRequired => self.economizer_required.push(EconomizerRequiredRule {
                key: key()?,
                min_capacity_btu_per_hr: parse_opt_f64(cols[2])?,
            }),
            RuleTable::EconomizerLimits => self.economizer_limits.push(EconomizerLimitsRule {
                key: key()?,
                economizer_types: parse_economizer_types(cols[2])?,
                dry_bulb_f: parse_opt_f64(cols[3])?,
                enthalpy_btu_per_lb: parse_opt_f64(cols[4])?,
                dew_point_f: parse_opt_f64(cols[5])?,
            }),
            RuleTable::EconomizerIntegration => {
                self.economizer_integration.push(EconomizerIntegrationRule {
                    key: key()?,
                    integrated: parse_bool(cols[2])?,
                    small_dx_exception_btu_per_hr: parse_opt_f64(cols[3])?,
                    multizone_vav_exception: parse_bool(cols[4])?,
                })
            }
            RuleTable::EconomizerProhibited => {
                self.economizer_prohibited.push(EconomizerProhibitedRule {
                    key: key()?,
                    prohibited: parse_economizer_types(cols[2])?,
                })
            }
            RuleTable::Erv => self.erv.push(ErvRule {
                key: key()?,
                oa_fraction_min: parse_f64(cols[2])?,
                oa_fraction_max: parse_f64(cols[3])?,
                threshold_cfm: parse_opt_f64(cols[4])?,
            }),
            RuleTable::Dcv => {
                let values = cols[1..]
                    .iter()
                    .map(|v| parse_opt_f64(v))
                    .collect::<Result<Vec<_>, _>>()?;
                let limits = match values.as_slice() {
                    [Some(a), Some(o), Some(w), Some(e)] => Some(DcvLimits {
                        min_area_ft2: *a,
                        min_occupants_per_1000_ft2: *o,
                        min_oa_without_economizer_cfm: *w,
                        min_oa_with_economizer_cfm: *e,
                    }),
                    [None, None, None, None] => None,
                    _ => return Err(HvacError::ParseError(line.into())),
                };
                self.dcv.push(DcvRule {
                    templates: parse_templates(cols[0])?,
                    limits,
                })
            }
            RuleTable::MultizoneOpt => self.multizone_opt.push(MultizoneOptRule {
                templates: parse_templates(cols[0])?,
                required: parse_bool(cols[1])?,
                max_oa_fraction: parse_opt_f64(cols[2])?,
            }),
            RuleTable::FanPower => self.fan_power.push(FanPowerRule {
                templates: parse_templates(cols[0])?,
                cv_bhp_per_cfm: parse_f64(cols[1])?,
                vav_bhp_per_cfm: parse_f64(cols[2])?,
                single_zone_vav_uses_cv: parse_bool(cols[3])?,
                impeller_efficiency: parse_f64(cols[4])?,
            }),
            RuleTable::Motor => self.motor.push(MotorRule {
                templates: parse_templates(cols[0])?,
                hp_min: parse_f64(cols[1])?,
                hp_max: parse_f64(cols[2])?,
                efficiency: parse_f64(cols[3])?,
            }),
            RuleTable::UnitaryAc => {
                let (min, max) = cols[2]
                    .split('-')
                    .map(str::trim)
                    .collect_tuple()
                    .ok_or_else(|| HvacError::ParseError(cols[2].into()))?;
                self.unitary_ac.push(UnitaryAcRule {
                    templates: parse_templates(cols[0])?,
                    heating_types: parse_heating_types(cols[1])?,
                    capacity_min_btu_per_hr: parse_f64(min)?,
                    capacity_max_btu_per_hr: parse_f64(max)?,
                    rating: cols[3].parse()?,
                    curves: parse_curves(cols[4])?,
                })
            }
        };
        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = HvacError;

    fn from_str(s: &str) -> Result<RuleSet, Self::Err> {
        let mut rules = RuleSet::default();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if line.starts_with("#META") {
                rules.meta.push(line.parse()?);
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            let data = line.splitn(2, '#').next().unwrap_or("").trim();
            let cols: Vec<&str> = data.split(',').map(str::trim).collect();
            let table: RuleTable = cols[0]
                .parse()
                .map_err(|_| HvacError::RuleTableUnknown(cols[0].into()))?;
            rules.push_row(table, &cols[1..], line)?;
        }
        Ok(rules)
    }
}

// ---------------- Lookups -----------------------

fn no_rule(table: RuleTable, desc: String) -> HvacError {
    HvacError::NoMatchingRule(format!("{} ({})", table, desc))
}

impl RuleSet {
    /// Parse rule tables and check that they are complete
    pub fn from_text(s: &str) -> Result<RuleSet, HvacError> {
        let rules: RuleSet = s.parse()?;
        rules.validate()?;
        Ok(rules)
    }

    /// Minimum cooling capacity requiring an economizer [Btu/h]
    pub fn economizer_min_capacity(
        &self,
        template: Template,
        zone: ClimateZone,
    ) -> Result<Option<f64>, HvacError> {
        self.economizer_required
            .iter()
            .find(|r| r.key.matches(template, zone))
            .map(|r| r.min_capacity_btu_per_hr)
            .ok_or_else(|| {
                no_rule(
                    RuleTable::EconomizerRequired,
                    format!("{}, {}", template, zone),
                )
            })
    }

    /// High limit shutoff values for an economizer type. Missing rows mean no limit.
    pub fn economizer_limits(
        &self,
        template: Template,
        zone: ClimateZone,
        economizer_type: EconomizerType,
    ) -> Option<&EconomizerLimitsRule> {
        self.economizer_limits.iter().find(|r| {
            r.key.matches(template, zone) && r.economizer_types.contains(&economizer_type)
        })
    }

    /// Integrated economizer requirement
    pub fn economizer_integration(
        &self,
        template: Template,
        zone: ClimateZone,
    ) -> Result<&EconomizerIntegrationRule, HvacError> {
        self.economizer_integration
            .iter()
            .find(|r| r.key.matches(template, zone))
            .ok_or_else(|| {
                no_rule(
                    RuleTable::EconomizerIntegration,
                    format!("{}, {}", template, zone),
                )
            })
    }

    /// Prohibited economizer types
    pub fn prohibited_economizers(
        &self,
        template: Template,
        zone: ClimateZone,
    ) -> Result<&[EconomizerType], HvacError> {
        self.economizer_prohibited
            .iter()
            .find(|r| r.key.matches(template, zone))
            .map(|r| r.prohibited.as_slice())
            .ok_or_else(|| {
                no_rule(
                    RuleTable::EconomizerProhibited,
                    format!("{}, {}", template, zone),
                )
            })
    }

    /// Design supply flow [cfm] above which an ERV is required, `None` if not required
    pub fn erv_threshold(
        &self,
        template: Template,
        zone: ClimateZone,
        oa_fraction: f64,
    ) -> Result<Option<f64>, HvacError> {
        self.erv
            .iter()
            .find(|r| {
                r.key.matches(template, zone)
                    && oa_fraction >= r.oa_fraction_min
                    && oa_fraction < r.oa_fraction_max
            })
            .map(|r| r.threshold_cfm)
            .ok_or_else(|| {
                no_rule(
                    RuleTable::Erv,
                    format!("{}, {}, OA fraction {}", template, zone, oa_fraction),
                )
            })
    }

    /// Demand controlled ventilation limits, `None` if never required
    pub fn dcv_limits(&self, template: Template) -> Result<Option<DcvLimits>, HvacError> {
        self.dcv
            .iter()
            .find(|r| r.templates.contains(&template))
            .map(|r| r.limits)
            .ok_or_else(|| no_rule(RuleTable::Dcv, template.to_string()))
    }

    /// Multizone VAV optimization requirement
    pub fn multizone_opt(&self, template: Template) -> Result<&MultizoneOptRule, HvacError> {
        self.multizone_opt
            .iter()
            .find(|r| r.templates.contains(&template))
            .ok_or_else(|| no_rule(RuleTable::MultizoneOpt, template.to_string()))
    }

    /// Fan power limitation
    pub fn fan_power(&self, template: Template) -> Result<&FanPowerRule, HvacError> {
        self.fan_power
            .iter()
            .find(|r| r.templates.contains(&template))
            .ok_or_else(|| no_rule(RuleTable::FanPower, template.to_string()))
    }

    /// Minimum motor efficiency for a motor size [hp]
    pub fn motor_efficiency(&self, template: Template, hp: f64) -> Result<f64, HvacError> {
        self.motor
            .iter()
            .find(|r| {
                r.templates.contains(&template)
                    && hp <= r.hp_max
                    && (hp > r.hp_min || r.hp_min <= 0.0)
            })
            .map(|r| r.efficiency)
            .ok_or_else(|| no_rule(RuleTable::Motor, format!("{}, {:.2} hp", template, hp)))
    }

    /// Minimum efficiency and curves of unitary air conditioners
    pub fn unitary_ac(
        &self,
        template: Template,
        heating_type: HeatingType,
        capacity_btu_per_hr: f64,
    ) -> Result<&UnitaryAcRule, HvacError> {
        self.unitary_ac
            .iter()
            .find(|r| {
                r.templates.contains(&template)
                    && r.heating_types.contains(&heating_type)
                    && capacity_btu_per_hr >= r.capacity_min_btu_per_hr
                    && capacity_btu_per_hr < r.capacity_max_btu_per_hr
            })
            .ok_or_else(|| {
                no_rule(
                    RuleTable::UnitaryAc,
                    format!(
                        "{}, {}, {:.0} Btu/h",
                        template, heating_type, capacity_btu_per_hr
                    ),
                )
            })
    }

    // ---------------- Validation -----------------------

    /// Check that every template and climate zone has a row in the exhaustive tables and
    /// that banded tables cover their whole range without gaps.
    pub fn validate(&self) -> Result<(), HvacError> {
        let mut missing: Vec<String> = Vec::new();

        for t in Template::iter() {
            for cz in ClimateZone::iter() {
                let short_cz = cz.to_string().replace("ASHRAE 169-2006-", "");
                if !self.economizer_required.iter().any(|r| r.key.matches(t, cz)) {
                    missing.push(format!("{} {} {}", RuleTable::EconomizerRequired, t, short_cz));
                }
                if !self
                    .economizer_integration
                    .iter()
                    .any(|r| r.key.matches(t, cz))
                {
                    missing.push(format!(
                        "{} {} {}",
                        RuleTable::EconomizerIntegration,
                        t,
                        short_cz
                    ));
                }
                if !self
                    .economizer_prohibited
                    .iter()
                    .any(|r| r.key.matches(t, cz))
                {
                    missing.push(format!(
                        "{} {} {}",
                        RuleTable::EconomizerProhibited,
                        t,
                        short_cz
                    ));
                }
                let bands = self
                    .erv
                    .iter()
                    .filter(|r| r.key.matches(t, cz))
                    .map(|r| (r.oa_fraction_min, r.oa_fraction_max));
                if !bands_are_contiguous(bands) {
                    missing.push(format!("{} {} {}", RuleTable::Erv, t, short_cz));
                }
            }

            if !self.dcv.iter().any(|r| r.templates.contains(&t)) {
                missing.push(format!("{} {}", RuleTable::Dcv, t));
            }
            if !self.multizone_opt.iter().any(|r| r.templates.contains(&t)) {
                missing.push(format!("{} {}", RuleTable::MultizoneOpt, t));
            }
            if !self.fan_power.iter().any(|r| r.templates.contains(&t)) {
                missing.push(format!("{} {}", RuleTable::FanPower, t));
            }
            let bands = self
                .motor
                .iter()
                .filter(|r| r.templates.contains(&t))
                .map(|r| (r.hp_min, r.hp_max));
            if !bands_are_contiguous(bands) {
                missing.push(format!("{} {}", RuleTable::Motor, t));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(HvacError::RulesIncomplete(missing.join(", ")))
        }
    }
}

/// Bands, in any order, cover [0, inf) with no gaps
fn bands_are_contiguous<I: Iterator<Item = (f64, f64)>>(bands: I) -> bool {
    let bands: Vec<(f64, f64)> = bands
        .sorted_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .collect();
    if bands.is_empty() || bands[0].0 != 0.0 {
        return false;
    }
    let joined = bands.windows(2).all(|w| w[0].1 == w[1].0);
    joined && bands[bands.len() - 1].1.is_infinite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = "
#META SOURCE: test tables
ECONOMIZER_REQUIRED, *, 1A|1B, - # never
ECONOMIZER_REQUIRED, *, *, 54000
ECONOMIZER_LIMITS, *, *, FixedEnthalpy, -, 28, -
ECONOMIZER_INTEGRATION, *, *, yes, -, no
ECONOMIZER_PROHIBITED, *, *, -
ERV, *, *, 0, 0.5, -
ERV, *, *, 0.5, inf, 5000
DCV, DOE Ref Pre-1980|DOE Ref 1980-2004, -, -, -, -
DCV, *, 500, 25, 3000, 750
MULTIZONE_OPT, *, yes, 0.7
FAN_POWER, *, 0.0013, 0.00094, yes, 0.65
MOTOR, *, 0, 10, 0.9
MOTOR, *, 10, inf, 0.95
UNITARY_AC, *, *, 0-65000, SEER 13.0, a|b|c|d|e
";

    #[test]
    fn parse_minimal_tables() {
        let rules = RuleSet::from_text(MINIMAL).unwrap();
        assert_eq!(rules.get_meta("SOURCE"), Some("test tables".to_string()));
        assert_eq!(
            rules.economizer_min_capacity(Template::Ashrae2010, ClimateZone::CZ1B),
            Ok(None)
        );
        assert_eq!(
            rules.economizer_min_capacity(Template::Ashrae2010, ClimateZone::CZ2A),
            Ok(Some(54000.0))
        );
        assert_eq!(
            rules.erv_threshold(Template::Ashrae2004, ClimateZone::CZ5A, 0.5),
            Ok(Some(5000.0))
        );
        assert_eq!(
            rules.erv_threshold(Template::Ashrae2004, ClimateZone::CZ5A, 0.49),
            Ok(None)
        );
        assert_eq!(rules.dcv_limits(Template::DoeRef1980_2004), Ok(None));
        assert_eq!(rules.motor_efficiency(Template::Ashrae2013, 0.0), Ok(0.9));
        assert_eq!(rules.motor_efficiency(Template::Ashrae2013, 10.0), Ok(0.9));
        assert_eq!(rules.motor_efficiency(Template::Ashrae2013, 10.5), Ok(0.95));
        let ac = rules
            .unitary_ac(Template::Ashrae2010, HeatingType::AllOther, 30000.0)
            .unwrap();
        assert_eq!(ac.rating, EfficiencyRating::Seer(13.0));
        assert_eq!(ac.curves.plf_fplr, "e");
        assert!(rules
            .unitary_ac(Template::Ashrae2010, HeatingType::AllOther, 65000.0)
            .is_err());
        assert!(rules
            .economizer_limits(Template::Ashrae2010, ClimateZone::CZ2A, EconomizerType::FixedDryBulb)
            .is_none());
    }

    #[test]
    fn efficiency_rating_display() {
        assert_eq!(EfficiencyRating::Seer(13.0).to_string(), "13.0SEER");
        assert_eq!(EfficiencyRating::Eer(11.2).to_string(), "11.2EER");
        assert_eq!(
            "EER 11".parse::<EfficiencyRating>().unwrap().to_string(),
            "11.0EER"
        );
    }

    #[test]
    fn incomplete_tables_are_rejected() {
        let text = MINIMAL.replace("ECONOMIZER_REQUIRED, *, *, 54000", "");
        match RuleSet::from_text(&text) {
            Err(HvacError::RulesIncomplete(msg)) => {
                assert!(msg.contains("ECONOMIZER_REQUIRED DOE Ref Pre-1980 2A"))
            }
            other => panic!("unexpected result {:?}", other),
        }
        // Gap in ERV bands
        let text = MINIMAL.replace("ERV, *, *, 0.5, inf, 5000", "ERV, *, *, 0.6, inf, 5000");
        assert!(RuleSet::from_text(&text).is_err());
    }

    #[test]
    fn bad_rows() {
        assert_eq!(
            "FOO, *, *, 1".parse::<RuleSet>(),
            Err(HvacError::RuleTableUnknown("FOO".into()))
        );
        assert!("ERV, *, 9Z, 0, inf, -".parse::<RuleSet>().is_err());
        assert!("DCV, *, 500, -, 3000, 750".parse::<RuleSet>().is_err());
        assert!("MULTIZONE_OPT, *, maybe, 0.7".parse::<RuleSet>().is_err());
        assert!("ECONOMIZER_REQUIRED, *, *".parse::<RuleSet>().is_err());
    }
}

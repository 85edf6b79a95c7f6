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

// == Code vintages and climate zones ==

use std::convert::TryFrom;

use serde_derive::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::HvacError;

/// Code vintage (template) of the requirements.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum Template {
    /// DOE reference buildings, pre-1980 construction
    #[strum(to_string = "DOE Ref Pre-1980")]
    DoeRefPre1980,
    /// DOE reference buildings, 1980-2004 construction
    #[strum(to_string = "DOE Ref 1980-2004")]
    DoeRef1980_2004,
    /// ASHRAE 90.1-2004
    #[strum(to_string = "90.1-2004", serialize = "ASHRAE 90.1-2004")]
    Ashrae2004,
    /// ASHRAE 90.1-2007
    #[strum(to_string = "90.1-2007", serialize = "ASHRAE 90.1-2007")]
    Ashrae2007,
    /// ASHRAE 90.1-2010
    #[strum(to_string = "90.1-2010", serialize = "ASHRAE 90.1-2010")]
    Ashrae2010,
    /// ASHRAE 90.1-2013
    #[strum(to_string = "90.1-2013", serialize = "ASHRAE 90.1-2013")]
    Ashrae2013,
}

impl Template {
    /// Parse a template name, accepting the `ASHRAE 90.1-XXXX` aliases
    pub fn parse(s: &str) -> Result<Self, HvacError> {
        s.trim()
            .parse()
            .map_err(|_| HvacError::TemplateUnknown(s.trim().into()))
    }

    /// All templates
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl From<Template> for String {
    fn from(t: Template) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for Template {
    type Error = HvacError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Template::parse(&s)
    }
}

/// ASHRAE 169-2006 climate zone.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum ClimateZone {
    #[strum(to_string = "ASHRAE 169-2006-1A", serialize = "1A")]
    CZ1A,
    #[strum(to_string = "ASHRAE 169-2006-1B", serialize = "1B")]
    CZ1B,
    #[strum(to_string = "ASHRAE 169-2006-2A", serialize = "2A")]
    CZ2A,
    #[strum(to_string = "ASHRAE 169-2006-2B", serialize = "2B")]
    CZ2B,
    #[strum(to_string = "ASHRAE 169-2006-3A", serialize = "3A")]
    CZ3A,
    #[strum(to_string = "ASHRAE 169-2006-3B", serialize = "3B")]
    CZ3B,
    #[strum(to_string = "ASHRAE 169-2006-3C", serialize = "3C")]
    CZ3C,
    #[strum(to_string = "ASHRAE 169-2006-4A", serialize = "4A")]
    CZ4A,
    #[strum(to_string = "ASHRAE 169-2006-4B", serialize = "4B")]
    CZ4B,
    #[strum(to_string = "ASHRAE 169-2006-4C", serialize = "4C")]
    CZ4C,
    #[strum(to_string = "ASHRAE 169-2006-5A", serialize = "5A")]
    CZ5A,
    #[strum(to_string = "ASHRAE 169-2006-5B", serialize = "5B")]
    CZ5B,
    #[strum(to_string = "ASHRAE 169-2006-5C", serialize = "5C")]
    CZ5C,
    #[strum(to_string = "ASHRAE 169-2006-6A", serialize = "6A")]
    CZ6A,
    #[strum(to_string = "ASHRAE 169-2006-6B", serialize = "6B")]
    CZ6B,
    #[strum(to_string = "ASHRAE 169-2006-7A", serialize = "7A")]
    CZ7A,
    #[strum(to_string = "ASHRAE 169-2006-7B", serialize = "7B")]
    CZ7B,
    #[strum(to_string = "ASHRAE 169-2006-8A", serialize = "8A")]
    CZ8A,
    #[strum(to_string = "ASHRAE 169-2006-8B", serialize = "8B")]
    CZ8B,
}

impl ClimateZone {
    /// Parse a climate zone, either in full (`ASHRAE 169-2006-6A`) or short (`6A`) form
    pub fn parse(s: &str) -> Result<Self, HvacError> {
        s.trim()
            .parse()
            .map_err(|_| HvacError::ClimateZoneUnknown(s.trim().into()))
    }

    /// All climate zones
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl From<ClimateZone> for String {
    fn from(cz: ClimateZone) -> Self {
        cz.to_string()
    }
}

impl TryFrom<String> for ClimateZone {
    type Error = HvacError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ClimateZone::parse(&s)
    }
}

// == Outdoor air controls ==

/// Economizer control type of an outdoor air controller.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum EconomizerType {
    NoEconomizer,
    FixedDryBulb,
    FixedEnthalpy,
    DifferentialDryBulb,
    DifferentialEnthalpy,
    FixedDewPointAndDryBulb,
    ElectronicEnthalpy,
    DifferentialDryBulbAndEnthalpy,
}

impl Default for EconomizerType {
    fn default() -> Self {
        EconomizerType::NoEconomizer
    }
}

impl EconomizerType {
    /// Parse an economizer type name
    pub fn parse(s: &str) -> Result<Self, HvacError> {
        s.trim()
            .parse()
            .map_err(|_| HvacError::EconomizerTypeUnknown(s.trim().into()))
    }
}

/// Economizer lockout type. Integrated economizers run without lockout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum LockoutType {
    NoLockout,
    LockoutWithHeating,
    LockoutWithCompressor,
}

impl Default for LockoutType {
    fn default() -> Self {
        LockoutType::NoLockout
    }
}

/// System outdoor air method of the mechanical ventilation controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum OutdoorAirMethod {
    /// Sum of zone requirements
    ZoneSum,
    /// Multizone optimization (ASHRAE 62.1 VRP)
    VentilationRateProcedure,
}

impl Default for OutdoorAirMethod {
    fn default() -> Self {
        OutdoorAirMethod::ZoneSum
    }
}

// == Equipment classification ==

/// Fan power limitation type (Table 6.5.3.1.1A)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum FanPowerLimitType {
    #[strum(to_string = "constant volume")]
    ConstantVolume,
    #[strum(to_string = "variable volume")]
    VariableVolume,
}

/// Heating type of unitary air conditioners (Table 6.8.1A)
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum HeatingType {
    #[strum(to_string = "Electric Resistance or None", serialize = "ElectricResistanceOrNone")]
    ElectricResistanceOrNone,
    #[strum(to_string = "All Other", serialize = "AllOther")]
    AllOther,
}

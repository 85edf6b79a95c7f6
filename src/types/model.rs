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

// == Building model ==

use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::HvacError;
use crate::types::{
    AirLoop, ClimateZone, Meta, MetaVec, Template, META_CLIMATE_ZONE, META_TEMPLATE,
};

/// Building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
}

/// Weather file linked to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherFile {
    pub city: String,
    #[serde(default)]
    pub state_province_region: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: f64,
    pub elevation: f64,
    /// Path of the weather file
    pub url: String,
}

/// Sizing period design day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDay {
    pub name: String,
    pub month: u32,
    pub day_of_month: u32,
    /// Maximum dry bulb temperature [ºC]
    pub maximum_dry_bulb_temperature: f64,
    /// Daily dry bulb temperature range [ºC]
    #[serde(default)]
    pub daily_dry_bulb_temperature_range: f64,
    /// Humidity indicating conditions at maximum dry bulb [ºC]
    #[serde(default)]
    pub humidity_indicating_conditions: f64,
    /// Barometric pressure [Pa]
    #[serde(default = "standard_pressure")]
    pub barometric_pressure: f64,
    /// Wind speed [m/s]
    #[serde(default)]
    pub wind_speed: f64,
}

fn standard_pressure() -> f64 {
    101_325.0
}

/// Building model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    /// Model metadata
    #[serde(default)]
    pub meta: Vec<Meta>,
    #[serde(default)]
    pub building: Option<Building>,
    #[serde(default)]
    pub weather_file: Option<WeatherFile>,
    #[serde(default)]
    pub design_days: Vec<DesignDay>,
    #[serde(default)]
    pub air_loops: Vec<AirLoop>,
}

impl Model {
    /// Read a model from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HvacError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(HvacError::FileNotFound(path.display().to_string()));
        }
        read_to_string(path)?.parse()
    }

    /// Model as pretty printed JSON
    pub fn to_json(&self) -> Result<String, HvacError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Building name, or an empty string for models without building
    pub fn building_name(&self) -> &str {
        self.building.as_ref().map(|b| b.name.as_str()).unwrap_or("")
    }

    /// Template declared in the model metadata
    pub fn template(&self) -> Result<Option<Template>, HvacError> {
        self.get_meta(META_TEMPLATE)
            .map(|t| Template::parse(&t))
            .transpose()
    }

    /// Climate zone declared in the model metadata
    pub fn climate_zone(&self) -> Result<Option<ClimateZone>, HvacError> {
        self.get_meta(META_CLIMATE_ZONE)
            .map(|cz| ClimateZone::parse(&cz))
            .transpose()
    }

    /// Air loop by name
    pub fn air_loop(&self, name: &str) -> Option<&AirLoop> {
        self.air_loops.iter().find(|l| l.name == name)
    }
}

impl MetaVec for Model {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }

    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

impl FromStr for Model {
    type Err = HvacError;

    fn from_str(s: &str) -> Result<Model, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

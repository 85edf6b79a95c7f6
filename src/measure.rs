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
Sustitución del modelo
======================

Replaces the content of a model with an alternative model read from disk, keeping the
weather file and design days of the original model.
*/

use std::path::PathBuf;

use log::info;
use serde_derive::Serialize;

use crate::error::HvacError;
use crate::types::Model;

/// Default directory of alternative models
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Default alternative model file name
pub const DEFAULT_ALTERNATIVE_MODEL: &str = "FullServiceRestaurant.json";

/// Conditions before and after the model replacement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureReport {
    /// Building name of the original model
    pub initial_condition: String,
    /// Building name of the resulting model
    pub final_condition: String,
    /// Path of the alternative model
    pub alternative_model_path: String,
    /// Step messages
    pub info: Vec<String>,
}

/// Path of the alternative model, from untrimmed arguments
pub fn alternative_model_path(model_directory: &str, alternative_model: &str) -> PathBuf {
    PathBuf::from(model_directory.trim()).join(alternative_model.trim())
}

/// Replace the model content with the alternative model
///
/// The weather file and the design days of the original model are carried over to the new
/// content. The model is left untouched when the alternative model can't be read.
pub fn replace_model(
    model: &mut Model,
    model_directory: &str,
    alternative_model: &str,
) -> Result<MeasureReport, HvacError> {
    let initial_condition = format!("Model was {}.", model.building_name());
    info!("{}", initial_condition);

    let path = alternative_model_path(model_directory, alternative_model);
    let mut new_model = Model::from_file(&path)?;
    let mut messages = Vec::new();

    if new_model.weather_file.take().is_some() {
        messages.push("Removed alternate model's weather file object.".to_string());
    }
    new_model.weather_file = model.weather_file.clone();
    if !new_model.design_days.is_empty() {
        messages.push(format!(
            "Removed {} design day(s) of the alternate model.",
            new_model.design_days.len()
        ));
    }
    new_model.design_days = model.design_days.clone();

    *model = new_model;
    messages.push(format!("Model name is now {}.", model.building_name()));
    for msg in &messages {
        info!("{}", msg);
    }

    let final_condition = format!(
        "Model replaced with alternative {}. Weather file and design days retained from original.",
        path.display()
    );
    info!("{}", final_condition);

    Ok(MeasureReport {
        initial_condition,
        final_condition,
        alternative_model_path: path.display().to_string(),
        info: messages,
    })
}

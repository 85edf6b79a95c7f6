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
Controles estándar
==================

Application of the standard controls to an air loop: minimum VAV damper positions,
economizer limits and integration, multizone VAV optimization and demand controlled
ventilation.

Every step runs even if a previous one fails. Outcomes and errors are collected in a
`ControlsReport`.
*/

use log::{info, warn};
use serde_derive::Serialize;

use crate::dcv::{
    enable_demand_control_ventilation, is_demand_control_ventilation_required, DcvOutcome,
};
use crate::economizer::{set_economizer_integration, set_economizer_limits};
use crate::error::HvacError;
use crate::multizone::{
    disable_multizone_vav_optimization, enable_multizone_vav_optimization,
    is_multizone_vav_optimization_required, is_multizone_vav_system,
};
use crate::rules::RuleSet;
use crate::types::{AirLoop, ClimateZone, Model, Template};
use crate::ventilation::{set_minimum_vav_damper_positions, VentilationReport};

/// Multizone VAV optimization step
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct MultizoneStep {
    /// Optimization is required
    pub required: bool,
    /// The outdoor air method was written (false without outdoor air system)
    pub applied: bool,
}

/// Outcome of every step of `apply_standard_controls`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsReport {
    pub air_loop: String,
    pub template: Template,
    pub climate_zone: ClimateZone,
    /// The loop is a multizone VAV system
    pub multizone_vav: bool,
    /// Damper adjustment, only for multizone VAV systems
    pub damper_positions: Option<Result<VentilationReport, HvacError>>,
    /// Economizer limits written
    pub economizer_limits: bool,
    /// Economizer integration written
    pub economizer_integration: Result<bool, HvacError>,
    /// Multizone optimization, only for multizone VAV systems
    pub multizone_optimization: Option<Result<MultizoneStep, HvacError>>,
    /// DCV outcome, `None` when not required
    pub dcv: Result<Option<DcvOutcome>, HvacError>,
}

impl ControlsReport {
    /// Error messages of the failed steps, zone failures included
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        match &self.damper_positions {
            Some(Err(e)) => errors.push(format!("damper positions: {}", e)),
            Some(Ok(report)) => errors.extend(
                report
                    .failures
                    .iter()
                    .map(|f| format!("damper positions: {}", f.error)),
            ),
            None => (),
        }
        if let Err(e) = &self.economizer_integration {
            errors.push(format!("economizer integration: {}", e));
        }
        if let Some(Err(e)) = &self.multizone_optimization {
            errors.push(format!("multizone optimization: {}", e));
        }
        if let Err(e) = &self.dcv {
            errors.push(format!("demand controlled ventilation: {}", e));
        }
        errors
    }

    /// True if every step succeeded
    pub fn success(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Apply the standard controls to the air loop
pub fn apply_standard_controls(
    air_loop: &mut AirLoop,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> ControlsReport {
    info!(
        "For {} {}: applying standard controls for climate zone {}",
        template, air_loop.name, climate_zone
    );
    let multizone_vav = is_multizone_vav_system(air_loop);

    let damper_positions = if multizone_vav {
        Some(set_minimum_vav_damper_positions(air_loop))
    } else {
        None
    };

    let economizer_limits = set_economizer_limits(air_loop, template, climate_zone, rules);
    let economizer_integration =
        set_economizer_integration(air_loop, template, climate_zone, rules);

    let multizone_optimization = if multizone_vav {
        Some(
            is_multizone_vav_optimization_required(air_loop, template, climate_zone, rules).map(
                |required| {
                    let applied = if required {
                        enable_multizone_vav_optimization(air_loop)
                    } else {
                        disable_multizone_vav_optimization(air_loop)
                    };
                    MultizoneStep { required, applied }
                },
            ),
        )
    } else {
        None
    };

    let dcv = is_demand_control_ventilation_required(air_loop, template, climate_zone, rules)
        .map(|required| {
            if required {
                Some(enable_demand_control_ventilation(air_loop))
            } else {
                None
            }
        });

    let report = ControlsReport {
        air_loop: air_loop.name.clone(),
        template,
        climate_zone,
        multizone_vav,
        damper_positions,
        economizer_limits,
        economizer_integration,
        multizone_optimization,
        dcv,
    };
    for e in report.errors() {
        warn!("For {} {}: {}", template, air_loop.name, e);
    }
    report
}

/// Apply the standard controls to every air loop of the model
pub fn apply_standard_controls_to_model(
    model: &mut Model,
    template: Template,
    climate_zone: ClimateZone,
    rules: &RuleSet,
) -> Vec<ControlsReport> {
    model
        .air_loops
        .iter_mut()
        .map(|air_loop| apply_standard_controls(air_loop, template, climate_zone, rules))
        .collect()
}

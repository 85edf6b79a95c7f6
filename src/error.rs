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
Errores de la librería
======================

Error type of the crate.
*/

use std::fmt;

use serde_derive::Serialize;

/// Errors raised while reading models and rule tables or applying requirements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HvacError {
    /// Generic parse error of a text line or value
    ParseError(String),
    /// Unknown code vintage (template)
    TemplateUnknown(String),
    /// Unknown climate zone
    ClimateZoneUnknown(String),
    /// Unknown economizer control type
    EconomizerTypeUnknown(String),
    /// Unknown rule table name
    RuleTableUnknown(String),
    /// Rule tables don't cover every template and climate zone
    RulesIncomplete(String),
    /// A quantity needed by a calculation can't be resolved
    Unavailable {
        /// Model object name
        object: String,
        /// Name of the missing quantity
        quantity: &'static str,
        /// State of the field ("autosize pending", "not set")
        state: &'static str,
    },
    /// A flow rate used as divisor is zero
    ZeroFlow {
        /// Model object name
        object: String,
        /// Name of the flow rate
        quantity: &'static str,
    },
    /// A value read from the model is out of its valid range
    InvalidValue {
        /// Model object name
        object: String,
        /// Name of the quantity
        quantity: &'static str,
        /// Offending value
        value: f64,
    },
    /// A model object lacks a component needed by the operation
    MissingComponent {
        /// Model object name
        object: String,
        /// Kind of the missing component
        component: &'static str,
    },
    /// The operation doesn't apply to this kind of model object
    UnsupportedComponent {
        /// Model object name
        object: String,
        /// Kind of the model object
        kind: &'static str,
    },
    /// No rule table row matches the given keys
    NoMatchingRule(String),
    /// File not found
    FileNotFound(String),
    /// I/O error
    Io(String),
    /// JSON (de)serialization error
    Json(String),
}

impl fmt::Display for HvacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HvacError::*;
        match self {
            ParseError(s) => write!(f, "Could not parse \"{}\"", s),
            TemplateUnknown(s) => write!(f, "Unknown template \"{}\"", s),
            ClimateZoneUnknown(s) => write!(f, "Unknown climate zone \"{}\"", s),
            EconomizerTypeUnknown(s) => write!(f, "Unknown economizer type \"{}\"", s),
            RuleTableUnknown(s) => write!(f, "Unknown rule table \"{}\"", s),
            RulesIncomplete(s) => write!(f, "Incomplete rule tables: {}", s),
            Unavailable {
                object,
                quantity,
                state,
            } => write!(f, "{}: {} is not available ({})", object, quantity, state),
            ZeroFlow { object, quantity } => write!(f, "{}: {} is zero", object, quantity),
            InvalidValue {
                object,
                quantity,
                value,
            } => write!(f, "{}: invalid {} ({})", object, quantity, value),
            MissingComponent { object, component } => {
                write!(f, "{}: no {} found", object, component)
            }
            UnsupportedComponent { object, kind } => {
                write!(f, "{}: operation not supported for {}", object, kind)
            }
            NoMatchingRule(s) => write!(f, "No rule found for {}", s),
            FileNotFound(s) => write!(f, "File does not exist: {}", s),
            Io(s) => write!(f, "I/O error: {}", s),
            Json(s) => write!(f, "JSON error: {}", s),
        }
    }
}

impl std::error::Error for HvacError {}

/// Result type of the crate
pub type Result<T> = std::result::Result<T, HvacError>;

impl From<std::num::ParseFloatError> for HvacError {
    fn from(err: std::num::ParseFloatError) -> Self {
        HvacError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for HvacError {
    fn from(err: serde_json::Error) -> Self {
        HvacError::Json(err.to_string())
    }
}

impl From<std::io::Error> for HvacError {
    fn from(err: std::io::Error) -> Self {
        HvacError::Io(err.to_string())
    }
}

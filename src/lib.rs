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
Hvac901
=======

This crate provides a library and binary that **apply the ASHRAE 90.1 HVAC control
requirements** (versions 90.1-2004 to 90.1-2013, plus the DOE reference building vintages)
to the air-handling systems (air loops) of a building energy model.

Requirements are looked up in rule tables keyed by code vintage (template) and climate zone
and cover:

- minimum VAV damper positions so that every zone reaches the minimum zone ventilation
  efficiency (ASHRAE 62.1 multiple zone ventilation procedure)
- economizer requirement, high limit shutoff and integration (6.5.1)
- energy recovery ventilator requirement (6.5.6.1)
- multizone VAV outdoor air optimization (6.5.3.3)
- demand controlled ventilation (6.4.3.9)
- baseline fan power allocation and fan motor efficiency (G3.1.2.10)
- minimum efficiency and performance curves of two speed DX coils (Table 6.8.1A)

It also replaces the content of a model with an alternative model, keeping the weather
file and design days of the original one.

Models use SI units (m3/s, W, m2, Pa, ºC). Rule tables use IP units, as published.

Este *crate* proporciona una biblioteca y un programa que **aplican los requisitos de
control de climatización de la norma ASHRAE 90.1** (versiones 90.1-2004 a 90.1-2013 y
edificios de referencia del DOE) a los sistemas de tratamiento de aire de un modelo
energético de edificio.

Los requisitos se obtienen de tablas indexadas por versión de la norma (plantilla) y zona
climática y comprenden:

- posiciones mínimas de compuertas VAV para alcanzar la eficiencia mínima de ventilación
  de cada zona
- necesidad, límites e integración de economizadores
- necesidad de recuperación de calor
- optimización multizona del aire exterior
- ventilación controlada por demanda
- potencia de ventiladores del edificio de referencia y rendimiento de motores
- rendimientos mínimos y curvas de comportamiento de baterías DX de dos velocidades

# Ejemplo

```rust
use hvac901::*;
use hvac901::types::{ClimateZone, Model, Template};

// lectura del modelo y de las tablas de requisitos por defecto
let mut model = Model::from_file("test_data/vav_office.json").unwrap();
let rules = rules::default_rules().unwrap();

// Aplicación de los controles estándar a todos los sistemas del modelo
let reports = apply_standard_controls_to_model(
    &mut model,
    Template::Ashrae2010,
    ClimateZone::CZ4A,
    &rules,
);

// Visualización compacta
for report in &reports {
    println!("{}", report.to_plain());
}
```

*/

mod asplain;
mod coils;
mod controls;
mod dcv;
mod economizer;
mod erv;
mod fans;
mod measure;
mod multizone;
mod ventilation;

pub mod error;
pub mod rules;
pub mod types;
pub mod units;

pub use asplain::*;
pub use coils::*;
pub use controls::*;
pub use dcv::*;
pub use economizer::*;
pub use erv::*;
pub use fans::*;
pub use measure::*;
pub use multizone::*;
pub use ventilation::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

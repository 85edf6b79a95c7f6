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

use crate::coils::CoilEfficiency;
use crate::controls::ControlsReport;
use crate::fans::{FanPowerReport, StandardFanEfficiency};
use crate::measure::MeasureReport;
use crate::ventilation::VentilationReport;

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Compact plain text format of the reports produced by the standard requirements
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

/// Muestra un valor opcional con la precisión deseada o como un guion si no está presente
fn value_or_dash(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "sí"
    } else {
        "no"
    }
}

impl AsPlain for VentilationReport {
    fn to_plain(&self) -> String {
        let zones = self
            .zones
            .iter()
            .map(|z| {
                format!(
                    "{}: v_oz = {:.3} m3/s, v_pz = {:.3} m3/s, mdp = {:.3}, e_vz = {:.3}, mdp_adj = {:.3}, e_vz_adj = {:.3}{}{}",
                    z.zone,
                    z.v_oz,
                    z.v_pz,
                    z.mdp,
                    z.e_vz,
                    z.mdp_adj,
                    z.e_vz_adj,
                    if z.adjusted { " (ajustada)" } else { "" },
                    if z.clamped { " (limitada a 1.0)" } else { "" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let failures = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.zone, f.error))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "** Posiciones mínimas de compuertas VAV ({})

V_ps = {:.3} [m3/s]
V_ou = {:.3} [m3/s]
X_s = {:.3}
E_v = {} (ajustada: {})
V_ot = {} [m3/s] (ajustado: {} [m3/s])
Zonas ajustadas: {}

{}{}",
            self.air_loop,
            self.v_ps,
            self.v_ou,
            self.x_s,
            value_or_dash(self.e_v, 3),
            value_or_dash(self.e_v_adj, 3),
            value_or_dash(self.v_ot, 3),
            value_or_dash(self.v_ot_adj, 3),
            self.num_zones_adjusted,
            zones,
            if failures.is_empty() {
                String::new()
            } else {
                format!("\n\nErrores:\n{}", failures)
            }
        )
    }
}

impl AsPlain for ControlsReport {
    fn to_plain(&self) -> String {
        let dampers = match &self.damper_positions {
            None => "no aplicable".to_string(),
            Some(Ok(report)) => report.to_plain(),
            Some(Err(e)) => format!("error: {}", e),
        };
        let integration = match &self.economizer_integration {
            Ok(v) => yes_no(*v).to_string(),
            Err(e) => format!("error: {}", e),
        };
        let multizone = match &self.multizone_optimization {
            None => "no aplicable".to_string(),
            Some(Ok(step)) => format!(
                "requerida: {}, aplicada: {}",
                yes_no(step.required),
                yes_no(step.applied)
            ),
            Some(Err(e)) => format!("error: {}", e),
        };
        let dcv = match &self.dcv {
            Ok(None) => "no requerida".to_string(),
            Ok(Some(outcome)) => format!("requerida, {}", outcome),
            Err(e) => format!("error: {}", e),
        };

        format!(
            "** Controles estándar: {} ({}, {})

VAV multizona: {}
Límites de economizador: {}
Integración de economizador: {}
Optimización multizona: {}
Ventilación controlada por demanda: {}

{}",
            self.air_loop,
            self.template,
            self.climate_zone,
            yes_no(self.multizone_vav),
            yes_no(self.economizer_limits),
            integration,
            multizone,
            dcv,
            dampers
        )
    }
}

impl AsPlain for FanPowerReport {
    fn to_plain(&self) -> String {
        let fans = self
            .fans
            .iter()
            .map(|f| {
                format!(
                    "{}: {:.2} bhp -> {:.2} bhp (calculada {:.2} bhp), rendimiento impulsor {:.3}, motor {:.3}, presión {:.1} Pa",
                    f.fan,
                    f.proposed_bhp,
                    f.target_bhp,
                    f.calculated_bhp,
                    f.impeller_efficiency,
                    f.motor_efficiency,
                    f.pressure_rise
                )
            })
            .chain(
                self.failures
                    .iter()
                    .map(|f| format!("{}: error: {}", f.fan, f.error)),
            )
            .collect::<Vec<_>>()
            .join("\n");
        let warnings = self
            .warnings
            .iter()
            .map(|w| format!("Aviso: {}", w))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "** Potencia de ventiladores ({})

Potencia del proyecto = {:.2} [bhp]
Potencia objetivo = {:.2} [bhp]
Potencia calculada = {} [bhp]

{}{}",
            self.air_loop,
            self.proposed_system_bhp,
            self.target_system_bhp,
            value_or_dash(self.calculated_system_bhp, 2),
            fans,
            if warnings.is_empty() {
                String::new()
            } else {
                format!("\n{}", warnings)
            }
        )
    }
}

impl AsPlain for StandardFanEfficiency {
    fn to_plain(&self) -> String {
        format!(
            "{}: motor {:.0} hp, rendimiento motor {:.3}, rendimiento total {:.3}",
            self.fan, self.allowed_hp, self.motor_efficiency, self.fan_efficiency
        )
    }
}

impl AsPlain for CoilEfficiency {
    fn to_plain(&self) -> String {
        format!(
            "{} -> {}: {}, {:.0} kBtu/h, {}, COP = {:.2}",
            self.original_name,
            self.name,
            self.heating_type,
            self.capacity_kbtu_per_hr,
            self.rating,
            self.cop
        )
    }
}

impl AsPlain for MeasureReport {
    fn to_plain(&self) -> String {
        format!(
            "** Sustitución del modelo

{}
{}
{}",
            self.initial_condition,
            self.info.join("\n"),
            self.final_condition
        )
    }
}

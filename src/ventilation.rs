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
Ventilación de sistemas VAV multizona
=====================================

Minimum damper position adjustment of multizone VAV air loops (ASHRAE 62.1 Appendix A,
ventilation rate procedure with a zone air distribution effectiveness of 1.0).

For every zone served by the air loop:

- `v_bz`: breathing zone outdoor air flow, the zone required outdoor air flow
- `v_oz = v_bz / e_z`, zone outdoor air flow, with `e_z = 1.0`
- `v_pz`: zone primary design air flow, the larger of design cooling and heating flows
- `mdp`: minimum damper position (minimum air flow fraction) of the zone terminal
- `v_dz = v_pz * mdp`: zone minimum discharge air flow
- `z_d = v_oz / v_dz`: zone discharge outdoor air fraction
- `e_vz = 1 + x_s - z_d`: zone ventilation efficiency

with `x_s = sum(v_bz) / v_ps` the system outdoor air fraction and `v_ps` the system design
supply air flow. Zones with `e_vz < 0.6` get their minimum damper position raised to the
fraction that reaches `e_vz = 0.6`, limited to 1.0.
*/

use log::{info, warn};
use serde_derive::Serialize;

use crate::error::HvacError;
use crate::types::{AirLoop, ThermalZone};

/// Minimum zone ventilation efficiency
pub const MIN_ZONE_VENTILATION_EFFICIENCY: f64 = 0.6;

/// Zone air distribution effectiveness
const E_Z: f64 = 1.0;

/// Tolerance of the ventilation efficiency threshold check
const EVZ_TOLERANCE: f64 = 1e-9;

/// Ventilation results of a zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneVentilation {
    /// Zone name
    pub zone: String,
    /// Breathing zone outdoor air flow [m3/s]
    pub v_bz: f64,
    /// Zone outdoor air flow [m3/s]
    pub v_oz: f64,
    /// Zone primary design air flow [m3/s]
    pub v_pz: f64,
    /// Minimum damper position before adjustment [-]
    pub mdp: f64,
    /// Zone minimum discharge air flow [m3/s]
    pub v_dz: f64,
    /// Zone discharge outdoor air fraction [-]
    pub z_d: f64,
    /// Zone ventilation efficiency before adjustment [-]
    pub e_vz: f64,
    /// Minimum damper position after adjustment [-]
    pub mdp_adj: f64,
    /// Zone ventilation efficiency after adjustment [-]
    pub e_vz_adj: f64,
    /// The minimum damper position was raised
    pub adjusted: bool,
    /// The adjusted damper position was limited to 1.0 and the zone stays below the threshold
    pub clamped: bool,
}

/// Zone that couldn't be evaluated or adjusted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneFailure {
    pub zone: String,
    pub error: HvacError,
}

/// Results of the minimum damper position adjustment of an air loop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VentilationReport {
    /// Air loop name
    pub air_loop: String,
    /// System design supply air flow [m3/s]
    pub v_ps: f64,
    /// Uncorrected outdoor air intake [m3/s]
    pub v_ou: f64,
    /// System outdoor air fraction [-]
    pub x_s: f64,
    /// System ventilation efficiency before adjustment [-]
    pub e_v: Option<f64>,
    /// System ventilation efficiency after adjustment [-]
    pub e_v_adj: Option<f64>,
    /// Outdoor air intake flow before adjustment [m3/s]
    pub v_ot: Option<f64>,
    /// Outdoor air intake flow after adjustment [m3/s]
    pub v_ot_adj: Option<f64>,
    /// Number of zones with adjusted damper positions
    pub num_zones_adjusted: usize,
    /// Results of the evaluated zones
    pub zones: Vec<ZoneVentilation>,
    /// Zones that couldn't be evaluated or adjusted
    pub failures: Vec<ZoneFailure>,
}

impl VentilationReport {
    /// All zones were evaluated and, where needed, adjusted
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Minimum of an iterator of values, `None` if empty
fn min_value<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    values.fold(None, |acc, v| match acc {
        Some(m) if m <= v => Some(m),
        _ => Some(v),
    })
}

/// Evaluate a zone and raise its minimum damper positions if needed
fn adjust_zone(zone: &mut ThermalZone, v_bz: f64, x_s: f64) -> Result<ZoneVentilation, HvacError> {
    let v_oz = v_bz / E_Z;
    let v_pz = zone.primary_design_air_flow()?;

    // Every damper fraction has to be valid, the first one sets mdp
    let mut mdp = None;
    for terminal in zone.damper_terminals() {
        let fraction = terminal.checked_minimum_air_flow_fraction()?;
        mdp = mdp.or(fraction);
    }
    let has_damper = mdp.is_some();
    let mdp = mdp.unwrap_or(1.0);

    let v_dz = v_pz * mdp;
    if v_dz <= 0.0 {
        return Err(HvacError::ZeroFlow {
            object: zone.name.clone(),
            quantity: "minimum discharge air flow",
        });
    }
    let z_d = v_oz / v_dz;
    let e_vz = 1.0 + x_s - z_d;

    if e_vz >= MIN_ZONE_VENTILATION_EFFICIENCY - EVZ_TOLERANCE {
        return Ok(ZoneVentilation {
            zone: zone.name.clone(),
            v_bz,
            v_oz,
            v_pz,
            mdp,
            v_dz,
            z_d,
            e_vz,
            mdp_adj: mdp,
            e_vz_adj: e_vz,
            adjusted: false,
            clamped: false,
        });
    }

    if !has_damper {
        return Err(HvacError::MissingComponent {
            object: zone.name.clone(),
            component: "terminal with minimum air flow fraction",
        });
    }

    let z_d_adj = 1.0 + x_s - MIN_ZONE_VENTILATION_EFFICIENCY;
    let v_dz_adj = v_oz / z_d_adj;
    let mdp_target = v_dz_adj / v_pz;
    let clamped = mdp_target > 1.0;
    let mdp_adj = mdp_target.min(1.0);
    // Dampers already above the target keep their position
    for terminal in zone.terminals.iter_mut() {
        if let Some(current) = terminal.minimum_air_flow_fraction() {
            terminal.set_minimum_air_flow_fraction(mdp_adj.max(current));
        }
    }
    let e_vz_adj = 1.0 + x_s - v_oz / (v_pz * mdp_adj);

    info!(
        "{}: minimum damper position {:.3} -> {:.3} (e_vz {:.3} -> {:.3})",
        zone.name, mdp, mdp_adj, e_vz, e_vz_adj
    );
    if clamped {
        warn!(
            "{}: minimum damper position limited to 1.0, zone ventilation efficiency stays at {:.3}",
            zone.name, e_vz_adj
        );
    }

    Ok(ZoneVentilation {
        zone: zone.name.clone(),
        v_bz,
        v_oz,
        v_pz,
        mdp,
        v_dz,
        z_d,
        e_vz,
        mdp_adj,
        e_vz_adj,
        adjusted: true,
        clamped,
    })
}

/// Raise the minimum damper positions of the zone terminals of an air loop so that every
/// zone reaches the minimum zone ventilation efficiency.
///
/// Zones that can't be evaluated are reported as failures and don't stop the evaluation of
/// the other zones. An unresolvable or zero system design supply air flow is an error.
pub fn set_minimum_vav_damper_positions(
    air_loop: &mut AirLoop,
) -> Result<VentilationReport, HvacError> {
    let v_ps = air_loop.design_supply_air_flow()?;
    if v_ps <= 0.0 {
        return Err(HvacError::ZeroFlow {
            object: air_loop.name.clone(),
            quantity: "design supply air flow rate",
        });
    }

    let mut failures = Vec::new();
    let v_bzs: Vec<Option<f64>> = air_loop
        .zones
        .iter()
        .map(|zone| match zone.required_outdoor_air() {
            Ok(v_bz) => Some(v_bz),
            Err(error) => {
                warn!("{}: {}", zone.name, error);
                failures.push(ZoneFailure {
                    zone: zone.name.clone(),
                    error,
                });
                None
            }
        })
        .collect();
    let v_ou: f64 = v_bzs.iter().flatten().sum();
    let x_s = v_ou / v_ps;

    let mut zones = Vec::new();
    for (zone, v_bz) in air_loop.zones.iter_mut().zip(v_bzs) {
        let v_bz = match v_bz {
            Some(v_bz) => v_bz,
            None => continue,
        };
        match adjust_zone(zone, v_bz, x_s) {
            Ok(result) => zones.push(result),
            Err(error) => {
                warn!("{}: {}", zone.name, error);
                failures.push(ZoneFailure {
                    zone: zone.name.clone(),
                    error,
                });
            }
        }
    }

    let e_v = min_value(zones.iter().map(|z| z.e_vz));
    let e_v_adj = min_value(zones.iter().map(|z| z.e_vz_adj));
    let v_ot = e_v.filter(|e| *e > 0.0).map(|e| v_ou / e);
    let v_ot_adj = e_v_adj.filter(|e| *e > 0.0).map(|e| v_ou / e);
    let num_zones_adjusted = zones.iter().filter(|z| z.adjusted).count();

    info!(
        "{}: x_s = {:.3}, e_v = {:?}, e_v_adj = {:?}, {} zone(s) adjusted",
        air_loop.name, x_s, e_v, e_v_adj, num_zones_adjusted
    );

    Ok(VentilationReport {
        air_loop: air_loop.name.clone(),
        v_ps,
        v_ou,
        x_s,
        e_v,
        e_v_adj,
        v_ot,
        v_ot_adj,
        num_zones_adjusted,
        zones,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{bare_loop, vav_zone, AirTerminal, Sizing};
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-4;

    fn zone_with_oa(name: &str, v_bz: f64, v_pz: f64, mdp: f64) -> ThermalZone {
        let mut zone = vav_zone(name, v_pz, Some(mdp));
        zone.outdoor_air_flow_rate = Some(v_bz);
        zone
    }

    fn two_zone_loop() -> AirLoop {
        bare_loop(
            "VAV AHU",
            Sizing::Autosized(1200.0),
            vec![
                zone_with_oa("Zone A", 200.0, 1000.0, 0.3),
                zone_with_oa("Zone B", 100.0, 1000.0, 0.5),
            ],
        )
    }

    fn mdp_of(aloop: &AirLoop, idx: usize) -> Option<f64> {
        aloop.zones[idx].terminals[0].minimum_air_flow_fraction()
    }

    #[test]
    fn adjusts_low_efficiency_zone_only() {
        let mut aloop = two_zone_loop();
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert!(report.success());
        assert!((report.x_s - 0.25).abs() < EPS);
        assert!((report.v_ou - 300.0).abs() < EPS);

        let a = &report.zones[0];
        assert!((a.v_dz - 300.0).abs() < EPS);
        assert!((a.z_d - 0.66667).abs() < EPS);
        assert!((a.e_vz - 0.58333).abs() < EPS);
        assert!((a.mdp_adj - 0.30769).abs() < EPS);
        assert!((a.e_vz_adj - 0.6).abs() < EPS);
        assert!(a.adjusted && !a.clamped);

        let b = &report.zones[1];
        assert!((b.e_vz - 1.05).abs() < EPS);
        assert!(!b.adjusted);
        assert_eq!(b.mdp_adj, 0.5);

        assert!((mdp_of(&aloop, 0).unwrap() - 0.30769).abs() < EPS);
        assert_eq!(mdp_of(&aloop, 1), Some(0.5));

        assert_eq!(report.num_zones_adjusted, 1);
        assert!((report.e_v.unwrap() - 0.58333).abs() < EPS);
        assert!((report.e_v_adj.unwrap() - 0.6).abs() < EPS);
        assert!((report.v_ot.unwrap() - 300.0 / 0.58333).abs() < 0.01);
        assert!(report.e_v_adj.unwrap() >= report.e_v.unwrap());
    }

    #[test]
    fn second_run_is_a_fixed_point() {
        let mut aloop = two_zone_loop();
        set_minimum_vav_damper_positions(&mut aloop).unwrap();
        let after_first = aloop.clone();
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert_eq!(report.num_zones_adjusted, 0);
        assert_eq!(aloop, after_first);
    }

    #[test]
    fn clamped_zone_is_reported() {
        // v_bz close to v_pz: the zone can't reach 0.6 even fully open
        let mut aloop = bare_loop(
            "AHU",
            Sizing::Fixed(2.0),
            vec![zone_with_oa("Kitchen", 0.9, 1.0, 0.2)],
        );
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        let z = &report.zones[0];
        assert!(z.adjusted && z.clamped);
        assert_eq!(z.mdp_adj, 1.0);
        assert!(z.e_vz_adj < MIN_ZONE_VENTILATION_EFFICIENCY);
        assert!(z.mdp_adj >= z.mdp);
        assert_eq!(mdp_of(&aloop, 0), Some(1.0));
    }

    #[test]
    fn zero_discharge_flow_is_a_zone_failure() {
        let mut aloop = two_zone_loop();
        aloop.zones.push(zone_with_oa("Closed", 10.0, 1000.0, 0.0));
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert!(!report.success());
        assert_eq!(
            report.failures,
            vec![ZoneFailure {
                zone: "Closed".into(),
                error: HvacError::ZeroFlow {
                    object: "Closed".into(),
                    quantity: "minimum discharge air flow"
                }
            }]
        );
        assert_eq!(report.zones.len(), 2);
        assert!(report.e_v.unwrap().is_finite());
    }

    #[test]
    fn unresolved_inputs_are_zone_failures() {
        let mut aloop = two_zone_loop();
        aloop.zones[1].design_cooling_air_flow_rate = Sizing::Autosize;
        let mut no_oa = vav_zone("No OA", 500.0, Some(0.4));
        no_oa.outdoor_air_flow_rate = None;
        aloop.zones.push(no_oa);
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        let failed: Vec<&str> = report.failures.iter().map(|f| f.zone.as_str()).collect();
        assert_eq!(failed, vec!["No OA", "Zone B"]);
        assert_eq!(report.zones.len(), 1);
        // The zone A adjustment still happens
        assert!((mdp_of(&aloop, 0).unwrap() - 0.30769).abs() < EPS);
    }

    #[test]
    fn invalid_fraction_and_missing_damper() {
        let mut aloop = two_zone_loop();
        // Small x_s, so that zone B needs an adjustment
        aloop.design_supply_air_flow_rate = Sizing::Fixed(100_000.0);
        aloop.zones[0].terminals[0] = AirTerminal::VavHeatAndCoolReheat {
            name: "Bad".into(),
            minimum_air_flow_fraction: -0.1,
        };
        aloop.zones[1].terminals = vec![AirTerminal::Uncontrolled {
            name: "Diffuser".into(),
        }];
        aloop.zones[1].outdoor_air_flow_rate = Some(900.0);
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            report.failures[0].error,
            HvacError::InvalidValue { .. }
        ));
        assert!(matches!(
            report.failures[1].error,
            HvacError::MissingComponent { .. }
        ));
    }

    #[test]
    fn higher_damper_positions_are_kept() {
        let mut aloop = two_zone_loop();
        aloop.zones[0].terminals.push(AirTerminal::VavReheat {
            name: "Zone A VAV 2".into(),
            minimum_air_flow_fraction: Some(0.9),
        });
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert!(report.success());
        assert!(report.zones[0].adjusted);
        let terminals = &aloop.zones[0].terminals;
        assert!((terminals[0].minimum_air_flow_fraction().unwrap() - 0.30769).abs() < EPS);
        assert_eq!(terminals[1].minimum_air_flow_fraction(), Some(0.9));
    }

    #[test]
    fn negative_outdoor_air_is_a_zone_failure() {
        let mut aloop = two_zone_loop();
        aloop.zones.push(zone_with_oa("Negative", -500.0, 1000.0, 0.3));
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert!(!report.success());
        assert_eq!(
            report.failures,
            vec![ZoneFailure {
                zone: "Negative".into(),
                error: HvacError::InvalidValue {
                    object: "Negative".into(),
                    quantity: "required outdoor air flow rate",
                    value: -500.0
                }
            }]
        );
        // The invalid zone doesn't count toward the system outdoor air fraction
        assert!((report.v_ou - 300.0).abs() < EPS);
        assert!((report.x_s - 0.25).abs() < EPS);
        assert!(report.v_ot.unwrap() > 0.0);
        assert_eq!(report.zones.len(), 2);
        assert_eq!(aloop.zones[2].terminals[0].minimum_air_flow_fraction(), Some(0.3));
    }

    #[test]
    fn negative_primary_flow_is_a_zone_failure() {
        let mut aloop = two_zone_loop();
        aloop.zones[1].design_cooling_air_flow_rate = Sizing::Fixed(-1000.0);
        aloop.zones[1].design_heating_air_flow_rate = Sizing::Fixed(-500.0);
        let report = set_minimum_vav_damper_positions(&mut aloop).unwrap();
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].zone, "Zone B");
        assert!(matches!(
            report.failures[0].error,
            HvacError::InvalidValue { .. }
        ));
        assert_eq!(mdp_of(&aloop, 1), Some(0.5));
    }

    #[test]
    fn system_flow_errors() {
        let mut aloop = two_zone_loop();
        aloop.design_supply_air_flow_rate = Sizing::Unset;
        assert!(set_minimum_vav_damper_positions(&mut aloop).is_err());
        aloop.design_supply_air_flow_rate = Sizing::Fixed(0.0);
        assert_eq!(
            set_minimum_vav_damper_positions(&mut aloop),
            Err(HvacError::ZeroFlow {
                object: "VAV AHU".into(),
                quantity: "design supply air flow rate"
            })
        );
    }
}

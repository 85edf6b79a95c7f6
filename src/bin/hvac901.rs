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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use log::{Level, LevelFilter, Metadata, Record};
use serde_derive::Serialize;

use hvac901::error::HvacError;
use hvac901::rules::{default_rules, rules_from_file, RuleSet};
use hvac901::types::{ClimateZone, Model, Template};
use hvac901::*;

// Registro de mensajes -----------------------------------------------------------------------

/// Writes library diagnostics to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "AVISO",
                Level::Info => "INFO",
                Level::Debug | Level::Trace => "DEBUG",
            };
            eprintln!("[{}] {}", level, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// Funciones auxiliares -----------------------------------------------------------------------

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file = File::create(&path)
        .context(format!("No se ha podido crear el archivo {}", path.display()))?;
    file.write_all(content)
        .context(format!("No se ha podido escribir en {}", path.display()))?;
    Ok(())
}

/// Carga el modelo o termina el programa
fn get_model(path: &str) -> Model {
    Model::from_file(path).unwrap_or_else(|error| {
        eprintln!("ERROR: No se ha podido leer el modelo \"{}\" ({})", path, error);
        match error {
            HvacError::FileNotFound(_) | HvacError::Io(_) => exit(exitcode::IOERR),
            _ => exit(exitcode::DATAERR),
        }
    })
}

/// Obtén la plantilla (versión de la norma)
/// Argumentos de CLI > Metadatos del modelo
fn get_template(model: &Model, matches: &clap::ArgMatches<'_>) -> Template {
    if let Some(t) = matches.value_of("template") {
        let template = Template::parse(t).unwrap_or_else(|error| {
            eprintln!("ERROR: {}", error);
            exit(exitcode::USAGE);
        });
        println!("Plantilla (usuario): {}", template);
        return template;
    }
    match model.template() {
        Ok(Some(template)) => {
            println!("Plantilla (metadatos): {}", template);
            template
        }
        Ok(None) => {
            eprintln!("ERROR: Sin datos suficientes para determinar la plantilla");
            exit(exitcode::USAGE);
        }
        Err(error) => {
            eprintln!("ERROR: Plantilla de los metadatos no válida ({})", error);
            exit(exitcode::DATAERR);
        }
    }
}

/// Obtén la zona climática
/// Argumentos de CLI > Metadatos del modelo
fn get_climate_zone(model: &Model, matches: &clap::ArgMatches<'_>) -> ClimateZone {
    if let Some(cz) = matches.value_of("climate_zone") {
        let climate_zone = ClimateZone::parse(cz).unwrap_or_else(|error| {
            eprintln!("ERROR: {}", error);
            exit(exitcode::USAGE);
        });
        println!("Zona climática (usuario): {}", climate_zone);
        return climate_zone;
    }
    match model.climate_zone() {
        Ok(Some(climate_zone)) => {
            println!("Zona climática (metadatos): {}", climate_zone);
            climate_zone
        }
        Ok(None) => {
            eprintln!("ERROR: Sin datos suficientes para determinar la zona climática");
            exit(exitcode::USAGE);
        }
        Err(error) => {
            eprintln!("ERROR: Zona climática de los metadatos no válida ({})", error);
            exit(exitcode::DATAERR);
        }
    }
}

/// Carga las tablas de requisitos de usuario o las tablas por defecto
fn get_rules(path: Option<&str>) -> RuleSet {
    let rules = match path {
        Some(path) => {
            println!("Tablas de requisitos (archivo): \"{}\"", path);
            rules_from_file(path)
        }
        None => default_rules(),
    };
    rules.unwrap_or_else(|error| {
        eprintln!("ERROR: Tablas de requisitos no válidas ({})", error);
        match error {
            HvacError::FileNotFound(_) | HvacError::Io(_) => exit(exitcode::IOERR),
            _ => exit(exitcode::DATAERR),
        }
    })
}

/// Resultados de un sistema
#[derive(Debug, Serialize)]
struct AirLoopResults {
    controls: ControlsReport,
    fan_power: Option<Result<FanPowerReport, HvacError>>,
    fan_efficiencies: Vec<Result<StandardFanEfficiency, HvacError>>,
    coil_efficiencies: Vec<Result<CoilEfficiency, HvacError>>,
}

/// Resultados completos
#[derive(Debug, Serialize)]
struct Results {
    template: Template,
    climate_zone: ClimateZone,
    replacement: Option<MeasureReport>,
    air_loops: Vec<AirLoopResults>,
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("Hvac901")
        .bin_name("hvac901")
        .version(crate_version!())
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                   Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <danielj@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("Hvac901 - Requisitos de control de sistemas de climatización (ASHRAE 90.1).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("modelo")
            .short("m")
            .long("modelo")
            .value_name("ARCHIVO_MODELO")
            .required_unless("showlicense")
            .help("Archivo del modelo (JSON)")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("template")
            .short("t")
            .long("template")
            .value_name("PLANTILLA")
            .help("Versión de la norma (p.e. \"90.1-2010\")")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("climate_zone")
            .short("z")
            .long("zona")
            .value_name("ZONA_CLIMATICA")
            .help("Zona climática (p.e. \"ASHRAE 169-2006-4A\" o \"4A\")")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("rules")
            .short("r")
            .long("rules")
            .value_name("ARCHIVO_TABLAS")
            .help("Archivo de tablas de requisitos, sustituye a las tablas por defecto")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("replace")
            .long("replace")
            .value_name("MODELO_ALTERNATIVO")
            .help("Sustituye el modelo por un modelo alternativo, manteniendo clima y días de diseño")
            .takes_value(true)
            .min_values(0)
            .display_order(5))
        .arg(Arg::with_name("model_dir")
            .long("model_dir")
            .value_name("DIRECTORIO_MODELOS")
            .help("Directorio de modelos alternativos")
            .takes_value(true)
            .display_order(6))
        .arg(Arg::with_name("fan_power")
            .long("fan_power")
            .help("Asigna la potencia de ventiladores del edificio de referencia"))
        .arg(Arg::with_name("efficiencies")
            .long("efficiencies")
            .help("Asigna rendimientos mínimos a motores de ventiladores y baterías DX"))
        .arg(Arg::with_name("gen_archivo_modelo")
            .long("om")
            .value_name("GEN_ARCHIVO_MODELO")
            .help("Archivo de salida del modelo modificado")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                   Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
            Daniel Jiménez González <danielj@ietcc.csic.es>
            Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    init_logger(verbosity);

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Modelo -------------------------------------------------------------------------------------
    let model_path = matches.value_of("modelo").unwrap_or_default();
    let mut model = get_model(model_path);
    println!("Modelo: \"{}\" ({})", model_path, model.building_name());

    // Sustitución del modelo ---------------------------------------------------------------------
    let replacement = if matches.is_present("replace") || matches.is_present("model_dir") {
        let alternative = matches
            .value_of("replace")
            .unwrap_or(DEFAULT_ALTERNATIVE_MODEL);
        let model_dir = matches.value_of("model_dir").unwrap_or(DEFAULT_MODEL_DIR);
        match replace_model(&mut model, model_dir, alternative) {
            Ok(report) => {
                println!("{}", report.to_plain());
                Some(report)
            }
            Err(error) => {
                eprintln!("ERROR: No se ha podido sustituir el modelo ({})", error);
                match error {
                    HvacError::FileNotFound(_) | HvacError::Io(_) => exit(exitcode::IOERR),
                    _ => exit(exitcode::DATAERR),
                }
            }
        }
    } else {
        None
    };

    // Plantilla, zona climática y tablas ----------------------------------------------------------
    let template = get_template(&model, &matches);
    let climate_zone = get_climate_zone(&model, &matches);
    let rules = get_rules(matches.value_of("rules"));

    if verbosity > 1 && !model.meta.is_empty() {
        println!("Metadatos del modelo:");
        for meta in &model.meta {
            println!("  {}: {}", meta.key, meta.value);
        }
    }

    // Aplicación de requisitos ---------------------------------------------------------------------
    let mut air_loops = Vec::new();
    for air_loop in model.air_loops.iter_mut() {
        let controls = apply_standard_controls(air_loop, template, climate_zone, &rules);

        let fan_power = if matches.is_present("fan_power") {
            Some(apply_baseline_fan_power(air_loop, template, &rules))
        } else {
            None
        };

        let (fan_efficiencies, coil_efficiencies) = if matches.is_present("efficiencies") {
            let fans = apply_standard_fan_efficiencies(air_loop, template, &rules);
            let coils = apply_standard_coil_efficiencies(air_loop, template, &rules);
            (fans, coils)
        } else {
            (Vec::new(), Vec::new())
        };

        air_loops.push(AirLoopResults {
            controls,
            fan_power,
            fan_efficiencies,
            coil_efficiencies,
        });
    }

    if air_loops.is_empty() {
        println!("El modelo no contiene sistemas de tratamiento de aire");
    }

    // Guardado del modelo modificado -----------------------------------------------------------
    if let Some(path) = matches.value_of_os("gen_archivo_modelo") {
        let path = Path::new(path);
        let saved = model
            .to_json()
            .map_err(Error::from)
            .and_then(|json| writefile(path, json.as_bytes()));
        if let Err(error) = saved {
            eprintln!("ERROR: {}", error);
            exit(exitcode::CANTCREAT);
        }
        if verbosity > 0 {
            println!("Guardado archivo del modelo: {}", path.display());
        }
    }

    // Salida de resultados ------------------------------------------------------------------------
    let results = Results {
        template,
        climate_zone,
        replacement,
        air_loops,
    };

    if let Some(path) = matches.value_of_os("archivo_salida_json") {
        let path = Path::new(path);
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&results).unwrap_or_else(|error| {
            eprintln!("ERROR: No se han podido convertir los resultados al formato JSON");
            if verbosity > 2 {
                println!("{:?}", error)
            };
            exit(exitcode::DATAERR);
        });
        if let Err(error) = writefile(path, json.as_bytes()) {
            eprintln!("ERROR: {}", error);
            exit(exitcode::CANTCREAT);
        }
    }

    // Mostrar siempre en formato plain
    let mut all_ok = true;
    for res in &results.air_loops {
        println!("\n{}", res.controls.to_plain());
        all_ok &= res.controls.success();
        match &res.fan_power {
            Some(Ok(report)) => {
                println!("\n{}", report.to_plain());
                all_ok &= report.success();
            }
            Some(Err(error)) => {
                println!("\n** Potencia de ventiladores: error: {}", error);
                all_ok = false;
            }
            None => (),
        }
        for eff in &res.fan_efficiencies {
            match eff {
                Ok(eff) => println!("{}", eff.to_plain()),
                Err(error) => {
                    println!("Ventilador: error: {}", error);
                    all_ok = false;
                }
            }
        }
        for eff in &res.coil_efficiencies {
            match eff {
                Ok(eff) => println!("{}", eff.to_plain()),
                Err(error) => {
                    println!("Batería DX: error: {}", error);
                    all_ok = false;
                }
            }
        }
    }
    if !all_ok {
        println!("\nAVISO: algunos requisitos no se han podido aplicar");
    }
}

#[test]
fn office_from_metadata() {
    assert_cli::Assert::main_binary()
        .with_args(&["-m", "test_data/vav_office.json"])
        .stdout()
        .contains("Plantilla (metadatos): 90.1-2010")
        .stdout()
        .contains("Zona climática (metadatos): ASHRAE 169-2006-4A")
        .stdout()
        .contains("** Controles estándar: VAV_1 (90.1-2010, ASHRAE 169-2006-4A)")
        .stdout()
        .contains("Optimización multizona: requerida: sí, aplicada: sí")
        .unwrap();
}

#[test]
fn office_user_template_and_climate() {
    assert_cli::Assert::main_binary()
        .with_args(&["-m", "test_data/vav_office.json", "-t", "90.1-2007", "-z", "4A"])
        .stdout()
        .contains("Plantilla (usuario): 90.1-2007")
        .stdout()
        .contains("** Controles estándar: VAV_1 (90.1-2007, ASHRAE 169-2006-4A)")
        .stdout()
        .contains("Optimización multizona: requerida: no, aplicada: sí")
        .stdout()
        .contains("Ventilación controlada por demanda: no requerida")
        .unwrap();
}

#[test]
fn office_fan_power_and_efficiencies() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/vav_office.json",
            "--fan_power",
            "--efficiencies",
        ])
        .stdout()
        .contains("** Potencia de ventiladores (VAV_1)")
        .stdout()
        .contains("VAV_1 DX coil -> VAV_1 DX coil 100kBtu/hr 11.0EER")
        .unwrap();
}

#[test]
fn replace_with_alternative_model() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/vav_office.json",
            "--model_dir",
            "test_data/models",
            "-t",
            "90.1-2010",
            "-z",
            "5A",
        ])
        .stdout()
        .contains("Model was Medium office.")
        .stdout()
        .contains("Model name is now Full service restaurant.")
        .stdout()
        .contains("** Controles estándar: PSZ-AC Dining")
        .unwrap();
}

#[test]
fn missing_model_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-m", "test_data/no_model.json"])
        .fails()
        .and()
        .stderr()
        .contains("ERROR")
        .unwrap();
}

#[test]
fn unknown_template() {
    assert_cli::Assert::main_binary()
        .with_args(&["-m", "test_data/vav_office.json", "-t", "90.1-1999"])
        .fails()
        .and()
        .stderr()
        .contains("Unknown template \"90.1-1999\"")
        .unwrap();
}

#[test]
fn show_license() {
    assert_cli::Assert::main_binary()
        .with_args(&["-L"])
        .stdout()
        .contains("Permission is hereby granted")
        .unwrap();
}

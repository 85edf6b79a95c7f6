use pretty_assertions::assert_eq;

use hvac901::{error::HvacError, rules::*, types::*, *};

fn office() -> Model {
    Model::from_file("test_data/vav_office.json").unwrap()
}

#[test]
fn office_model_metadata() {
    let model = office();
    assert_eq!(model.building_name(), "Medium office");
    assert_eq!(model.template(), Ok(Some(Template::Ashrae2010)));
    assert_eq!(model.climate_zone(), Ok(Some(ClimateZone::CZ4A)));
    assert_eq!(model.air_loops.len(), 1);
    assert_eq!(model.design_days.len(), 2);
}

#[test]
fn office_controls_2010() {
    let rules = default_rules().unwrap();
    let mut model = office();
    let reports = apply_standard_controls_to_model(
        &mut model,
        Template::Ashrae2010,
        ClimateZone::CZ4A,
        &rules,
    );
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert!(report.success());
    assert!(report.multizone_vav);
    assert_eq!(report.economizer_integration, Ok(true));
    assert_eq!(
        report.multizone_optimization,
        Some(Ok(MultizoneStep {
            required: true,
            applied: true
        }))
    );
    // 75 people in 16000 ft2 is far below the DCV occupant density limit
    assert_eq!(report.dcv, Ok(None));

    // Every zone starts below the minimum zone ventilation efficiency
    let dampers = report.damper_positions.clone().unwrap().unwrap();
    assert_eq!(dampers.num_zones_adjusted, 3);
    assert!((dampers.x_s - 0.2).abs() < 1e-9);

    let air_loop = model.air_loop("VAV_1").unwrap();
    let controller = air_loop.oa_controller().unwrap();
    assert_eq!(controller.lockout_type, LockoutType::NoLockout);
    assert_eq!(
        controller.mechanical_ventilation.system_outdoor_air_method,
        OutdoorAirMethod::VentilationRateProcedure
    );
    assert!(!controller.mechanical_ventilation.demand_controlled_ventilation);
    for zone in &air_loop.zones {
        let mdp = zone.terminals[0].minimum_air_flow_fraction().unwrap();
        assert!(mdp > 0.3);
    }
}

#[test]
fn office_controls_2007() {
    let rules = default_rules().unwrap();
    let mut model = office();
    let report = apply_standard_controls(
        &mut model.air_loops[0],
        Template::Ashrae2007,
        ClimateZone::CZ4A,
        &rules,
    );
    assert!(report.success());
    // Multizone VAV systems are exempt from integration before 90.1-2010
    assert_eq!(report.economizer_integration, Ok(true));
    assert_eq!(
        model.air_loops[0].oa_controller().unwrap().lockout_type,
        LockoutType::LockoutWithCompressor
    );
    assert_eq!(
        report.multizone_optimization,
        Some(Ok(MultizoneStep {
            required: false,
            applied: true
        }))
    );
}

#[test]
fn office_requires_erv_in_2013() {
    let rules = default_rules().unwrap();
    let model = office();
    let air_loop = &model.air_loops[0];
    let pct_oa = outdoor_air_fraction(air_loop).unwrap().unwrap();
    assert!((pct_oa - 0.2).abs() < 1e-9);
    assert_eq!(
        is_energy_recovery_ventilator_required(
            air_loop,
            Template::Ashrae2013,
            ClimateZone::CZ4A,
            &rules
        ),
        Ok(true)
    );
    // An ERV turns off the multizone optimization and DCV requirements
    assert_eq!(
        is_multizone_vav_optimization_required(
            air_loop,
            Template::Ashrae2013,
            ClimateZone::CZ4A,
            &rules
        ),
        Ok(false)
    );
    assert_eq!(
        is_demand_control_ventilation_required(
            air_loop,
            Template::Ashrae2013,
            ClimateZone::CZ4A,
            &rules
        ),
        Ok(false)
    );
}

#[test]
fn office_baseline_fan_power() {
    let rules = default_rules().unwrap();
    let mut model = office();
    let air_loop = &mut model.air_loops[0];
    assert_eq!(
        fan_power_limitation_type(air_loop, Template::Ashrae2010, &rules),
        Ok(FanPowerLimitType::VariableVolume)
    );
    let report = apply_baseline_fan_power(air_loop, Template::Ashrae2010, &rules).unwrap();
    assert!(report.success());
    assert_eq!(report.fans.len(), 1);
    let calculated = report.calculated_system_bhp.unwrap();
    assert!((calculated - report.target_system_bhp).abs() / report.target_system_bhp < 0.02);
    let fan = air_loop.supply_fans().next().unwrap();
    assert!((fan.impeller_efficiency() - 0.65).abs() < 1e-9);
}

#[test]
fn office_coil_efficiency() {
    let rules = default_rules().unwrap();
    let mut model = office();
    let air_loop = &mut model.air_loops[0];
    assert_eq!(heating_type_for_air_loop(air_loop), HeatingType::AllOther);
    let results = apply_standard_coil_efficiencies(air_loop, Template::Ashrae2010, &rules);
    assert_eq!(results.len(), 1);
    let coil = results[0].clone().unwrap();
    assert_eq!(coil.name, "VAV_1 DX coil 100kBtu/hr 11.0EER");
    assert_eq!(coil.rating, EfficiencyRating::Eer(11.0));
    match air_loop.cooling_coils().next().unwrap() {
        CoolingCoil::DxTwoSpeed {
            name,
            rated_high_speed_cop,
            rated_low_speed_cop,
            ..
        } => {
            assert_eq!(name, "VAV_1 DX coil 100kBtu/hr 11.0EER");
            assert_eq!(rated_high_speed_cop, rated_low_speed_cop);
            assert!(rated_high_speed_cop.is_some());
        }
        other => panic!("Unexpected coil {:?}", other),
    };
}

#[test]
fn restaurant_unitary_system() {
    let rules = default_rules().unwrap();
    let mut model = Model::from_file("test_data/models/FullServiceRestaurant.json").unwrap();
    let air_loop = &mut model.air_loops[0];
    assert!(!is_multizone_vav_system(air_loop));
    assert_eq!(
        fan_power_limitation_type(air_loop, Template::Ashrae2010, &rules),
        Ok(FanPowerLimitType::ConstantVolume)
    );
    let report =
        apply_standard_controls(air_loop, Template::Ashrae2010, ClimateZone::CZ5A, &rules);
    assert_eq!(report.damper_positions, None);
    assert!(!report.economizer_limits);

    // 15 kW single speed coil, below 65000 Btu/h
    let results = apply_standard_coil_efficiencies(air_loop, Template::Ashrae2010, &rules);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].as_ref().map(|c| c.rating),
        Ok(EfficiencyRating::Seer(13.0))
    );
}

#[test]
fn replace_office_with_restaurant() {
    let mut model = office();
    let weather = model.weather_file.clone();
    let report =
        replace_model(&mut model, " test_data/models ", DEFAULT_ALTERNATIVE_MODEL).unwrap();
    assert_eq!(report.initial_condition, "Model was Medium office.");
    assert_eq!(model.building_name(), "Full service restaurant");
    assert_eq!(model.weather_file, weather);
    assert_eq!(model.design_days.len(), 2);
    assert_eq!(
        report.info,
        vec![
            "Removed alternate model's weather file object.".to_string(),
            "Removed 1 design day(s) of the alternate model.".to_string(),
            "Model name is now Full service restaurant.".to_string(),
        ]
    );
}

#[test]
fn missing_files() {
    assert!(matches!(
        Model::from_file("test_data/no_model.json"),
        Err(HvacError::FileNotFound(_))
    ));
    assert!(matches!(
        rules_from_file("test_data/no_rules.txt"),
        Err(HvacError::FileNotFound(_))
    ));
}

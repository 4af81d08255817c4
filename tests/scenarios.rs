use plot_efficiency::*;

/// A full plot layout as exported from a save game.
const LAYOUT: &str = r#"[["CRYSTAL_LUMITERN_1",2,24],["HYDROGEN_MATTER_SILO_5",14,13],["HYPERION_EXTRACTOR_1",9,25],["HYDROGEN_PUMP_4",31,31],["MINE_3",35,27],["SEDIMENT_EXCAVATOR_3",35,31],["NEXUS_5",27,9],["ENGINEERING_WORKSHOP_5",23,12],["HYDROGEN_MATTER_SILO_5",17,13],["SILICON_MATTER_SILO_4",20,13],["HYDROGEN_MATTER_SILO_5",18,16],["PHOTODISINTEGRATION_PLANT_4",34,23],["HYDROGEN_MATTER_SILO_5",21,16],["HYDROGEN_MATTER_SILO_5",15,16],["SILICON_MATTER_SILO_4",24,16],["SEQUESTRIAN_PLANT_4",8,28],["CONDENSER_PLANT_4",27,33],["QUANTUM_FABRICANT_2",24,8],["POWER_STATION_1",32,28],["POWER_STATION_1",9,22],["ANTI-SOLON_INVERTER_1",15,29],["CARBON_MATTER_SILO_5",24,19],["POWER_STATION_1",6,25],["SILICON_MATTER_SILO_4",21,19],["SEQUESTRIAN_PLANT_4",34,34],["POWER_STATION_1",31,34],["POWER_STATION_1",12,29],["L-CRYPTON_COLLIDER_1",9,19],["CONDENSER_PLANT_4",5,21],["PHOTODISINTEGRATION_PLANT_4",12,25],["POWER_STATION_1",6,18],["POWER_STATION_1",31,26],["POWER_STATION_1",13,22],["POWER_STATION_1",31,36],["POWER_STATION_1",11,22],["HYDROGEN_MATTER_SILO_5",18,19],["HYDROGEN_MATTER_SILO_3",15,19]]"#;

fn layout() -> Vec<Building> {
    serde_json::from_str(LAYOUT).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn full_layout_scores_only_efficiency_buildings() {
    let results = compute(&layout()).unwrap();
    let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "CRYSTAL_LUMITERN_1",
            "HYPERION_EXTRACTOR_1",
            "HYDROGEN_PUMP_4",
            "MINE_3",
            "SEDIMENT_EXCAVATOR_3",
            "PHOTODISINTEGRATION_PLANT_4",
            "SEQUESTRIAN_PLANT_4",
            "CONDENSER_PLANT_4",
            "ANTI-SOLON_INVERTER_1",
            "SEQUESTRIAN_PLANT_4",
            "L-CRYPTON_COLLIDER_1",
            "CONDENSER_PLANT_4",
            "PHOTODISINTEGRATION_PLANT_4",
        ]
    );
}

#[test]
fn full_layout_efficiencies() {
    let results = compute(&layout()).unwrap();
    let efficiencies: Vec<_> = results.iter().map(|r| r.efficiency).collect();

    let expected = [
        100.0,
        100.0,
        150.0,
        139.4745664912478,
        150.0,
        140.10384738002656,
        134.74922565156743,
        150.0,
        100.0,
        150.0,
        100.0,
        150.0,
        150.0,
    ];

    assert_eq!(efficiencies.len(), expected.len());
    for (actual, expected) in efficiencies.iter().zip(expected.iter()) {
        assert_close(*actual, *expected);
    }
}

#[test]
fn compute_is_deterministic() {
    let buildings = layout();

    assert_eq!(compute(&buildings).unwrap(), compute(&buildings).unwrap());
}

#[test]
fn condenser_next_to_power_station() {
    let buildings = [
        Building::new("CONDENSER_PLANT_4", 27, 33),
        Building::new("POWER_STATION_1", 27, 39),
    ];
    let results = compute(&buildings).unwrap();

    assert_eq!(results.len(), 1);
    let delta = results[0].efficiency - 80.0;
    assert!(delta > 0.0 && delta <= 20.0);
    assert_close(results[0].efficiency, 93.93908473268674);
}

#[test]
fn adjacent_condensers_fall_below_base() {
    let buildings = [
        Building::new("CONDENSER_PLANT_4", 10, 10),
        Building::new("CONDENSER_PLANT_4", 10, 14),
    ];

    for result in compute(&buildings).unwrap() {
        assert!(result.efficiency < 80.0);
    }
}

#[test]
fn power_stations_are_not_reported() {
    let buildings = [
        Building::new("HYDROGEN_PUMP_4", 31, 31),
        Building::new("CONDENSER_PLANT_4", 27, 33),
        Building::new("POWER_STATION_1", 31, 34),
        Building::new("POWER_STATION_1", 32, 28),
    ];
    let results = compute(&buildings).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "HYDROGEN_PUMP_4");
    assert_close(results[0].efficiency, 135.28595479208968);
    assert_eq!(results[1].name, "CONDENSER_PLANT_4");
    assert_close(results[1].efficiency, 136.15262291634514);
}

#[test]
fn trace_sums_to_uncapped_result() {
    let scored = EfficiencyScorer::standard()
        .compute_with_trace(&layout())
        .unwrap();

    for building in scored {
        let total = building.base_efficiency
            + building
                .contributions
                .iter()
                .map(|c| c.delta)
                .sum::<f64>();

        assert_close(building.result.efficiency, total.min(150.0));
        assert!(building.contributions.iter().all(|c| c.distance >= 1.0));
    }
}

#[test]
fn records_with_missing_coordinates_fail_fast() {
    let records: Vec<BuildingRecord> = serde_json::from_str(
        r#"[{"buildingTypeString":"CONDENSER_PLANT_4","X":27,"Y":33},{"buildingTypeString":"POWER_STATION_1","Y":39}]"#,
    )
    .unwrap();

    match buildings_from_records(records) {
        Err(EngineError::InvalidInput { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected invalid input, got {:?}", other),
    }
}

#[test]
fn plot_coordinates_feed_the_scorer() {
    let scorer = EfficiencyScorer::standard();
    let condenser = scorer.attributes_of("CONDENSER_PLANT");
    let anchor = plot_anchor(21, 15, condenser.width, condenser.height).unwrap();

    let buildings = [
        Building::new("CONDENSER_PLANT_4", anchor.x(), anchor.y()),
        Building::new("POWER_STATION_1", 27, 39),
    ];

    assert_close(
        scorer.compute(&buildings).unwrap()[0].efficiency,
        93.93908473268674,
    );
}

#[test]
fn efficiency_drives_production() {
    let results = compute(&layout()).unwrap();
    let pump = results.iter().find(|r| r.name == "HYDROGEN_PUMP_4").unwrap();

    assert_eq!(scaled_output(40, pump.efficiency, 3).unwrap(), 120);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    let scorer = EfficiencyScorer::standard();
    let buildings = layout();

    assert_eq!(
        scorer.compute_parallel(&buildings).unwrap(),
        scorer.compute(&buildings).unwrap()
    );
}

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use vicare::integrations::vicare::setup;
use vicare::integrations::vicare::HeatingType;
use vicare::integrations::vicare::SnapshotDevice;
use vicare::integrations::vicare::ViCareSetup;
use vicare::Config;
use vicare::Engine;

#[tokio::test]
async fn test_poll_fuelcell_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vicare.toml");
    let snapshot_path = temp_dir.path().join("device.json");

    fs::write(
        &config_path,
        r#"
        [vicare]
        name = "Cellar"
        heating_type = "fuelcell"
        snapshot = "device.json"
        "#,
    )
    .unwrap();

    fs::write(
        &snapshot_path,
        r#"{
            "model": "E3_Vitovalor_PT2",
            "values": {
                "outside_temperature": 3.5,
                "supply_temperature": 41.0,
                "burner_starts": 880,
                "power_production_current": 750.0
            }
        }"#,
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let device = SnapshotDevice::open(&config.vicare.snapshot).unwrap();
    let vicare_setup = ViCareSetup::new(
        config.vicare.name.clone(),
        config.vicare.heating_type,
        Arc::new(device),
    );

    let mut engine = Engine::new();
    setup(&vicare_setup, &mut engine);
    assert_eq!(engine.len(), 19);

    engine.poll().await;
    let state = engine.state_snapshot();

    let outside = &state.entities["E3_Vitovalor_PT2-Cellar Outside Temperature"];
    assert!(outside.available);
    assert_eq!(outside.attributes["state"], 3.5);

    let starts = &state.entities["E3_Vitovalor_PT2-Cellar Burner Starts"];
    assert!(starts.available);
    assert_eq!(starts.attributes["state"], 880);

    let power = &state.entities["E3_Vitovalor_PT2-Cellar Power production current"];
    assert_eq!(power.attributes["unit_of_measurement"], "W");
    assert_eq!(power.attributes["state"], 750.0);

    // Not in the snapshot: the device does not support it.
    let boiler = &state.entities["E3_Vitovalor_PT2-Cellar Boiler Temperature"];
    assert!(!boiler.available);
    assert!(boiler.attributes["state"].is_null());

    // Snapshot disappears: every sensor keeps its last value.
    fs::remove_file(&snapshot_path).unwrap();
    engine.poll().await;
    let state = engine.state_snapshot();
    let outside = &state.entities["E3_Vitovalor_PT2-Cellar Outside Temperature"];
    assert!(outside.available);
    assert_eq!(outside.attributes["state"], 3.5);
}

#[test]
fn test_generic_device_gets_two_sensors() {
    let device = SnapshotDevice::from_json(r#"{"model": "E3_123"}"#).unwrap();
    let vicare_setup = ViCareSetup::new("Boiler", HeatingType::Generic, Arc::new(device));

    let mut engine = Engine::new();
    setup(&vicare_setup, &mut engine);

    let state = engine.state_snapshot();
    let ids: Vec<&str> = state.entities.keys().map(String::as_str).collect();
    assert_eq!(
        ids,
        vec![
            "E3_123-Boiler Outside Temperature",
            "E3_123-Boiler Supply Temperature"
        ]
    );
}

#[tokio::test]
async fn test_demo_config_polls() {
    let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/vicare.toml");
    let config = Config::from_file(config_path).unwrap();
    assert_eq!(config.vicare.heating_type, HeatingType::Gas);

    let device = SnapshotDevice::open(&config.vicare.snapshot).unwrap();
    let vicare_setup = ViCareSetup::new(
        config.vicare.name.clone(),
        config.vicare.heating_type,
        Arc::new(device),
    );

    let mut engine = Engine::new();
    setup(&vicare_setup, &mut engine);
    engine.poll().await;

    let state = engine.state_snapshot();
    let available = state.entities.values().filter(|e| e.available).count();
    assert_eq!(available, 8);
}

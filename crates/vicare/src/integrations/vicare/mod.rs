//! Viessmann ViCare heating systems.
//!
//! Exposes readings from a ViCare device as polled sensor entities. Which
//! sensors are created depends on the configured heating type.

mod api;
mod heating;
mod sensor;
mod sensor_types;
mod snapshot;

use std::sync::Arc;

pub use api::Boiler;
pub use api::SensorValue;
pub use api::VendorError;
pub use api::ViCareDevice;
pub use heating::select_sensors;
pub use heating::HeatingType;
pub use heating::SENSORS_GENERIC;
pub use sensor::ViCareSensor;
pub use sensor_types::DeviceClass;
pub use sensor_types::SensorDescriptor;
pub use sensor_types::SensorKind;
pub use sensor_types::Unit;
pub use snapshot::SnapshotDevice;
pub use snapshot::SnapshotError;
use tracing::debug;
use tracing::info;

use crate::engine::Entity;
use crate::engine::EntitySink;

/// Domain used in device identifiers
pub const DOMAIN: &str = "vicare";

/// Everything needed to create the sensors for one device.
#[derive(Clone)]
pub struct ViCareSetup {
    /// Device display name, prefixed to every sensor name
    pub name: String,

    pub heating_type: HeatingType,

    pub device: Arc<dyn ViCareDevice>,
}

impl ViCareSetup {
    pub fn new(
        name: impl Into<String>,
        heating_type: HeatingType,
        device: Arc<dyn ViCareDevice>,
    ) -> Self {
        Self {
            name: name.into(),
            heating_type,
            device,
        }
    }
}

fn build_entity(name: String, device: Arc<dyn ViCareDevice>, kind: SensorKind) -> ViCareSensor {
    debug!("Found device {}", name);
    ViCareSensor::new(name, device, kind)
}

/// Build one sensor per selected catalog entry, in selection order.
///
/// Only constructs entities; the device is not contacted.
pub fn build_entities(setup: &ViCareSetup) -> Vec<ViCareSensor> {
    select_sensors(setup.heating_type)
        .into_iter()
        .map(|kind| {
            let name = format!("{} {}", setup.name, kind.descriptor().name);
            build_entity(name, setup.device.clone(), kind)
        })
        .collect()
}

/// Create the sensors for a device and hand them to the sink.
pub fn setup(setup: &ViCareSetup, sink: &mut impl EntitySink) {
    let entities = build_entities(setup);
    info!(
        "Setting up {} ViCare sensors for {} ({})",
        entities.len(),
        setup.name,
        setup.heating_type
    );

    sink.add_entities(
        entities
            .into_iter()
            .map(|e| Box::new(e) as Box<dyn Entity>)
            .collect(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gas_setup() -> ViCareSetup {
        let device = SnapshotDevice::from_json(r#"{"model": "E3_123", "values": {}}"#).unwrap();
        ViCareSetup::new("Boiler", HeatingType::Gas, Arc::new(device))
    }

    #[test]
    fn test_entity_names() {
        let entities = build_entities(&gas_setup());
        assert_eq!(entities.len(), 14);
        assert_eq!(entities[0].name(), "Boiler Outside Temperature");
        assert_eq!(entities[1].name(), "Boiler Supply Temperature");
        assert_eq!(entities[3].name(), "Boiler Burner Hours");
        assert_eq!(entities[5].name(), "Boiler Burner Starts");
    }

    #[test]
    fn test_entities_follow_selection_order() {
        let setup = gas_setup();
        let kinds: Vec<_> = build_entities(&setup).iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, select_sensors(setup.heating_type));
    }

    #[test]
    fn test_setup_adds_entities_to_sink() {
        let mut sink: Vec<Box<dyn Entity>> = Vec::new();
        setup(&gas_setup(), &mut sink);

        assert_eq!(sink.len(), 14);
        assert_eq!(sink[0].unique_id(), "E3_123-Boiler Outside Temperature");
        assert!(sink.iter().all(|e| !e.available()));
    }

    #[test]
    fn test_generic_setup() {
        let mut setup = gas_setup();
        setup.heating_type = HeatingType::Generic;
        let names: Vec<String> = build_entities(&setup)
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Boiler Outside Temperature", "Boiler Supply Temperature"]
        );
    }
}

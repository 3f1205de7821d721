use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use super::api::Boiler;
use super::api::SensorValue;
use super::api::ViCareDevice;
use super::api::VendorError;
use super::sensor_types::DeviceClass;
use super::sensor_types::SensorDescriptor;
use super::sensor_types::SensorKind;
use super::sensor_types::Unit;
use super::DOMAIN;
use crate::engine::DeviceInfo;
use crate::engine::Entity;

/// A single ViCare metric exposed as a polled sensor entity.
pub struct ViCareSensor {
    /// Full display name ("{device name} {sensor name}")
    name: String,

    kind: SensorKind,
    descriptor: SensorDescriptor,

    /// Boiler view used for reads
    api: Arc<dyn Boiler>,

    /// Device handle, consulted for the model identifier
    device: Arc<dyn ViCareDevice>,

    /// Last successfully read value; `None` until the first successful read
    state: Option<SensorValue>,
}

impl ViCareSensor {
    pub fn new(name: String, device: Arc<dyn ViCareDevice>, kind: SensorKind) -> Self {
        Self {
            name,
            kind,
            descriptor: kind.descriptor(),
            api: device.as_boiler(),
            device,
            state: None,
        }
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.descriptor.icon
    }

    pub fn unit_of_measurement(&self) -> Option<Unit> {
        self.descriptor.unit
    }

    pub fn device_class(&self) -> Option<DeviceClass> {
        self.descriptor.device_class
    }

    pub fn state(&self) -> Option<&SensorValue> {
        self.state.as_ref()
    }

    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo::new(self.name.clone())
            .with_identifier(DOMAIN, &self.name)
            .with_manufacturer("Viessmann")
    }

    /// Read the sensor and store the result.
    ///
    /// Classified vendor failures are absorbed here and leave the previous
    /// value in place. Only unclassified failures are returned.
    pub async fn refresh(&mut self) -> Result<(), VendorError> {
        match self.kind.read(self.api.as_ref()).await {
            Ok(value) => self.state = Some(value),
            Err(VendorError::NotSupported(_)) => {}
            Err(VendorError::Connection(_)) => {
                error!("Unable to retrieve data from ViCare server");
            }
            Err(VendorError::Decode(_)) => {
                error!("Unable to decode data from ViCare server");
            }
            Err(VendorError::RateLimited(detail)) => {
                error!("ViCare API rate limit exceeded: {}", detail);
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

#[async_trait]
impl Entity for ViCareSensor {
    fn state_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "platform": "sensor",
            "sensor": self.kind.key(),
            "state": self.state,
            "unit_of_measurement": self.descriptor.unit,
            "icon": self.descriptor.icon,
            "device_class": self.descriptor.device_class,
            "device": self.device_info(),
        })
    }

    fn platform(&self) -> &'static str {
        "sensor"
    }

    fn unique_id(&self) -> String {
        format!("{}-{}", self.device.model(), self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn available(&self) -> bool {
        self.state.is_some()
    }

    async fn update(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.refresh().await?;
        Ok(())
    }
}

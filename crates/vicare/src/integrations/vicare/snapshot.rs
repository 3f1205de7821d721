//! Device backed by a JSON snapshot instead of the vendor cloud.
//!
//! The document looks like:
//!
//! ```json
//! {
//!   "model": "E3_Vitodens_100_0421",
//!   "values": {
//!     "outside_temperature": 4.5,
//!     "burner_starts": 12034
//!   }
//! }
//! ```
//!
//! Keys are sensor identifiers. A missing key reads as an unsupported
//! feature. When opened from a file, the file is re-read on every access so
//! another process can keep it current.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::api::Boiler;
use super::api::VendorError;
use super::api::ViCareDevice;
use super::sensor_types::SensorKind;

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    model: String,

    #[serde(default)]
    values: HashMap<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

enum Source {
    File(PathBuf),
    Static(HashMap<String, serde_json::Value>),
}

/// Device whose readings come from a snapshot document.
pub struct SnapshotDevice {
    model: String,
    boiler: Arc<SnapshotBoiler>,
}

impl SnapshotDevice {
    /// Open a snapshot file. The model is read once; values are re-read on
    /// every access.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| SnapshotError::Io(path.clone(), e))?;
        let document: SnapshotDocument = serde_json::from_str(&contents)?;

        Ok(Self {
            model: document.model,
            boiler: Arc::new(SnapshotBoiler {
                source: Source::File(path),
            }),
        })
    }

    /// Build a device from an in-memory snapshot. Values never change.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(json)?;

        Ok(Self {
            model: document.model,
            boiler: Arc::new(SnapshotBoiler {
                source: Source::Static(document.values),
            }),
        })
    }
}

impl ViCareDevice for SnapshotDevice {
    fn model(&self) -> String {
        self.model.clone()
    }

    fn as_boiler(&self) -> Arc<dyn Boiler> {
        self.boiler.clone()
    }
}

struct SnapshotBoiler {
    source: Source,
}

impl SnapshotBoiler {
    async fn value(&self, kind: SensorKind) -> Result<serde_json::Value, VendorError> {
        let value = match &self.source {
            Source::Static(values) => values.get(kind.key()).cloned(),
            Source::File(path) => {
                let contents = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| VendorError::Connection(Box::new(e)))?;
                let mut document: SnapshotDocument = serde_json::from_str(&contents)
                    .map_err(|e| VendorError::Decode(e.to_string()))?;
                document.values.remove(kind.key())
            }
        };

        value.ok_or_else(|| VendorError::NotSupported(kind.key().to_string()))
    }

    async fn float(&self, kind: SensorKind) -> Result<f64, VendorError> {
        let value = self.value(kind).await?;
        value
            .as_f64()
            .ok_or_else(|| VendorError::Decode(format!("{}: expected a number, got {}", kind, value)))
    }

    async fn integer(&self, kind: SensorKind) -> Result<i64, VendorError> {
        let value = self.value(kind).await?;
        value.as_i64().ok_or_else(|| {
            VendorError::Decode(format!("{}: expected an integer, got {}", kind, value))
        })
    }
}

#[async_trait]
impl Boiler for SnapshotBoiler {
    async fn outside_temperature(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::OutsideTemperature).await
    }

    async fn supply_temperature(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::SupplyTemperature).await
    }

    async fn return_temperature(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::ReturnTemperature).await
    }

    async fn boiler_temperature(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::BoilerTemperature).await
    }

    async fn burner_modulation(&self) -> Result<i64, VendorError> {
        self.integer(SensorKind::BurnerModulation).await
    }

    async fn burner_starts(&self) -> Result<i64, VendorError> {
        self.integer(SensorKind::BurnerStarts).await
    }

    async fn burner_hours(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::BurnerHours).await
    }

    async fn gas_consumption_domestic_hot_water_today(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::HotwaterGasConsumptionToday).await
    }

    async fn gas_consumption_domestic_hot_water_this_week(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::HotwaterGasConsumptionThisWeek).await
    }

    async fn gas_consumption_domestic_hot_water_this_month(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::HotwaterGasConsumptionThisMonth).await
    }

    async fn gas_consumption_domestic_hot_water_this_year(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::HotwaterGasConsumptionThisYear).await
    }

    async fn gas_consumption_heating_today(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::GasConsumptionHeatingToday).await
    }

    async fn gas_consumption_heating_this_week(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::GasConsumptionHeatingThisWeek).await
    }

    async fn gas_consumption_heating_this_month(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::GasConsumptionHeatingThisMonth).await
    }

    async fn gas_consumption_heating_this_year(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::GasConsumptionHeatingThisYear).await
    }

    async fn compressor_starts(&self) -> Result<i64, VendorError> {
        self.integer(SensorKind::CompressorStarts).await
    }

    async fn compressor_hours(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::CompressorHours).await
    }

    async fn compressor_hours_load_class1(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::CompressorHoursLoadClass1).await
    }

    async fn compressor_hours_load_class2(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::CompressorHoursLoadClass2).await
    }

    async fn compressor_hours_load_class3(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::CompressorHoursLoadClass3).await
    }

    async fn compressor_hours_load_class4(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::CompressorHoursLoadClass4).await
    }

    async fn compressor_hours_load_class5(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::CompressorHoursLoadClass5).await
    }

    async fn power_production_current(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::PowerProductionCurrent).await
    }

    async fn power_production_today(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::PowerProductionToday).await
    }

    async fn power_production_this_week(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::PowerProductionThisWeek).await
    }

    async fn power_production_this_month(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::PowerProductionThisMonth).await
    }

    async fn power_production_this_year(&self) -> Result<f64, VendorError> {
        self.float(SensorKind::PowerProductionThisYear).await
    }
}

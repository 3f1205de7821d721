//! Interface to the ViCare vendor client.
//!
//! The vendor client performs the actual cloud requests. This module only
//! describes the surface the sensor entities consume: a device handle that
//! knows its model, and a boiler view with one accessor per metric.

use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

/// Failures reported by the vendor client.
#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    /// The device does not expose this feature. Expected for many
    /// device/metric combinations.
    #[error("feature not supported by device: {0}")]
    NotSupported(String),

    /// The vendor API refused the request because the account exceeded its
    /// request budget.
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    /// The vendor cloud could not be reached.
    #[error("connection to vendor API failed: {0}")]
    Connection(#[source] Box<dyn Error + Send + Sync>),

    /// The vendor cloud answered with something that could not be decoded.
    #[error("malformed response from vendor API: {0}")]
    Decode(String),

    /// Anything the vendor client did not classify.
    #[error(transparent)]
    Other(Box<dyn Error + Send + Sync>),
}

impl VendorError {
    fn not_supported(feature: &str) -> Self {
        Self::NotSupported(feature.to_string())
    }
}

/// A single reading returned by a boiler accessor.
///
/// Counters (starts, modulation) are integers; everything else is a float.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Integer(i64),
    Float(f64),
}

impl From<i64> for SensorValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for SensorValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Handle for one physical heating device.
pub trait ViCareDevice: Send + Sync {
    /// Vendor-reported model identifier (e.g. "E3_Vitodens_100_0421").
    fn model(&self) -> String;

    /// Boiler view of this device, used for all metric reads.
    fn as_boiler(&self) -> Arc<dyn Boiler>;
}

/// Boiler view of a device: one accessor per metric.
///
/// Every accessor defaults to [`VendorError::NotSupported`], so an
/// implementation only overrides what its device actually reports.
#[async_trait]
pub trait Boiler: Send + Sync {
    async fn outside_temperature(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("outside_temperature"))
    }

    async fn supply_temperature(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("supply_temperature"))
    }

    async fn return_temperature(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("return_temperature"))
    }

    async fn boiler_temperature(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("boiler_temperature"))
    }

    /// Burner modulation in percent.
    async fn burner_modulation(&self) -> Result<i64, VendorError> {
        Err(VendorError::not_supported("burner_modulation"))
    }

    async fn burner_starts(&self) -> Result<i64, VendorError> {
        Err(VendorError::not_supported("burner_starts"))
    }

    async fn burner_hours(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("burner_hours"))
    }

    async fn gas_consumption_domestic_hot_water_today(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported(
            "gas_consumption_domestic_hot_water_today",
        ))
    }

    async fn gas_consumption_domestic_hot_water_this_week(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported(
            "gas_consumption_domestic_hot_water_this_week",
        ))
    }

    async fn gas_consumption_domestic_hot_water_this_month(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported(
            "gas_consumption_domestic_hot_water_this_month",
        ))
    }

    async fn gas_consumption_domestic_hot_water_this_year(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported(
            "gas_consumption_domestic_hot_water_this_year",
        ))
    }

    async fn gas_consumption_heating_today(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("gas_consumption_heating_today"))
    }

    async fn gas_consumption_heating_this_week(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("gas_consumption_heating_this_week"))
    }

    async fn gas_consumption_heating_this_month(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("gas_consumption_heating_this_month"))
    }

    async fn gas_consumption_heating_this_year(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("gas_consumption_heating_this_year"))
    }

    async fn compressor_starts(&self) -> Result<i64, VendorError> {
        Err(VendorError::not_supported("compressor_starts"))
    }

    async fn compressor_hours(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("compressor_hours"))
    }

    async fn compressor_hours_load_class1(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("compressor_hours_load_class1"))
    }

    async fn compressor_hours_load_class2(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("compressor_hours_load_class2"))
    }

    async fn compressor_hours_load_class3(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("compressor_hours_load_class3"))
    }

    async fn compressor_hours_load_class4(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("compressor_hours_load_class4"))
    }

    async fn compressor_hours_load_class5(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("compressor_hours_load_class5"))
    }

    /// Current electrical power production in watts.
    async fn power_production_current(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("power_production_current"))
    }

    async fn power_production_today(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("power_production_today"))
    }

    async fn power_production_this_week(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("power_production_this_week"))
    }

    async fn power_production_this_month(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("power_production_this_month"))
    }

    async fn power_production_this_year(&self) -> Result<f64, VendorError> {
        Err(VendorError::not_supported("power_production_this_year"))
    }
}

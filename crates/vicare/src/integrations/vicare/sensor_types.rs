//! Catalog of every metric the ViCare integration can expose.

use serde::Serialize;
use strum::EnumIter;
use strum::EnumString;
use strum::IntoStaticStr;

use super::api::Boiler;
use super::api::SensorValue;
use super::api::VendorError;

/// Unit of measurement attached to a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum Unit {
    #[serde(rename = "°C")]
    #[strum(serialize = "°C")]
    Celsius,
    #[serde(rename = "%")]
    #[strum(serialize = "%")]
    Percent,
    #[serde(rename = "kWh")]
    #[strum(serialize = "kWh")]
    KilowattHour,
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Watt,
    #[serde(rename = "h")]
    #[strum(serialize = "h")]
    Hours,
}

/// Device class for sensors, matching Home Assistant's sensor device classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceClass {
    Temperature,
    Power,
    Energy,
}

/// Static metadata for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorDescriptor {
    /// Stable identifier (e.g. "outside_temperature")
    pub key: &'static str,

    /// Display name, appended to the device name
    pub name: &'static str,

    pub icon: Option<&'static str>,
    pub unit: Option<Unit>,
    pub device_class: Option<DeviceClass>,
}

/// Every metric known to the integration.
///
/// The string form of each variant is its catalog identifier; `FromStr`
/// accepts exactly those identifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SensorKind {
    OutsideTemperature,
    SupplyTemperature,
    ReturnTemperature,

    // gas
    BoilerTemperature,
    BurnerModulation,
    BurnerStarts,
    BurnerHours,
    HotwaterGasConsumptionToday,
    #[strum(to_string = "hotwater_gas_consumption_heating_this_week")]
    HotwaterGasConsumptionThisWeek,
    #[strum(to_string = "hotwater_gas_consumption_heating_this_month")]
    HotwaterGasConsumptionThisMonth,
    #[strum(to_string = "hotwater_gas_consumption_heating_this_year")]
    HotwaterGasConsumptionThisYear,
    GasConsumptionHeatingToday,
    GasConsumptionHeatingThisWeek,
    GasConsumptionHeatingThisMonth,
    GasConsumptionHeatingThisYear,

    // heat pump
    CompressorStarts,
    CompressorHours,
    #[strum(to_string = "compressor_hours_loadclass1")]
    CompressorHoursLoadClass1,
    #[strum(to_string = "compressor_hours_loadclass2")]
    CompressorHoursLoadClass2,
    #[strum(to_string = "compressor_hours_loadclass3")]
    CompressorHoursLoadClass3,
    #[strum(to_string = "compressor_hours_loadclass4")]
    CompressorHoursLoadClass4,
    #[strum(to_string = "compressor_hours_loadclass5")]
    CompressorHoursLoadClass5,

    // fuel cell
    PowerProductionCurrent,
    PowerProductionToday,
    PowerProductionThisWeek,
    PowerProductionThisMonth,
    PowerProductionThisYear,
}

const GAS_ICON: Option<&str> = Some("mdi:power");
const COUNTER_ICON: Option<&str> = Some("mdi:counter");

impl SensorKind {
    /// Catalog identifier of this sensor.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Metadata for this sensor.
    pub fn descriptor(self) -> SensorDescriptor {
        use DeviceClass::*;
        use SensorKind::*;
        use Unit::*;

        let (name, icon, unit, device_class) = match self {
            OutsideTemperature => ("Outside Temperature", None, Some(Celsius), Some(Temperature)),
            SupplyTemperature => ("Supply Temperature", None, Some(Celsius), Some(Temperature)),
            ReturnTemperature => ("Return Temperature", None, Some(Celsius), Some(Temperature)),
            BoilerTemperature => ("Boiler Temperature", None, Some(Celsius), Some(Temperature)),
            BurnerModulation => ("Burner modulation", Some("mdi:percent"), Some(Percent), None),
            BurnerStarts => ("Burner Starts", COUNTER_ICON, None, None),
            BurnerHours => ("Burner Hours", COUNTER_ICON, Some(Hours), None),
            HotwaterGasConsumptionToday => (
                "Hot water gas consumption today",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            HotwaterGasConsumptionThisWeek => (
                "Hot water gas consumption this week",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            HotwaterGasConsumptionThisMonth => (
                "Hot water gas consumption this month",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            HotwaterGasConsumptionThisYear => (
                "Hot water gas consumption this year",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            GasConsumptionHeatingToday => (
                "Heating gas consumption today",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            GasConsumptionHeatingThisWeek => (
                "Heating gas consumption this week",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            GasConsumptionHeatingThisMonth => (
                "Heating gas consumption this month",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            GasConsumptionHeatingThisYear => (
                "Heating gas consumption this year",
                GAS_ICON,
                Some(KilowattHour),
                None,
            ),
            CompressorStarts => ("Compressor Starts", COUNTER_ICON, None, None),
            CompressorHours => ("Compressor Hours", COUNTER_ICON, Some(Hours), None),
            CompressorHoursLoadClass1 => (
                "Compressor Hours Load Class 1",
                COUNTER_ICON,
                Some(Hours),
                None,
            ),
            CompressorHoursLoadClass2 => (
                "Compressor Hours Load Class 2",
                COUNTER_ICON,
                Some(Hours),
                None,
            ),
            CompressorHoursLoadClass3 => (
                "Compressor Hours Load Class 3",
                COUNTER_ICON,
                Some(Hours),
                None,
            ),
            CompressorHoursLoadClass4 => (
                "Compressor Hours Load Class 4",
                COUNTER_ICON,
                Some(Hours),
                None,
            ),
            CompressorHoursLoadClass5 => (
                "Compressor Hours Load Class 5",
                COUNTER_ICON,
                Some(Hours),
                None,
            ),
            PowerProductionCurrent => ("Power production current", None, Some(Watt), Some(Power)),
            PowerProductionToday => (
                "Power production today",
                None,
                Some(KilowattHour),
                Some(Energy),
            ),
            PowerProductionThisWeek => (
                "Power production this week",
                None,
                Some(KilowattHour),
                Some(Energy),
            ),
            PowerProductionThisMonth => (
                "Power production this month",
                None,
                Some(KilowattHour),
                Some(Energy),
            ),
            PowerProductionThisYear => (
                "Power production this year",
                None,
                Some(KilowattHour),
                Some(Energy),
            ),
        };

        SensorDescriptor {
            key: self.key(),
            name,
            icon,
            unit,
            device_class,
        }
    }

    /// Read the current value of this sensor from the device.
    pub async fn read(self, boiler: &dyn Boiler) -> Result<SensorValue, VendorError> {
        use SensorKind::*;

        let value: SensorValue = match self {
            OutsideTemperature => boiler.outside_temperature().await?.into(),
            SupplyTemperature => boiler.supply_temperature().await?.into(),
            ReturnTemperature => boiler.return_temperature().await?.into(),
            BoilerTemperature => boiler.boiler_temperature().await?.into(),
            BurnerModulation => boiler.burner_modulation().await?.into(),
            BurnerStarts => boiler.burner_starts().await?.into(),
            BurnerHours => boiler.burner_hours().await?.into(),
            HotwaterGasConsumptionToday => boiler
                .gas_consumption_domestic_hot_water_today()
                .await?
                .into(),
            HotwaterGasConsumptionThisWeek => boiler
                .gas_consumption_domestic_hot_water_this_week()
                .await?
                .into(),
            HotwaterGasConsumptionThisMonth => boiler
                .gas_consumption_domestic_hot_water_this_month()
                .await?
                .into(),
            HotwaterGasConsumptionThisYear => boiler
                .gas_consumption_domestic_hot_water_this_year()
                .await?
                .into(),
            GasConsumptionHeatingToday => boiler.gas_consumption_heating_today().await?.into(),
            GasConsumptionHeatingThisWeek => {
                boiler.gas_consumption_heating_this_week().await?.into()
            }
            GasConsumptionHeatingThisMonth => {
                boiler.gas_consumption_heating_this_month().await?.into()
            }
            GasConsumptionHeatingThisYear => {
                boiler.gas_consumption_heating_this_year().await?.into()
            }
            CompressorStarts => boiler.compressor_starts().await?.into(),
            CompressorHours => boiler.compressor_hours().await?.into(),
            CompressorHoursLoadClass1 => boiler.compressor_hours_load_class1().await?.into(),
            CompressorHoursLoadClass2 => boiler.compressor_hours_load_class2().await?.into(),
            CompressorHoursLoadClass3 => boiler.compressor_hours_load_class3().await?.into(),
            CompressorHoursLoadClass4 => boiler.compressor_hours_load_class4().await?.into(),
            CompressorHoursLoadClass5 => boiler.compressor_hours_load_class5().await?.into(),
            PowerProductionCurrent => boiler.power_production_current().await?.into(),
            PowerProductionToday => boiler.power_production_today().await?.into(),
            PowerProductionThisWeek => boiler.power_production_this_week().await?.into(),
            PowerProductionThisMonth => boiler.power_production_this_month().await?.into(),
            PowerProductionThisYear => boiler.power_production_this_year().await?.into(),
        };

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use async_trait::async_trait;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SensorKind::iter().count(), 27);
    }

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for kind in SensorKind::iter() {
            assert!(seen.insert(kind.key()), "duplicate key {}", kind.key());
            assert_eq!(SensorKind::from_str(kind.key()).unwrap(), kind);
        }
    }

    #[test]
    fn test_irregular_keys() {
        assert_eq!(
            SensorKind::HotwaterGasConsumptionThisWeek.key(),
            "hotwater_gas_consumption_heating_this_week"
        );
        assert_eq!(
            SensorKind::HotwaterGasConsumptionToday.key(),
            "hotwater_gas_consumption_today"
        );
        assert_eq!(
            SensorKind::CompressorHoursLoadClass3.key(),
            "compressor_hours_loadclass3"
        );
        assert!(SensorKind::from_str("burner_power").is_err());
    }

    #[test]
    fn test_descriptor_outside_temperature() {
        let d = SensorKind::OutsideTemperature.descriptor();
        assert_eq!(d.key, "outside_temperature");
        assert_eq!(d.name, "Outside Temperature");
        assert_eq!(d.icon, None);
        assert_eq!(d.unit, Some(Unit::Celsius));
        assert_eq!(d.device_class, Some(DeviceClass::Temperature));
    }

    #[test]
    fn test_descriptor_burner_starts_is_unitless() {
        let d = SensorKind::BurnerStarts.descriptor();
        assert_eq!(d.name, "Burner Starts");
        assert_eq!(d.icon, Some("mdi:counter"));
        assert_eq!(d.unit, None);
        assert_eq!(d.device_class, None);
    }

    #[test]
    fn test_descriptor_power_production() {
        let current = SensorKind::PowerProductionCurrent.descriptor();
        assert_eq!(current.unit, Some(Unit::Watt));
        assert_eq!(current.device_class, Some(DeviceClass::Power));

        let year = SensorKind::PowerProductionThisYear.descriptor();
        assert_eq!(year.unit, Some(Unit::KilowattHour));
        assert_eq!(year.device_class, Some(DeviceClass::Energy));
    }

    #[test]
    fn test_unit_and_device_class_strings() {
        assert_eq!(Unit::Celsius.to_string(), "°C");
        assert_eq!(Unit::KilowattHour.to_string(), "kWh");
        assert_eq!(serde_json::to_value(Unit::Percent).unwrap(), "%");
        assert_eq!(DeviceClass::Energy.to_string(), "energy");
        assert_eq!(
            serde_json::to_value(DeviceClass::Temperature).unwrap(),
            "temperature"
        );
    }

    struct Boiler42;

    #[async_trait]
    impl Boiler for Boiler42 {
        async fn burner_starts(&self) -> Result<i64, VendorError> {
            Ok(42)
        }

        async fn boiler_temperature(&self) -> Result<f64, VendorError> {
            Ok(48.5)
        }
    }

    #[tokio::test]
    async fn test_read_dispatches_to_accessor() {
        let boiler = Boiler42;

        assert_eq!(
            SensorKind::BurnerStarts.read(&boiler).await.unwrap(),
            SensorValue::Integer(42)
        );
        assert_eq!(
            SensorKind::BoilerTemperature.read(&boiler).await.unwrap(),
            SensorValue::Float(48.5)
        );
        assert!(matches!(
            SensorKind::CompressorStarts.read(&boiler).await,
            Err(VendorError::NotSupported(_))
        ));
    }
}

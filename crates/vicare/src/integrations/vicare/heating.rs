use serde::Deserialize;
use serde::Serialize;

use super::sensor_types::SensorKind;
use super::sensor_types::SensorKind::*;

/// Category of heating appliance, as configured by the user.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HeatingType {
    #[default]
    Generic,
    Gas,
    Heatpump,
    Fuelcell,
}

/// Sensors every device gets, regardless of heating type.
pub const SENSORS_GENERIC: &[SensorKind] = &[OutsideTemperature, SupplyTemperature];

const SENSORS_GAS: &[SensorKind] = &[
    BoilerTemperature,
    BurnerHours,
    BurnerModulation,
    BurnerStarts,
    HotwaterGasConsumptionToday,
    HotwaterGasConsumptionThisWeek,
    HotwaterGasConsumptionThisMonth,
    HotwaterGasConsumptionThisYear,
    GasConsumptionHeatingToday,
    GasConsumptionHeatingThisWeek,
    GasConsumptionHeatingThisMonth,
    GasConsumptionHeatingThisYear,
];

const SENSORS_HEATPUMP: &[SensorKind] = &[
    CompressorStarts,
    CompressorHours,
    CompressorHoursLoadClass1,
    CompressorHoursLoadClass2,
    CompressorHoursLoadClass3,
    CompressorHoursLoadClass4,
    CompressorHoursLoadClass5,
    ReturnTemperature,
];

// A fuel cell unit also carries a gas burner.
const SENSORS_FUELCELL: &[SensorKind] = &[
    BoilerTemperature,
    BurnerHours,
    BurnerModulation,
    BurnerStarts,
    HotwaterGasConsumptionToday,
    HotwaterGasConsumptionThisWeek,
    HotwaterGasConsumptionThisMonth,
    HotwaterGasConsumptionThisYear,
    GasConsumptionHeatingToday,
    GasConsumptionHeatingThisWeek,
    GasConsumptionHeatingThisMonth,
    GasConsumptionHeatingThisYear,
    PowerProductionCurrent,
    PowerProductionToday,
    PowerProductionThisWeek,
    PowerProductionThisMonth,
    PowerProductionThisYear,
];

impl HeatingType {
    /// Sensors specific to this heating type, in display order.
    pub fn sensors(self) -> &'static [SensorKind] {
        match self {
            HeatingType::Generic => &[],
            HeatingType::Gas => SENSORS_GAS,
            HeatingType::Heatpump => SENSORS_HEATPUMP,
            HeatingType::Fuelcell => SENSORS_FUELCELL,
        }
    }
}

/// Sensors to create for a device of the given heating type.
///
/// The generic sensors always come first, followed by the type-specific ones.
pub fn select_sensors(heating_type: HeatingType) -> Vec<SensorKind> {
    let mut sensors = SENSORS_GENERIC.to_vec();
    if heating_type != HeatingType::Generic {
        sensors.extend_from_slice(heating_type.sensors());
    }
    sensors
}

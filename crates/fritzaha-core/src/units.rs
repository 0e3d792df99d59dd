// ── Temperature scales and conversion ──
//
// The hub reports temperatures in tenths of a degree Celsius (sensor
// reads) or half-degrees Celsius (radiator control). Conversion pivots
// through Kelvin so every source/target pair goes through one code path.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Target unit for temperature reads.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Scale a raw hub reading is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceScale {
    Decidegrees,
    Halfdegrees,
}

/// Convert a raw hub reading to the requested unit.
pub(crate) fn convert(raw: f64, from: SourceScale, to: TemperatureUnit) -> f64 {
    let kelvin = match from {
        SourceScale::Decidegrees => raw / 10.0 + 273.15,
        SourceScale::Halfdegrees => raw / 2.0 + 273.15,
    };
    match to {
        TemperatureUnit::Celsius => kelvin - 273.15,
        TemperatureUnit::Fahrenheit => kelvin * 1.8 - 459.67,
        TemperatureUnit::Kelvin => kelvin,
    }
}

/// Convert a temperature in the given unit to the hub's half-degree scale.
pub(crate) fn to_half_degrees(value: f64, unit: TemperatureUnit) -> f64 {
    let kelvin = match unit {
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) / 1.8,
        TemperatureUnit::Kelvin => value,
    };
    (kelvin - 273.15) * 2.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn decidegrees_to_all_units() {
        // Raw 215 tenths of a degree: 21.5 °C / 70.7 °F / 294.65 K.
        assert!(close(
            convert(215.0, SourceScale::Decidegrees, TemperatureUnit::Celsius),
            21.5
        ));
        assert!(close(
            convert(215.0, SourceScale::Decidegrees, TemperatureUnit::Fahrenheit),
            70.7
        ));
        assert!(close(
            convert(215.0, SourceScale::Decidegrees, TemperatureUnit::Kelvin),
            294.65
        ));
    }

    #[test]
    fn halfdegrees_to_all_units() {
        assert!(close(
            convert(40.0, SourceScale::Halfdegrees, TemperatureUnit::Celsius),
            20.0
        ));
        assert!(close(
            convert(40.0, SourceScale::Halfdegrees, TemperatureUnit::Fahrenheit),
            68.0
        ));
        assert!(close(
            convert(40.0, SourceScale::Halfdegrees, TemperatureUnit::Kelvin),
            293.15
        ));
    }

    #[test]
    fn kelvin_is_celsius_plus_offset() {
        for raw in [0.0, 100.0, 215.0, -50.0] {
            let celsius = convert(raw, SourceScale::Decidegrees, TemperatureUnit::Celsius);
            let kelvin = convert(raw, SourceScale::Decidegrees, TemperatureUnit::Kelvin);
            assert!(close(kelvin, celsius + 273.15));
        }
    }

    #[test]
    fn half_degree_round_trip() {
        for unit in [
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ] {
            let reading = convert(42.0, SourceScale::Halfdegrees, unit);
            assert!(close(to_half_degrees(reading, unit), 42.0));
        }
    }

    #[test]
    fn unit_parses_case_insensitively() {
        assert_eq!(
            TemperatureUnit::from_str("fahrenheit").unwrap(),
            TemperatureUnit::Fahrenheit
        );
        assert_eq!(
            TemperatureUnit::from_str("Kelvin").unwrap(),
            TemperatureUnit::Kelvin
        );
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
    }
}

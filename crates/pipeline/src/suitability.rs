//! Weather observation -> suitability tag.
//!
//! Precedence: a wet condition wins over temperature, then cold, then hot.
//! Both temperature thresholds are strict, so 15.0 and 25.0 are neutral.

use data_loader::SuitabilityTag;
use weather_client::WeatherObservation;

/// Conditions that make the weather "rainy", matched case-sensitively
pub const RAINY_CONDITIONS: [&str; 3] = ["Rain", "Drizzle", "Thunderstorm"];

/// Below this temperature (°C) the weather is cold
pub const COLD_BELOW_CELSIUS: f64 = 15.0;

/// Above this temperature (°C) the weather is hot
pub const HOT_ABOVE_CELSIUS: f64 = 25.0;

/// Map an optional observation to one coarse suitability tag.
///
/// No observation, or one with no usable signal, maps to `Any`.
pub fn map_suitability(observation: Option<&WeatherObservation>) -> SuitabilityTag {
    let Some(observation) = observation else {
        return SuitabilityTag::Any;
    };

    if let Some(condition) = observation.condition.as_deref() {
        if RAINY_CONDITIONS.contains(&condition) {
            return SuitabilityTag::Rainy;
        }
    }

    match observation.temperature_celsius {
        Some(t) if t < COLD_BELOW_CELSIUS => SuitabilityTag::Cold,
        Some(t) if t > HOT_ABOVE_CELSIUS => SuitabilityTag::Hot,
        _ => SuitabilityTag::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(condition: Option<&str>, temp: Option<f64>) -> WeatherObservation {
        WeatherObservation::new("Testville", condition, temp)
    }

    #[test]
    fn test_absent_observation_is_any() {
        assert_eq!(map_suitability(None), SuitabilityTag::Any);
    }

    #[test]
    fn test_rainy_conditions_win_over_temperature() {
        for condition in RAINY_CONDITIONS {
            for temp in [-5.0, 20.0, 35.0] {
                assert_eq!(
                    map_suitability(Some(&obs(Some(condition), Some(temp)))),
                    SuitabilityTag::Rainy,
                    "{} at {}",
                    condition,
                    temp
                );
            }
        }
    }

    #[test]
    fn test_condition_match_is_case_sensitive() {
        assert_eq!(
            map_suitability(Some(&obs(Some("rain"), Some(20.0)))),
            SuitabilityTag::Any
        );
    }

    #[test]
    fn test_temperature_bands() {
        let cases = [
            (-10.0, SuitabilityTag::Cold),
            (14.9, SuitabilityTag::Cold),
            (15.0, SuitabilityTag::Any),
            (20.0, SuitabilityTag::Any),
            (25.0, SuitabilityTag::Any),
            (25.1, SuitabilityTag::Hot),
            (40.0, SuitabilityTag::Hot),
        ];

        for (temp, expected) in cases {
            assert_eq!(
                map_suitability(Some(&obs(Some("Clear"), Some(temp)))),
                expected,
                "temperature {}",
                temp
            );
        }
    }

    #[test]
    fn test_missing_fields_degrade_to_any() {
        assert_eq!(map_suitability(Some(&obs(None, None))), SuitabilityTag::Any);
        assert_eq!(
            map_suitability(Some(&obs(Some("Clouds"), None))),
            SuitabilityTag::Any
        );
        assert_eq!(map_suitability(Some(&obs(None, Some(3.0)))), SuitabilityTag::Cold);
    }
}

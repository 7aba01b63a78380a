use crate::error::{GatewayError, Result};
use crate::model::NormalizedVehicle;
use crate::upstream::registry::{RawVehicleRecord, SafetyFeaturesLevel};

const SEPARATORS: [char; 4] = ['-', '\u{2013}', '\u{2014}', ' '];

/// Picks the separator that occurs first in the trimmed combined field,
/// defaulting to a space.
pub fn split_character(combined: &str) -> char {
    combined
        .trim()
        .char_indices()
        .find(|(_, c)| SEPARATORS.contains(c))
        .map(|(_, c)| c)
        .unwrap_or(' ')
}

/// Splits `tozeret_nm` into (manufacturer country, manufacturer name).
pub fn split_country_and_manufacturer(combined: &str) -> Result<(String, String)> {
    let trimmed = combined.trim();
    let separator = split_character(trimmed);

    let mut parts = trimmed.splitn(2, separator).map(str::trim);
    match (parts.next(), parts.next()) {
        (Some(country), Some(name)) if !country.is_empty() && !name.is_empty() => {
            Ok((country.to_string(), name.to_string()))
        }
        _ => Err(GatewayError::ConversionFailed(format!(
            "error splitting manufacturer country and name: {combined:?}"
        ))),
    }
}

pub fn safety_features_level(raw: Option<&SafetyFeaturesLevel>) -> Result<i64> {
    match raw {
        None => Ok(0),
        Some(SafetyFeaturesLevel::Integer(level)) => Ok(*level),
        Some(SafetyFeaturesLevel::Float(level)) if level.is_finite() && level.fract() == 0.0 => {
            Ok(*level as i64)
        }
        Some(SafetyFeaturesLevel::Float(level)) => Err(GatewayError::ConversionFailed(format!(
            "error converting safetyFeaturesLevel {level} to int"
        ))),
        Some(SafetyFeaturesLevel::Text(text)) => text.trim().parse::<i64>().map_err(|e| {
            GatewayError::ConversionFailed(format!(
                "error converting safetyFeaturesLevel from string to int: {text:?}: {e}"
            ))
        }),
    }
}

pub fn normalize(record: &RawVehicleRecord) -> Result<NormalizedVehicle> {
    let (manufacturer_country, manufacturer_name) =
        split_country_and_manufacturer(&record.manufacture_country)?;
    let safety_features_level = safety_features_level(record.safety_features_level.as_ref())?;

    Ok(NormalizedVehicle {
        license_number: record.license_number,
        manufacturer_country,
        manufacturer_name,
        commercial_name: record.commercial_name.clone(),
        trim_level: record.trim_level.clone(),
        safety_features_level,
        pollution_level: record.pollution_level,
        manufacture_year: record.manufacture_year,
        last_test_date: record.last_test_date.clone(),
        valid_date: record.valid_date.clone(),
        ownership: record.ownership.clone(),
        frame_number: record.frame_number.clone(),
        color: record.color.clone(),
        front_wheel: record.front_wheel.clone(),
        rear_wheel: record.rear_wheel.clone(),
        fuel_type: record.fuel_type.clone(),
        first_on_road_date: record.first_on_road_date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(combined: &str, level: Option<SafetyFeaturesLevel>) -> RawVehicleRecord {
        RawVehicleRecord {
            license_number: 12345678,
            manufacture_country: combined.to_string(),
            safety_features_level: level,
            commercial_name: "Corolla".to_string(),
            manufacture_year: 2020,
            color: "לבן".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn dash_before_space_wins() {
        assert_eq!(split_character("Germany-Volkswagen Group"), '-');
        assert_eq!(
            split_country_and_manufacturer("Germany-Volkswagen").unwrap(),
            ("Germany".to_string(), "Volkswagen".to_string())
        );
    }

    #[test]
    fn space_before_dash_wins() {
        assert_eq!(
            split_country_and_manufacturer("גרמניה מרצדס-בנץ").unwrap(),
            ("גרמניה".to_string(), "מרצדס-בנץ".to_string())
        );
    }

    #[test]
    fn en_and_em_dashes_are_separators() {
        assert_eq!(split_character("Japan\u{2013}Honda"), '\u{2013}');
        assert_eq!(
            split_country_and_manufacturer("Japan\u{2014}Honda").unwrap(),
            ("Japan".to_string(), "Honda".to_string())
        );
    }

    #[test]
    fn multi_word_manufacturer_stays_whole() {
        assert_eq!(
            split_country_and_manufacturer("איטליה אלפא רומיאו").unwrap().1,
            "אלפא רומיאו"
        );
    }

    #[test]
    fn leading_whitespace_does_not_pick_space() {
        assert_eq!(split_character("  Korea-Kia"), '-');
    }

    #[test]
    fn field_without_separator_fails() {
        assert_eq!(split_character("Toyota"), ' ');
        let err = split_country_and_manufacturer("Toyota").unwrap_err();
        assert!(matches!(err, GatewayError::ConversionFailed(_)));
        assert!(split_country_and_manufacturer("").is_err());
        assert!(split_country_and_manufacturer("Japan-").is_err());
    }

    #[test]
    fn absent_safety_level_is_zero() {
        let vehicle = normalize(&record("Japan טויוטה", None)).unwrap();
        assert_eq!(vehicle.safety_features_level, 0);
    }

    #[test]
    fn numeric_safety_levels_pass_through() {
        assert_eq!(
            safety_features_level(Some(&SafetyFeaturesLevel::Integer(5))).unwrap(),
            5
        );
        assert_eq!(
            safety_features_level(Some(&SafetyFeaturesLevel::Float(3.0))).unwrap(),
            3
        );
        assert!(safety_features_level(Some(&SafetyFeaturesLevel::Float(2.5))).is_err());
    }

    #[test]
    fn string_safety_level_is_parsed() {
        let raw = record("Japan טויוטה", Some(SafetyFeaturesLevel::Text("7".to_string())));
        assert_eq!(normalize(&raw).unwrap().safety_features_level, 7);
    }

    #[test]
    fn non_numeric_safety_level_fails_normalization() {
        let raw = record("Japan טויוטה", Some(SafetyFeaturesLevel::Text("abc".to_string())));
        let err = normalize(&raw).unwrap_err();
        assert!(matches!(err, GatewayError::ConversionFailed(_)));
    }

    #[test]
    fn normalized_record_carries_fields_through() {
        let vehicle = normalize(&record("Japan טויוטה", None)).unwrap();
        assert_eq!(vehicle.manufacturer_country, "Japan");
        assert_eq!(vehicle.manufacturer_name, "טויוטה");
        assert_eq!(vehicle.license_number, 12345678);
        assert_eq!(vehicle.commercial_name, "Corolla");
        assert_eq!(vehicle.manufacture_year, 2020);
        assert_eq!(vehicle.color, "לבן");
    }
}

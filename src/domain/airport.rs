// Airport domain model
use super::geo::GeoPoint;
use serde::{Deserialize, Deserializer};

/// Airport metadata as served by the airport directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub name: String,
    pub icao_code: String,
    #[serde(default)]
    pub iata_code: Option<String>,
    #[serde(deserialize_with = "number_or_text")]
    pub latitude_deg: f64,
    #[serde(deserialize_with = "number_or_text")]
    pub longitude_deg: f64,
    #[serde(default, deserialize_with = "optional_number_or_text")]
    pub elevation_ft: Option<f64>,
}

impl Airport {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude_deg, self.longitude_deg)
    }
}

/// Canonical form of an ICAO airport code ("kjfk " -> "KJFK").
pub fn normalize_icao(code: &str) -> String {
    code.trim().to_uppercase()
}

// airportdb mixes JSON numbers and numeric strings for the same fields
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn optional_number_or_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_airportdb_payload() {
        let payload = r#"{
            "ident": "KJFK",
            "type": "large_airport",
            "name": "John F Kennedy International Airport",
            "icao_code": "KJFK",
            "iata_code": "JFK",
            "latitude_deg": 40.639447,
            "longitude_deg": "-73.779317",
            "elevation_ft": "13"
        }"#;
        let airport: Airport = serde_json::from_str(payload).unwrap();

        assert_eq!(airport.icao_code, "KJFK");
        assert_eq!(airport.iata_code.as_deref(), Some("JFK"));
        assert_eq!(airport.elevation_ft, Some(13.0));
        assert_eq!(airport.location(), GeoPoint::new(40.639447, -73.779317));
    }

    #[test]
    fn test_missing_optional_fields() {
        let payload = r#"{"name": "Strip", "icao_code": "ZZ01", "latitude_deg": 1.5, "longitude_deg": 2.5}"#;
        let airport: Airport = serde_json::from_str(payload).unwrap();
        assert_eq!(airport.iata_code, None);
        assert_eq!(airport.elevation_ft, None);
    }

    #[test]
    fn test_unparseable_coordinates_are_rejected() {
        let payload = r#"{"name": "Bad", "icao_code": "ZZ02", "latitude_deg": "north", "longitude_deg": 2.5}"#;
        assert!(serde_json::from_str::<Airport>(payload).is_err());
    }

    #[test]
    fn test_normalize_icao() {
        assert_eq!(normalize_icao(" kjfk "), "KJFK");
        assert_eq!(normalize_icao("EGLL"), "EGLL");
    }
}

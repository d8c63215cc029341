//! Response shapes of the weather API.
//!
//! The API omits any value it cannot compute for a location, so every value is
//! optional. An absent value is `None`, which is distinct from a present zero.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::layer::{
    AirQualityLayer, CoreLayer, FireLayer, InsuranceLayer, PollenLayer, RoadLayer,
};

/// A value together with its unit of measure, e.g. `{"value": 3.63, "units": "C"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement<T> {
    #[serde(default)]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

pub type FloatData = Measurement<f64>;
pub type IntData = Measurement<i64>;

impl<T> Measurement<T> {
    pub fn new(value: T, units: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            units: Some(units.into()),
        }
    }

    pub fn units(&self) -> &str {
        self.units.as_deref().unwrap_or_default()
    }
}

/// Renders `"<value> <units>"`. A missing value renders as `0`, so check
/// [`Measurement::value`] to tell absence apart from zero.
impl<T: fmt::Display> fmt::Display for Measurement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", value, self.units()),
            None => write!(f, "0 {}", self.units()),
        }
    }
}

/// A textual value such as a weather code or a pollutant name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextData {
    #[serde(default)]
    pub value: Option<String>,
}

impl fmt::Display for TextData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or_default())
    }
}

/// Index value of a single pollen species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PollenData {
    #[serde(default)]
    pub value: Option<i64>,
}

/// A point in time.
///
/// Decodes from `{"value": "<RFC3339>"}` and encodes to a bare RFC3339 string.
/// The encoded form has not been checked against the live API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeData {
    pub value: DateTime<FixedOffset>,
}

impl<'de> Deserialize<'de> for TimeData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            value: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        let value = DateTime::parse_from_rfc3339(&raw.value).map_err(|e| {
            serde::de::Error::custom(format!("invalid RFC3339 time '{}': {e}", raw.value))
        })?;

        Ok(Self { value })
    }
}

impl Serialize for TimeData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value.to_rfc3339())
    }
}

impl fmt::Display for TimeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.to_rfc3339())
    }
}

/// Response of the realtime endpoint: a single observation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RealtimeData {
    #[serde(flatten)]
    pub core: CoreLayer,
    #[serde(flatten)]
    pub air_quality: AirQualityLayer,
    #[serde(flatten)]
    pub pollen: PollenLayer,
    #[serde(flatten)]
    pub road: RoadLayer,
    #[serde(flatten)]
    pub fire: FireLayer,
}

/// Position and time shared by every nowcast timestep.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "lat", default)]
    pub latitude: f64,
    #[serde(rename = "lon", default)]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_time: Option<TimeData>,
}

/// One timestep of a nowcast response. The endpoint returns a JSON array of these.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NowcastData {
    #[serde(flatten)]
    pub observation: Observation,
    #[serde(flatten)]
    pub core: CoreLayer,
    #[serde(flatten)]
    pub air_quality: AirQualityLayer,
    #[serde(flatten)]
    pub pollen: PollenLayer,
    #[serde(flatten)]
    pub road: RoadLayer,
    #[serde(flatten)]
    pub insurance: InsuranceLayer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(value: Option<f64>, units: Option<&str>) -> FloatData {
        FloatData {
            value,
            units: units.map(Into::into),
        }
    }

    #[test]
    fn float_data_display() {
        assert_eq!(
            FloatData::new(13.3712345, "cm").to_string(),
            "13.3712345 cm"
        );
        assert_eq!(FloatData::new(3.63, "C").to_string(), "3.63 C");
        assert_eq!(float(None, Some("cm")).to_string(), "0 cm");
    }

    #[test]
    fn missing_units_keep_trailing_space() {
        assert_eq!(float(Some(1.5), None).to_string(), "1.5 ");
        assert_eq!(FloatData::default().to_string(), "0 ");
    }

    #[test]
    fn int_data_display() {
        let absent = IntData {
            value: None,
            units: Some("cm".into()),
        };

        assert_eq!(IntData::new(13, "cm").to_string(), "13 cm");
        assert_eq!(absent.to_string(), "0 cm");
    }

    #[test]
    fn zero_and_absent_render_alike_but_differ_in_value() {
        let zero = FloatData::new(0.0, "mm/hr");
        let absent = float(None, Some("mm/hr"));

        assert_eq!(zero.to_string(), absent.to_string());
        assert_ne!(zero, absent);
        assert_eq!(zero.value, Some(0.0));
    }

    #[test]
    fn text_data_display() {
        let text = TextData {
            value: Some("weather_test".into()),
        };

        assert_eq!(text.to_string(), "weather_test");
        assert_eq!(TextData::default().to_string(), "");
    }

    #[test]
    fn measurement_tolerates_missing_keys() {
        let data: FloatData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, FloatData::default());

        let data: IntData = serde_json::from_str(r#"{"value": 7}"#).unwrap();
        assert_eq!(data.value, Some(7));
        assert_eq!(data.units, None);
    }

    #[test]
    fn time_data_decodes_value_object() {
        let data: TimeData =
            serde_json::from_str(r#"{"value": "2020-12-07T20:06:54.764Z"}"#).unwrap();
        assert_eq!(data.value.timestamp_millis(), 1_607_371_614_764);
    }

    #[test]
    fn time_data_rejects_malformed_time() {
        let err = serde_json::from_str::<TimeData>(r#"{"value": "yesterday"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid RFC3339 time 'yesterday'"));
    }

    #[test]
    fn time_data_encodes_bare_string() {
        let data: TimeData =
            serde_json::from_str(r#"{"value": "2020-12-07T20:06:54+01:00"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#""2020-12-07T20:06:54+01:00""#
        );
    }

    #[test]
    fn realtime_data_decodes_layers() {
        let body = r#"{
            "lat": 52.3,
            "lon": 4.9,
            "temp": {"value": 3.63, "units": "C"},
            "visibility": {"value": 10, "units": "km"},
            "sunrise": {"value": "2020-12-08T07:36:51.263Z"},
            "weather_code": {"value": "cloudy"},
            "pm25": {"value": 11.5, "units": "µg/m3"},
            "03": {"value": 4, "units": "ppb"},
            "pollen_tree": {"pollen_tree_birch": {"value": 2}},
            "road_risk": "low_risk",
            "road_risk_confidence": 80,
            "fire_index": {"value": 0}
        }"#;

        let data: RealtimeData = serde_json::from_str(body).unwrap();
        let air = &data.air_quality;

        assert_eq!(data.core.temperature, Some(FloatData::new(3.63, "C")));
        assert_eq!(data.core.visibility.as_ref().and_then(|v| v.value), Some(10));
        assert!(data.core.sunrise.is_some());
        assert_eq!(
            data.core.weather_code.as_ref().map(ToString::to_string).as_deref(),
            Some("cloudy")
        );
        assert_eq!(data.core.feels_like, None);
        assert_eq!(air.particulate_matter_25.as_ref().and_then(|v| v.value), Some(11.5));
        assert_eq!(air.ozone.as_ref().and_then(|v| v.value), Some(4.0));
        assert_eq!(
            data.pollen.tree.as_ref().and_then(|t| t.birch).and_then(|b| b.value),
            Some(2)
        );
        assert_eq!(data.road.road_risk.as_deref(), Some("low_risk"));
        assert_eq!(data.road.road_risk_confidence, Some(80));
        assert_eq!(data.fire.fire_index.as_ref().and_then(|v| v.value), Some(0.0));
    }

    #[test]
    fn nowcast_data_decodes_array() {
        let body = r#"[
            {"lat": 52.3, "lon": 4.9, "observation_time": {"value": "2020-12-08T10:00:00.000Z"},
             "temp": {"value": 4.1, "units": "C"}, "hail_binary": {"value": 0}},
            {"lat": 52.3, "lon": 4.9, "observation_time": {"value": "2020-12-08T10:05:00.000Z"}}
        ]"#;

        let data: Vec<NowcastData> = serde_json::from_str(body).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[0].observation.latitude, 52.3);
        assert_eq!(data[0].core.temperature.as_ref().and_then(|t| t.value), Some(4.1));
        assert_eq!(
            data[0].insurance.hail_binary.as_ref().and_then(|h| h.value),
            Some(0)
        );
        assert_eq!(data[1].core.temperature, None);
        assert_eq!(data[1].insurance.hail_binary, None);
    }

    #[test]
    fn nowcast_data_omits_absent_values_when_encoding() {
        let step = NowcastData {
            observation: Observation {
                latitude: 52.3,
                longitude: 4.9,
                observation_time: None,
            },
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&step).unwrap(),
            r#"{"lat":52.3,"lon":4.9}"#
        );
    }

    #[test]
    fn nowcast_data_rejects_malformed_observation_time() {
        let body = r#"[{"lat": 1, "lon": 2, "observation_time": {"value": "10 o'clock"}}]"#;
        assert!(serde_json::from_str::<Vec<NowcastData>>(body).is_err());
    }
}

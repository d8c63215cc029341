use std::{fmt, str::FromStr};

use thiserror::Error;

/// A single queryable data field of the weather API.
///
/// Every variant maps to exactly one wire name, which is used both in the
/// `fields` query parameter and in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Core
    Temperature,
    FeelsLike,
    DewPoint,
    Humidity,
    WindSpeed,
    WindDirection,
    WindGust,
    BarometricPressure,
    Precipitation,
    PrecipitationType,
    PrecipitationProbability,
    PrecipitationAccumulation,
    Sunrise,
    Sunset,
    Visibility,
    CloudCover,
    CloudBase,
    CloudCeiling,
    CloudSatellite,
    SurfaceShortwaveRadiation,
    MoonPhase,
    WeatherCode,
    WeatherGroups,

    // Air quality
    ParticulateMatter25,
    ParticulateMatter10,
    Ozone,
    NitrogenDioxide,
    CarbonMonoxide,
    SulfurDioxide,
    AirQualityIndexEpa,
    PrimaryPollutantEpa,
    HealthConcernEpa,
    AirQualityIndexChinaMep,
    PrimaryPollutantChinaMep,
    HealthConcernChinaMep,

    // Pollen
    TreePollen,
    WeedPollen,
    GrassPollen,

    // Road
    RoadRiskScore,
    RoadRisk,
    RoadRiskConfidence,
    RoadRiskConditions,

    // Fire
    FireIndex,

    // Insurance
    HailBinary,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Temperature => "temp",
            Field::FeelsLike => "feels_like",
            Field::DewPoint => "dewpoint",
            Field::Humidity => "humidity",
            Field::WindSpeed => "wind_speed",
            Field::WindDirection => "wind_direction",
            Field::WindGust => "wind_gust",
            Field::BarometricPressure => "baro_pressure",
            Field::Precipitation => "precipitation",
            Field::PrecipitationType => "precipitation_type",
            Field::PrecipitationProbability => "precipitation_probability",
            Field::PrecipitationAccumulation => "precipitation_accumulation",
            Field::Sunrise => "sunrise",
            Field::Sunset => "sunset",
            Field::Visibility => "visibility",
            Field::CloudCover => "cloud_cover",
            Field::CloudBase => "cloud_base",
            Field::CloudCeiling => "cloud_ceiling",
            Field::CloudSatellite => "cloud_satellite",
            Field::SurfaceShortwaveRadiation => "surface_shortwave_radiation",
            Field::MoonPhase => "moon_phase",
            Field::WeatherCode => "weather_code",
            Field::WeatherGroups => "weather_groups",
            Field::ParticulateMatter25 => "pm25",
            Field::ParticulateMatter10 => "pm10",
            Field::Ozone => "o3",
            Field::NitrogenDioxide => "no2",
            Field::CarbonMonoxide => "co",
            Field::SulfurDioxide => "so2",
            Field::AirQualityIndexEpa => "epa_aqi",
            Field::PrimaryPollutantEpa => "epa_primary_pollutant",
            Field::HealthConcernEpa => "epa_health_concern",
            Field::AirQualityIndexChinaMep => "china_aqi",
            Field::PrimaryPollutantChinaMep => "china_primary_pollutant",
            Field::HealthConcernChinaMep => "china_health_concern",
            Field::TreePollen => "pollen_tree",
            Field::WeedPollen => "pollen_weed",
            Field::GrassPollen => "pollen_grass",
            Field::RoadRiskScore => "road_risk_score",
            Field::RoadRisk => "road_risk",
            Field::RoadRiskConfidence => "road_risk_confidence",
            Field::RoadRiskConditions => "road_risk_conditions",
            Field::FireIndex => "fire_index",
            Field::HailBinary => "hail_binary",
        }
    }

    pub const fn all() -> &'static [Field] {
        &[
            Field::Temperature,
            Field::FeelsLike,
            Field::DewPoint,
            Field::Humidity,
            Field::WindSpeed,
            Field::WindDirection,
            Field::WindGust,
            Field::BarometricPressure,
            Field::Precipitation,
            Field::PrecipitationType,
            Field::PrecipitationProbability,
            Field::PrecipitationAccumulation,
            Field::Sunrise,
            Field::Sunset,
            Field::Visibility,
            Field::CloudCover,
            Field::CloudBase,
            Field::CloudCeiling,
            Field::CloudSatellite,
            Field::SurfaceShortwaveRadiation,
            Field::MoonPhase,
            Field::WeatherCode,
            Field::WeatherGroups,
            Field::ParticulateMatter25,
            Field::ParticulateMatter10,
            Field::Ozone,
            Field::NitrogenDioxide,
            Field::CarbonMonoxide,
            Field::SulfurDioxide,
            Field::AirQualityIndexEpa,
            Field::PrimaryPollutantEpa,
            Field::HealthConcernEpa,
            Field::AirQualityIndexChinaMep,
            Field::PrimaryPollutantChinaMep,
            Field::HealthConcernChinaMep,
            Field::TreePollen,
            Field::WeedPollen,
            Field::GrassPollen,
            Field::RoadRiskScore,
            Field::RoadRisk,
            Field::RoadRiskConfidence,
            Field::RoadRiskConditions,
            Field::FireIndex,
            Field::HailBinary,
        ]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl TryFrom<&str> for Field {
    type Error = UnknownField;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        Field::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == lower)
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::try_from(s)
    }
}

/// Join the wire names of `fields` with `sep`, keeping the given order.
pub fn join_fields(fields: &[Field], sep: &str) -> String {
    fields.iter().map(Field::as_str).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_names() {
        assert_eq!(Field::Temperature.as_str(), "temp");
        assert_eq!(Field::HailBinary.as_str(), "hail_binary");
        assert_eq!(Field::BarometricPressure.to_string(), "baro_pressure");
        assert_eq!(Field::Ozone.as_str(), "o3");
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<_> = Field::all().iter().map(Field::as_str).collect();
        assert_eq!(names.len(), Field::all().len());
        assert_eq!(Field::all().len(), 44);
    }

    #[test]
    fn field_as_str_roundtrip() {
        for field in Field::all() {
            let parsed = Field::try_from(field.as_str()).expect("roundtrip should succeed");
            assert_eq!(*field, parsed);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("TEMP".parse::<Field>(), Ok(Field::Temperature));
        assert_eq!(" wind_gust ".parse::<Field>(), Ok(Field::WindGust));
    }

    #[test]
    fn unknown_field_error() {
        let err = Field::try_from("snowfall").unwrap_err();
        assert_eq!(err.to_string(), "unknown field 'snowfall'");
    }

    #[test]
    fn join_single_field() {
        assert_eq!(join_fields(&[Field::Temperature], ", "), "temp");
    }

    #[test]
    fn join_multiple_fields() {
        let fields = [Field::Temperature, Field::CloudCeiling];

        assert_eq!(join_fields(&fields, ", "), "temp, cloud_ceiling");
        assert_eq!(join_fields(&fields, ","), "temp,cloud_ceiling");
    }

    #[test]
    fn join_no_fields() {
        assert_eq!(join_fields(&[], ", "), "");
    }
}

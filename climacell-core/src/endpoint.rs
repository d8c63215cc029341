use std::fmt;

use crate::field::Field;

/// The remote operations this client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Realtime,
    Nowcast,
}

impl Endpoint {
    /// Absolute path of the endpoint, resolved against the client's base URL.
    pub const fn path(&self) -> &'static str {
        match self {
            Endpoint::Realtime => "/v3/weather/realtime",
            Endpoint::Nowcast => "/v3/weather/nowcast",
        }
    }

    /// Fields the endpoint does not serve. Requesting any of them is a bad request.
    pub const fn ineligible_fields(&self) -> &'static [Field] {
        match self {
            Endpoint::Realtime => &[
                Field::PrecipitationProbability,
                Field::PrecipitationAccumulation,
                Field::CloudSatellite,
                Field::WeatherGroups,
            ],
            Endpoint::Nowcast => &[
                Field::PrecipitationProbability,
                Field::PrecipitationAccumulation,
                Field::CloudSatellite,
                Field::MoonPhase,
                Field::WeatherGroups,
                Field::FireIndex,
            ],
        }
    }

    pub fn accepts(&self, field: Field) -> bool {
        !self.ineligible_fields().contains(&field)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Endpoint::Realtime.path(), "/v3/weather/realtime");
        assert_eq!(Endpoint::Nowcast.to_string(), "/v3/weather/nowcast");
    }

    #[test]
    fn nowcast_rejects_fire_and_moon_but_realtime_does_not() {
        assert!(!Endpoint::Nowcast.accepts(Field::FireIndex));
        assert!(!Endpoint::Nowcast.accepts(Field::MoonPhase));
        assert!(Endpoint::Realtime.accepts(Field::FireIndex));
        assert!(Endpoint::Realtime.accepts(Field::MoonPhase));
    }

    #[test]
    fn both_reject_weather_groups() {
        assert!(!Endpoint::Realtime.accepts(Field::WeatherGroups));
        assert!(!Endpoint::Nowcast.accepts(Field::WeatherGroups));
        assert!(Endpoint::Nowcast.accepts(Field::Temperature));
    }
}

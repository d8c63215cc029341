//! Argument checks run before any request is built.

use chrono::{DateTime, Utc};

use crate::{
    endpoint::Endpoint,
    error::{HttpError, ValidationError},
    field::{Field, join_fields},
};

/// The API only covers latitudes within ±59.9 degrees.
pub fn valid_latitude(latitude: f64) -> bool {
    (-59.9..=59.9).contains(&latitude)
}

pub fn valid_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}

/// Validate the arguments of a call to `endpoint`.
///
/// Checks run in a fixed order and the first failure wins: latitude,
/// longitude, time range (nowcast only), then field eligibility.
pub fn validate_request(
    endpoint: Endpoint,
    latitude: f64,
    longitude: f64,
    fields: &[Field],
    start_time: Option<&DateTime<Utc>>,
    end_time: Option<&DateTime<Utc>>,
) -> Result<(), ValidationError> {
    if !valid_latitude(latitude) {
        return Err(ValidationError::InvalidLatitude);
    }

    if !valid_longitude(longitude) {
        return Err(ValidationError::InvalidLongitude);
    }

    let reversed = match (start_time, end_time) {
        (Some(start), Some(end)) => start > end,
        _ => false,
    };

    if endpoint == Endpoint::Nowcast && reversed {
        return Err(ValidationError::InvalidTimeRange);
    }

    let ineligible: Vec<Field> = fields
        .iter()
        .copied()
        .filter(|f| !endpoint.accepts(*f))
        .collect();

    if !ineligible.is_empty() {
        let message = format!("invalid fields provided ({})", join_fields(&ineligible, ", "));
        let error = HttpError::bad_request(endpoint.path(), message);
        return Err(ValidationError::IneligibleFields(error));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn check(
        endpoint: Endpoint,
        latitude: f64,
        longitude: f64,
        fields: &[Field],
    ) -> Result<(), ValidationError> {
        validate_request(endpoint, latitude, longitude, fields, None, None)
    }

    fn check_window(
        endpoint: Endpoint,
        fields: &[Field],
        start: Option<&DateTime<Utc>>,
        end: Option<&DateTime<Utc>>,
    ) -> Result<(), ValidationError> {
        validate_request(endpoint, 0.0, 0.0, fields, start, end)
    }

    #[test]
    fn latitude_bounds() {
        let cases = [
            (52.0, true),
            (-59.9, true),
            (59.9, true),
            (-59.91, false),
            (59.91, false),
            (90.0, false),
        ];

        for (latitude, want) in cases {
            assert_eq!(valid_latitude(latitude), want, "latitude {latitude}");
        }
    }

    #[test]
    fn longitude_bounds() {
        let cases = [
            (100.0, true),
            (-180.0, true),
            (180.0, true),
            (-180.01, false),
            (180.01, false),
        ];

        for (longitude, want) in cases {
            assert_eq!(valid_longitude(longitude), want, "longitude {longitude}");
        }
    }

    #[test]
    fn nan_coordinates_are_invalid() {
        assert!(!valid_latitude(f64::NAN));
        assert!(!valid_longitude(f64::NAN));
    }

    #[test]
    fn valid_arguments() {
        let fields = [Field::Temperature, Field::FeelsLike, Field::Precipitation];
        assert_eq!(check(Endpoint::Nowcast, 59.9, 180.0, &fields), Ok(()));
        assert_eq!(check(Endpoint::Realtime, 59.9, 180.0, &fields), Ok(()));
    }

    #[test]
    fn latitude_checked_before_longitude() {
        let err = check(Endpoint::Realtime, 59.91, 181.0, &[]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidLatitude);

        let err = check(Endpoint::Realtime, 59.9, 181.0, &[Field::WeatherGroups]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidLongitude);
    }

    #[test]
    fn nowcast_single_field_error() {
        let fields = [Field::WeatherGroups, Field::Temperature];
        let err = check(Endpoint::Nowcast, 59.9, 180.0, &fields).unwrap_err();

        assert_eq!(
            err.to_string(),
            "bad request /v3/weather/nowcast: invalid fields provided (weather_groups)"
        );
    }

    #[test]
    fn nowcast_multiple_field_error() {
        let fields = [
            Field::PrecipitationProbability,
            Field::PrecipitationAccumulation,
            Field::CloudSatellite,
            Field::WeatherGroups,
        ];
        let err = check(Endpoint::Nowcast, 59.9, 180.0, &fields).unwrap_err();

        assert_eq!(
            err.to_string(),
            "bad request /v3/weather/nowcast: invalid fields provided \
             (precipitation_probability, precipitation_accumulation, cloud_satellite, \
             weather_groups)"
        );
    }

    #[test]
    fn realtime_field_errors() {
        let fields = [Field::WeatherGroups, Field::Temperature];
        let err = check(Endpoint::Realtime, 59.9, 180.0, &fields).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad request /v3/weather/realtime: invalid fields provided (weather_groups)"
        );

        let fields = [Field::FireIndex, Field::MoonPhase];
        assert_eq!(check(Endpoint::Realtime, 0.0, 0.0, &fields), Ok(()));
    }

    #[test]
    fn duplicates_are_reported_in_order() {
        let fields = [
            Field::FireIndex,
            Field::Temperature,
            Field::MoonPhase,
            Field::FireIndex,
        ];
        let err = check(Endpoint::Nowcast, 0.0, 0.0, &fields).unwrap_err();

        assert_eq!(
            err.to_string(),
            "bad request /v3/weather/nowcast: invalid fields provided \
             (fire_index, moon_phase, fire_index)"
        );
    }

    #[test]
    fn nowcast_time_range_checked_before_fields() {
        let start = Utc.with_ymd_and_hms(2020, 12, 8, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 12, 8, 11, 0, 0).unwrap();

        let err = check_window(
            Endpoint::Nowcast,
            &[Field::WeatherGroups],
            Some(&start),
            Some(&end),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidTimeRange);

        let nowcast = Endpoint::Nowcast;
        assert_eq!(check_window(nowcast, &[], Some(&end), Some(&start)), Ok(()));
        assert_eq!(check_window(nowcast, &[], Some(&start), Some(&start)), Ok(()));
        assert_eq!(check_window(nowcast, &[], Some(&start), None), Ok(()));
    }

    #[test]
    fn realtime_ignores_time_range() {
        let start = Utc.with_ymd_and_hms(2020, 12, 8, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 12, 8, 11, 0, 0).unwrap();

        assert_eq!(
            check_window(Endpoint::Realtime, &[], Some(&start), Some(&end)),
            Ok(())
        );
    }
}

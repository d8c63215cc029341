//! Plain-text output of API responses.

use std::fmt::Display;

use climacell_core::{
    NowcastData, RealtimeData,
    layer::{AirQualityLayer, CoreLayer, PollenLayer, RoadLayer},
};

type Lines = Vec<(&'static str, String)>;

fn push<T: Display>(lines: &mut Lines, name: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        lines.push((name, value.to_string()));
    }
}

fn core_lines(core: &CoreLayer) -> Lines {
    let mut lines = Vec::new();

    push(&mut lines, "temp", core.temperature.as_ref());
    push(&mut lines, "feels_like", core.feels_like.as_ref());
    push(&mut lines, "dewpoint", core.dew_point.as_ref());
    push(&mut lines, "humidity", core.humidity.as_ref());
    push(&mut lines, "wind_speed", core.wind_speed.as_ref());
    push(&mut lines, "wind_direction", core.wind_direction.as_ref());
    push(&mut lines, "wind_gust", core.wind_gust.as_ref());
    push(&mut lines, "baro_pressure", core.barometric_pressure.as_ref());
    push(&mut lines, "precipitation", core.precipitation.as_ref());
    push(&mut lines, "precipitation_type", core.precipitation_type.as_ref());
    push(&mut lines, "sunrise", core.sunrise.as_ref());
    push(&mut lines, "sunset", core.sunset.as_ref());
    push(&mut lines, "visibility", core.visibility.as_ref());
    push(&mut lines, "cloud_cover", core.cloud_cover.as_ref());
    push(&mut lines, "cloud_base", core.cloud_base.as_ref());
    push(&mut lines, "cloud_ceiling", core.cloud_ceiling.as_ref());
    push(
        &mut lines,
        "surface_shortwave_radiation",
        core.surface_shortwave_radiation.as_ref(),
    );
    push(&mut lines, "moon_phase", core.moon_phase.as_ref());
    push(&mut lines, "weather_code", core.weather_code.as_ref());

    lines
}

fn air_quality_lines(air: &AirQualityLayer) -> Lines {
    let mut lines = Vec::new();

    push(&mut lines, "pm25", air.particulate_matter_25.as_ref());
    push(&mut lines, "pm10", air.particulate_matter_10.as_ref());
    push(&mut lines, "o3", air.ozone.as_ref());
    push(&mut lines, "no2", air.nitrogen_dioxide.as_ref());
    push(&mut lines, "co", air.carbon_monoxide.as_ref());
    push(&mut lines, "so2", air.sulfur_dioxide.as_ref());
    push(&mut lines, "epa_aqi", air.air_quality_index_epa.as_ref());
    push(&mut lines, "epa_primary_pollutant", air.primary_pollutant_epa.as_ref());
    push(&mut lines, "epa_health_concern", air.health_concern_epa.as_ref());
    push(&mut lines, "china_aqi", air.air_quality_index_china_mep.as_ref());
    push(
        &mut lines,
        "china_primary_pollutant",
        air.primary_pollutant_china_mep.as_ref(),
    );
    push(
        &mut lines,
        "china_health_concern",
        air.health_concern_china_mep.as_ref(),
    );

    lines
}

fn pollen_lines(pollen: &PollenLayer) -> Lines {
    pollen
        .species()
        .into_iter()
        .filter_map(|(name, data)| data.value.map(|value| (name, value.to_string())))
        .collect()
}

fn road_lines(road: &RoadLayer) -> Lines {
    let mut lines = Vec::new();

    push(&mut lines, "road_risk_score", road.road_risk_score.as_ref());
    push(&mut lines, "road_risk", road.road_risk.as_ref());
    push(&mut lines, "road_risk_confidence", road.road_risk_confidence.as_ref());
    push(&mut lines, "road_risk_conditions", road.road_risk_conditions.as_ref());

    lines
}

fn write_lines(out: &mut String, indent: &str, lines: &[(&'static str, String)]) {
    for (name, value) in lines {
        out.push_str(&format!("{indent}{name}: {value}\n"));
    }
}

pub fn realtime(data: &RealtimeData) -> String {
    let mut lines = core_lines(&data.core);
    lines.extend(air_quality_lines(&data.air_quality));
    lines.extend(pollen_lines(&data.pollen));
    lines.extend(road_lines(&data.road));
    push(&mut lines, "fire_index", data.fire.fire_index.as_ref());

    if lines.is_empty() {
        return "no data returned\n".to_string();
    }

    let mut out = String::new();
    write_lines(&mut out, "", &lines);
    out
}

pub fn nowcast(data: &[NowcastData]) -> String {
    if data.is_empty() {
        return "no data returned\n".to_string();
    }

    let mut out = String::new();

    for step in data {
        let time = step
            .observation
            .observation_time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "unknown time".to_string());
        out.push_str(&format!("{time}\n"));

        let mut lines = core_lines(&step.core);
        lines.extend(air_quality_lines(&step.air_quality));
        lines.extend(pollen_lines(&step.pollen));
        lines.extend(road_lines(&step.road));
        push(&mut lines, "hail_binary", step.insurance.hail_binary.as_ref());

        write_lines(&mut out, "  ", &lines);
    }

    out
}

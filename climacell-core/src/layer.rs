//! Data layers. Each layer groups related optional values and is flattened
//! into the response types in [`crate::model`].

use serde::{Deserialize, Serialize};

use crate::model::{FloatData, IntData, PollenData, TextData, TimeData};

/// Core weather values, served by every product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreLayer {
    #[serde(rename = "temp", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<FloatData>,
    #[serde(alias = "dewpoint", skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<FloatData>,
    #[serde(rename = "baro_pressure", skip_serializing_if = "Option::is_none")]
    pub barometric_pressure: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<IntData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_type: Option<TextData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_accumulation: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_cover: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_ceiling: Option<IntData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_base: Option<IntData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_satellite: Option<FloatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_shortwave_radiation: Option<IntData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<TimeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<TimeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon_phase: Option<TextData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<TextData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_groups: Option<Vec<String>>,
}

/// Pollutant concentrations and air quality indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AirQualityLayer {
    #[serde(rename = "pm25", skip_serializing_if = "Option::is_none")]
    pub particulate_matter_25: Option<FloatData>,
    #[serde(rename = "pm10", skip_serializing_if = "Option::is_none")]
    pub particulate_matter_10: Option<FloatData>,
    #[serde(rename = "o3", alias = "03", skip_serializing_if = "Option::is_none")]
    pub ozone: Option<FloatData>,
    #[serde(rename = "no2", skip_serializing_if = "Option::is_none")]
    pub nitrogen_dioxide: Option<FloatData>,
    #[serde(rename = "co", skip_serializing_if = "Option::is_none")]
    pub carbon_monoxide: Option<FloatData>,
    #[serde(rename = "so2", skip_serializing_if = "Option::is_none")]
    pub sulfur_dioxide: Option<FloatData>,
    #[serde(rename = "epa_aqi", skip_serializing_if = "Option::is_none")]
    pub air_quality_index_epa: Option<FloatData>,
    #[serde(rename = "epa_primary_pollutant", skip_serializing_if = "Option::is_none")]
    pub primary_pollutant_epa: Option<TextData>,
    #[serde(rename = "epa_health_concern", skip_serializing_if = "Option::is_none")]
    pub health_concern_epa: Option<TextData>,
    #[serde(rename = "china_aqi", skip_serializing_if = "Option::is_none")]
    pub air_quality_index_china_mep: Option<FloatData>,
    #[serde(rename = "china_primary_pollutant", skip_serializing_if = "Option::is_none")]
    pub primary_pollutant_china_mep: Option<TextData>,
    #[serde(rename = "china_health_concern", skip_serializing_if = "Option::is_none")]
    pub health_concern_china_mep: Option<TextData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollenLayer {
    #[serde(rename = "pollen_tree", skip_serializing_if = "Option::is_none")]
    pub tree: Option<PollenTree>,
    #[serde(rename = "pollen_weed", skip_serializing_if = "Option::is_none")]
    pub weed: Option<PollenWeed>,
    #[serde(rename = "pollen_grass", skip_serializing_if = "Option::is_none")]
    pub grass: Option<PollenGrass>,
}

impl PollenLayer {
    /// Species with a reported index, keyed by their wire name.
    pub fn species(&self) -> Vec<(&'static str, PollenData)> {
        let mut species = Vec::new();

        if let Some(tree) = &self.tree {
            species.extend(tree.species());
        }
        if let Some(weed) = self.weed.as_ref().and_then(|w| w.ragweed) {
            species.push(("pollen_weed_ragweed", weed));
        }
        if let Some(grass) = self.grass.as_ref().and_then(|g| g.grass) {
            species.push(("pollen_grass_grass", grass));
        }

        species
    }
}

/// Trees that emit pollen when in season.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollenTree {
    #[serde(rename = "pollen_tree_acacia", skip_serializing_if = "Option::is_none")]
    pub acacia: Option<PollenData>,
    #[serde(rename = "pollen_tree_ash", skip_serializing_if = "Option::is_none")]
    pub ash: Option<PollenData>,
    #[serde(rename = "pollen_tree_beech", skip_serializing_if = "Option::is_none")]
    pub beech: Option<PollenData>,
    #[serde(rename = "pollen_tree_birch", skip_serializing_if = "Option::is_none")]
    pub birch: Option<PollenData>,
    #[serde(rename = "pollen_tree_cedar", skip_serializing_if = "Option::is_none")]
    pub cedar: Option<PollenData>,
    #[serde(rename = "pollen_tree_cypress", skip_serializing_if = "Option::is_none")]
    pub cypress: Option<PollenData>,
    #[serde(rename = "pollen_tree_elder", skip_serializing_if = "Option::is_none")]
    pub elder: Option<PollenData>,
    #[serde(rename = "pollen_tree_elm", skip_serializing_if = "Option::is_none")]
    pub elm: Option<PollenData>,
    #[serde(rename = "pollen_tree_hemlock", skip_serializing_if = "Option::is_none")]
    pub hemlock: Option<PollenData>,
    #[serde(rename = "pollen_tree_hickory", skip_serializing_if = "Option::is_none")]
    pub hickory: Option<PollenData>,
    #[serde(rename = "pollen_tree_juniper", skip_serializing_if = "Option::is_none")]
    pub juniper: Option<PollenData>,
    #[serde(rename = "pollen_tree_mahogany", skip_serializing_if = "Option::is_none")]
    pub mahogany: Option<PollenData>,
    #[serde(rename = "pollen_tree_maple", skip_serializing_if = "Option::is_none")]
    pub maple: Option<PollenData>,
    #[serde(rename = "pollen_tree_mulberry", skip_serializing_if = "Option::is_none")]
    pub mulberry: Option<PollenData>,
    #[serde(rename = "pollen_tree_oak", skip_serializing_if = "Option::is_none")]
    pub oak: Option<PollenData>,
    #[serde(rename = "pollen_tree_pine", skip_serializing_if = "Option::is_none")]
    pub pine: Option<PollenData>,
    #[serde(rename = "pollen_tree_cottonwood", skip_serializing_if = "Option::is_none")]
    pub cottonwood: Option<PollenData>,
    #[serde(rename = "pollen_tree_spruce", skip_serializing_if = "Option::is_none")]
    pub spruce: Option<PollenData>,
    #[serde(rename = "pollen_tree_sycamore", skip_serializing_if = "Option::is_none")]
    pub sycamore: Option<PollenData>,
    #[serde(rename = "pollen_tree_walnut", skip_serializing_if = "Option::is_none")]
    pub walnut: Option<PollenData>,
    #[serde(rename = "pollen_tree_willow", skip_serializing_if = "Option::is_none")]
    pub willow: Option<PollenData>,
}

impl PollenTree {
    fn species(&self) -> impl Iterator<Item = (&'static str, PollenData)> {
        [
            ("pollen_tree_acacia", self.acacia),
            ("pollen_tree_ash", self.ash),
            ("pollen_tree_beech", self.beech),
            ("pollen_tree_birch", self.birch),
            ("pollen_tree_cedar", self.cedar),
            ("pollen_tree_cypress", self.cypress),
            ("pollen_tree_elder", self.elder),
            ("pollen_tree_elm", self.elm),
            ("pollen_tree_hemlock", self.hemlock),
            ("pollen_tree_hickory", self.hickory),
            ("pollen_tree_juniper", self.juniper),
            ("pollen_tree_mahogany", self.mahogany),
            ("pollen_tree_maple", self.maple),
            ("pollen_tree_mulberry", self.mulberry),
            ("pollen_tree_oak", self.oak),
            ("pollen_tree_pine", self.pine),
            ("pollen_tree_cottonwood", self.cottonwood),
            ("pollen_tree_spruce", self.spruce),
            ("pollen_tree_sycamore", self.sycamore),
            ("pollen_tree_walnut", self.walnut),
            ("pollen_tree_willow", self.willow),
        ]
        .into_iter()
        .filter_map(|(name, data)| data.map(|data| (name, data)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollenWeed {
    #[serde(rename = "pollen_weed_ragweed", skip_serializing_if = "Option::is_none")]
    pub ragweed: Option<PollenData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollenGrass {
    #[serde(rename = "pollen_grass_grass", skip_serializing_if = "Option::is_none")]
    pub grass: Option<PollenData>,
}

/// Road condition risk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_risk_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_risk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_risk_confidence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_risk_conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FireLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire_index: Option<FloatData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsuranceLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hail_binary: Option<IntData>,
}

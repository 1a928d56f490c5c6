use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Geographic attributes of a network, as returned by a GeoIP lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeoCity {
    #[serde(default)]
    pub city_name: Option<Arc<str>>,
    #[serde(default)]
    pub country_name: Option<Arc<str>>,
    #[serde(default)]
    pub country_code: Option<Arc<str>>,
    #[serde(default)]
    pub is_in_european_union: bool,
    #[serde(default)]
    pub continent_name: Option<Arc<str>>,
    #[serde(default)]
    pub continent_code: Option<Arc<str>>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<Arc<str>>,
    #[serde(default)]
    pub postal_code: Option<Arc<str>>,
}

/// A successful lookup: the record and the prefix length of the network
/// it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMatch {
    pub city: GeoCity,
    pub network_prefix: u8,
}

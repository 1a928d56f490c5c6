use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::geo::GeoCity;

/// Static GeoIP table used by the geo metadata provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeoipConfig {
    #[serde(default)]
    pub networks: Vec<GeoNetworkConfig>,
}

impl GeoipConfig {
    pub fn is_enabled(&self) -> bool {
        !self.networks.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoNetworkConfig {
    pub cidr: Arc<str>,

    #[serde(flatten)]
    pub city: GeoCity,
}

use dns_select_domain::{ecs_scope_key, GeoCity, QueryMetadata};
use std::sync::Arc;
use tracing::debug;

use crate::criteria::{client_subnet, parse_source};
use crate::ports::{GeoLookup, MetadataProvider, QueryRequest};

/// Prefix shared by every key the geo provider publishes.
pub const GEOIP_PREFIX: &str = "geoip";

/// Publishes geographic attributes of the client under `geoip/...`.
///
/// The lookup uses the EDNS Client Subnet address when the query carries
/// one, the source address otherwise. A `/0` subnet publishes nothing, so
/// geo-keyed selectors fall back to the base. Every value is paired with its
/// `/_ecs-scope` companion: the prefix length of the matched network for
/// ECS lookups, `0` for lookups on the source address.
pub struct GeoMetadataProvider {
    lookup: Arc<dyn GeoLookup>,
}

impl GeoMetadataProvider {
    pub fn new(lookup: Arc<dyn GeoLookup>) -> Self {
        Self { lookup }
    }
}

impl MetadataProvider for GeoMetadataProvider {
    fn name(&self) -> &'static str {
        "geoip"
    }

    fn populate(&self, request: &dyn QueryRequest, metadata: &mut QueryMetadata) {
        let (addr, via_ecs) = match client_subnet(request) {
            // Source prefix 0: the client asked for no location to be used.
            Some(subnet) if subnet.prefix() == 0 => {
                debug!("Client subnet /0, skipping GeoIP lookup");
                return;
            }
            Some(subnet) => (subnet.ip(), true),
            None => match parse_source(request.source_address()) {
                Some(ip) => (ip, false),
                None => {
                    debug!(
                        source = request.source_address(),
                        "No usable client address for GeoIP lookup"
                    );
                    return;
                }
            },
        };

        let Some(found) = self.lookup.lookup(addr) else {
            debug!(addr = %addr, "No GeoIP entry for address");
            return;
        };

        let scope = if via_ecs { found.network_prefix } else { 0 };
        debug!(addr = %addr, scope, "GeoIP entry found");
        set_city_metadata(metadata, &found.city, scope);
    }
}

fn set_city_metadata(metadata: &mut QueryMetadata, city: &GeoCity, scope: u8) {
    let scope = scope.to_string();
    let mut set = |suffix: &str, value: String| {
        let key = format!("{GEOIP_PREFIX}{suffix}");
        metadata.set_value(ecs_scope_key(&key), scope.clone());
        metadata.set_value(key, value);
    };

    let text = |value: &Option<Arc<str>>| value.as_deref().unwrap_or_default().to_string();

    set("/city/name", text(&city.city_name));
    set("/country/name", text(&city.country_name));
    set("/continent/name", text(&city.continent_name));
    set("/country/code", text(&city.country_code));
    set(
        "/country/is_in_european_union",
        city.is_in_european_union.to_string(),
    );
    set("/continent/code", text(&city.continent_code));
    set("/latitude", city.latitude.to_string());
    set("/longitude", city.longitude.to_string());
    set("/timezone", text(&city.timezone));
    set("/postalcode", text(&city.postal_code));
}

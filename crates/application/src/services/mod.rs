mod geo_metadata;
mod protocol_metadata;

pub use geo_metadata::{GeoMetadataProvider, GEOIP_PREFIX};
pub use protocol_metadata::{ProtocolMetadataProvider, PROTOCOL_NAME_KEY};

mod geo_lookup;
mod metadata_provider;
mod query_request;

pub use geo_lookup::GeoLookup;
pub use metadata_provider::MetadataProvider;
pub use query_request::QueryRequest;

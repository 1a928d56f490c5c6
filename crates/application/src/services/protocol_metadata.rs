use dns_select_domain::QueryMetadata;

use crate::ports::{MetadataProvider, QueryRequest};

/// Metadata key holding the transport protocol of the query.
pub const PROTOCOL_NAME_KEY: &str = "protocol_metadata/name";

/// Publishes the transport protocol, so that a SELECT record can choose
/// its answer per protocol with `selector = "protocol_metadata/name"`.
#[derive(Debug, Default)]
pub struct ProtocolMetadataProvider;

impl ProtocolMetadataProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for ProtocolMetadataProvider {
    fn name(&self) -> &'static str {
        "protocol_metadata"
    }

    fn populate(&self, request: &dyn QueryRequest, metadata: &mut QueryMetadata) {
        let protocol = request.protocol().to_string();
        metadata.set_value_fn(PROTOCOL_NAME_KEY, move || protocol.clone());
    }
}

use dns_select_domain::QueryMetadata;

use super::QueryRequest;

/// A pipeline stage that publishes per-query metadata consumed by selectors.
///
/// Providers run before selection, so everything they write is visible to
/// the selectors of the same query.
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn populate(&self, request: &dyn QueryRequest, metadata: &mut QueryMetadata);
}

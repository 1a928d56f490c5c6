use std::sync::Arc;

pub use dns_select_domain::RANDOM_SELECTOR;

use super::{MetadataSelector, RandomSelector, Selector};

/// Maps a policy name to a selector. Any name other than
/// [`RANDOM_SELECTOR`] is treated as a metadata key; a key that never
/// resolves simply makes the selector always fall back to the default.
pub fn get_selector<I, S>(name: &str, options: I) -> Arc<dyn Selector>
where
    I: IntoIterator<Item = S>,
    S: Into<Arc<str>>,
{
    match name {
        RANDOM_SELECTOR => Arc::new(RandomSelector::new(options)),
        key => Arc::new(MetadataSelector::new(key, options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_name_builds_random_selector() {
        let selector = get_selector(RANDOM_SELECTOR, ["a", "b"]);
        assert_eq!(selector.name(), "random");
        assert_eq!(selector.options().len(), 2);
    }

    #[test]
    fn test_other_names_build_metadata_selector() {
        for name in ["region", "geoip/country/code", "random", "@other"] {
            let selector = get_selector(name, ["eu"]);
            assert_eq!(selector.name(), "metadata", "name {name}");
        }
    }
}

//! Selection policies for SELECT records.
//!
//! A [`Selector`] is built once per policy when configuration is resolved
//! and then shared, immutably, by every query that needs it.
mod factory;
mod metadata;
mod random;
mod registry;

pub use factory::{get_selector, RANDOM_SELECTOR};
pub use metadata::MetadataSelector;
pub use random::{EntropySource, RandomSelector};
pub use registry::SelectorRegistry;

use dns_select_domain::{SelectionResult, SelectorCriteria};
use std::fmt;
use std::sync::Arc;

pub trait Selector: Send + Sync + fmt::Debug {
    /// Returns one of the configured options, or the default result when
    /// no decision can be made. Never fails.
    fn select(&self, criteria: &SelectorCriteria<'_>) -> SelectionResult;

    fn name(&self) -> &'static str;

    fn options(&self) -> &[Arc<str>];
}

fn collect_options<I, S>(options: I) -> Arc<[Arc<str>]>
where
    I: IntoIterator<Item = S>,
    S: Into<Arc<str>>,
{
    options.into_iter().map(Into::into).collect()
}

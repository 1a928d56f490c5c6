use dns_select_domain::{ecs_scope_key, SelectionResult, SelectorCriteria};
use std::sync::Arc;
use tracing::debug;

use super::{collect_options, Selector};

/// Chooses the option named by the per-query metadata value under `key`.
///
/// The value is lower-cased before it is compared with the options. The
/// companion key `key/_ecs-scope`, when present, supplies the ECS scope
/// prefix length of the answer.
#[derive(Debug)]
pub struct MetadataSelector {
    key: Arc<str>,
    scope_key: Arc<str>,
    options: Arc<[Arc<str>]>,
}

impl MetadataSelector {
    pub fn new<I, S>(key: impl Into<Arc<str>>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let key = key.into();
        Self {
            scope_key: ecs_scope_key(&key).into(),
            key,
            options: collect_options(options),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Selector for MetadataSelector {
    fn select(&self, criteria: &SelectorCriteria<'_>) -> SelectionResult {
        let mut result = SelectionResult::default();

        let Some(value_fn) = criteria.metadata.value_fn(&self.key) else {
            debug!(key = %self.key, "No metadata function for key");
            return result;
        };

        let option = value_fn().to_lowercase();
        if option.is_empty() {
            debug!(key = %self.key, "No metadata value for key");
            return result;
        }

        if self.options.iter().any(|o| **o == *option) {
            result.option = option;
        } else {
            debug!(key = %self.key, option = %option, "Unrecognized option for key");
        }

        match criteria.metadata.value_fn(&self.scope_key) {
            Some(scope_fn) => {
                let scope = scope_fn();
                debug!(key = %self.key, scope = %scope, "Found ECS scope");
                result.ecs_scope_prefix_length = parse_scope(&scope);
            }
            None => debug!(key = %self.key, "No ECS scope for key"),
        }

        result
    }

    fn name(&self) -> &'static str {
        "metadata"
    }

    fn options(&self) -> &[Arc<str>] {
        &self.options
    }
}

/// Parses a decimal scope length, keeping only the low byte. Anything that
/// is not an unsigned integer yields 0.
fn parse_scope(value: &str) -> u8 {
    value.parse::<u64>().map(|v| v as u8).unwrap_or(0)
}

use dns_select_domain::{SelectRecord, SelectorKey};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::{get_selector, Selector};

/// Selectors for every distinct [`SelectorKey`] of a record set.
///
/// Records sharing a key are served by one selector whose options are the
/// union of the records' options, in declaration order and without
/// duplicates.
#[derive(Debug, Default)]
pub struct SelectorRegistry {
    selectors: FxHashMap<SelectorKey, Arc<dyn Selector>>,
}

impl SelectorRegistry {
    pub fn from_records(records: &[SelectRecord]) -> Self {
        let mut grouped: Vec<(SelectorKey, Vec<Arc<str>>)> = Vec::new();
        let mut positions: FxHashMap<SelectorKey, usize> = FxHashMap::default();

        for record in records {
            let key = SelectorKey::from_record(record);
            let index = *positions.entry(key.clone()).or_insert_with(|| {
                grouped.push((key, Vec::new()));
                grouped.len() - 1
            });

            let options = &mut grouped[index].1;
            for option in &record.options {
                if !options.contains(option) {
                    options.push(option.clone());
                }
            }
        }

        let selectors: FxHashMap<_, _> = grouped
            .into_iter()
            .map(|(key, options)| {
                let selector = get_selector(&key.selector, options);
                debug!(key = %key, selector = selector.name(), options = selector.options().len(), "Selector registered");
                (key, selector)
            })
            .collect();

        info!(
            records = records.len(),
            selectors = selectors.len(),
            "Selector registry built"
        );

        Self { selectors }
    }

    pub fn get(&self, key: &SelectorKey) -> Option<&Arc<dyn Selector>> {
        self.selectors.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SelectorKey> {
        self.selectors.keys()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

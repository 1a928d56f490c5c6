use dns_select_domain::{QueryMetadata, SelectRecord, SelectionResult, SelectorKey};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::criteria::extract_criteria;
use crate::ports::{MetadataProvider, QueryRequest};
use crate::selectors::SelectorRegistry;

/// Answer chosen for one SELECT record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedAnswer {
    pub name: Arc<str>,
    /// Chosen option, or the record's base when the policy made no decision.
    pub target: Arc<str>,
    /// Whether `target` came from the policy rather than the base.
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub answers: Vec<SelectedAnswer>,
    /// Narrowest scope among the selections made for this query.
    pub ecs_scope_prefix_length: u8,
}

pub struct SelectAnswersUseCase {
    registry: Arc<SelectorRegistry>,
    providers: Vec<Arc<dyn MetadataProvider>>,
}

impl SelectAnswersUseCase {
    pub fn new(registry: Arc<SelectorRegistry>) -> Self {
        Self {
            registry,
            providers: Vec::new(),
        }
    }

    /// Adds a metadata provider. Providers run in insertion order, so a
    /// later provider overwrites keys set by an earlier one.
    pub fn with_provider(mut self, provider: Arc<dyn MetadataProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    #[instrument(skip_all, fields(records = records.len(), protocol = request.protocol()))]
    pub fn execute(&self, request: &dyn QueryRequest, records: &[SelectRecord]) -> SelectionOutcome {
        let mut metadata = QueryMetadata::new();
        for provider in &self.providers {
            provider.populate(request, &mut metadata);
        }
        debug!(keys = metadata.len(), "Metadata populated");

        let criteria = extract_criteria(&metadata, request);

        // One decision per key per query, shared by every record using it.
        let mut decisions: Vec<(SelectorKey, SelectionResult)> = Vec::new();
        let mut outcome = SelectionOutcome::default();

        for record in records {
            let key = SelectorKey::from_record(record);

            let result = match decisions.iter().find(|(k, _)| *k == key) {
                Some((_, result)) => result.clone(),
                None => {
                    let result = match self.registry.get(&key) {
                        Some(selector) => selector.select(&criteria),
                        None => {
                            warn!(record = %record.name, key = %key, "No selector registered for record");
                            SelectionResult::default()
                        }
                    };
                    decisions.push((key, result.clone()));
                    result
                }
            };

            let selected = !result.is_default();
            let target = if selected {
                Arc::from(result.option.as_str())
            } else {
                record.base.clone()
            };

            debug!(record = %record.name, target = %target, selected, scope = result.ecs_scope_prefix_length, "Record resolved");

            outcome.answers.push(SelectedAnswer {
                name: record.name.clone(),
                target,
                selected,
            });
        }

        outcome.ecs_scope_prefix_length = decisions
            .iter()
            .map(|(_, r)| r.ecs_scope_prefix_length)
            .max()
            .unwrap_or(0);

        outcome
    }
}

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::DomainError;

/// Policy name selecting uniformly at random among the options. The `@`
/// prefix keeps it apart from metadata keys.
pub const RANDOM_SELECTOR: &str = "@random";

/// A record advertising several candidate answers, one of which is chosen
/// per query by the policy named in `selector`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectRecord {
    pub name: Arc<str>,

    /// Policy name: `@random` or a metadata key.
    pub selector: Arc<str>,

    /// Answer used when the policy makes no decision.
    pub base: Arc<str>,

    #[serde(default)]
    pub options: Vec<Arc<str>>,
}

impl SelectRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        selector: impl Into<Arc<str>>,
        base: impl Into<Arc<str>>,
        options: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
            base: base.into(),
            options: options.into_iter().map(Arc::from).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidSelectRecord(
                "record name cannot be empty".to_string(),
            ));
        }
        if self.selector.trim().is_empty() {
            return Err(DomainError::InvalidSelectRecord(format!(
                "record '{}' has no selector",
                self.name
            )));
        }

        // Metadata values are lower-cased before matching.
        if &*self.selector != RANDOM_SELECTOR {
            if let Some(option) = self.options.iter().find(|o| o.to_lowercase() != ***o) {
                return Err(DomainError::InvalidSelectRecord(format!(
                    "record '{}' option '{}' must be lower-case to match selector '{}'",
                    self.name, option, self.selector
                )));
            }
        }
        Ok(())
    }
}

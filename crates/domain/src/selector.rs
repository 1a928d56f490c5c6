use ipnetwork::IpNetwork;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

use crate::metadata::QueryMetadata;
use crate::select_record::SelectRecord;

/// Identifies an applicable selection policy.
///
/// Distinct SELECT records share a key when they rely on the same selector
/// and base, and then receive the same answer within one query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorKey {
    pub selector: Arc<str>,
    pub base: Arc<str>,
}

impl SelectorKey {
    pub fn new(selector: impl Into<Arc<str>>, base: impl Into<Arc<str>>) -> Self {
        Self {
            selector: selector.into(),
            base: base.into(),
        }
    }

    pub fn from_record(record: &SelectRecord) -> Self {
        Self {
            selector: record.selector.clone(),
            base: record.base.clone(),
        }
    }
}

impl fmt::Display for SelectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.selector, self.base)
    }
}

/// Inputs a selector may use to make its decision.
#[derive(Debug, Clone)]
pub struct SelectorCriteria<'a> {
    pub metadata: &'a QueryMetadata,
    pub src: Option<IpAddr>,
    pub protocol: Arc<str>,
    pub ecs: Option<IpNetwork>,
}

impl<'a> SelectorCriteria<'a> {
    pub fn new(metadata: &'a QueryMetadata, protocol: impl Into<Arc<str>>) -> Self {
        Self {
            metadata,
            src: None,
            protocol: protocol.into(),
            ecs: None,
        }
    }

    pub fn with_src(mut self, src: IpAddr) -> Self {
        self.src = Some(src);
        self
    }

    pub fn with_ecs(mut self, ecs: IpNetwork) -> Self {
        self.ecs = Some(ecs);
        self
    }
}

/// Outcome of a single selection. An empty `option` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub option: String,
    pub ecs_scope_prefix_length: u8,
}

impl SelectionResult {
    pub fn new(option: impl Into<String>, ecs_scope_prefix_length: u8) -> Self {
        Self {
            option: option.into(),
            ecs_scope_prefix_length,
        }
    }

    pub fn is_default(&self) -> bool {
        self.option.is_empty()
    }
}

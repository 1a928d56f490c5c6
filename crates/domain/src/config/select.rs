use serde::{Deserialize, Serialize};

use crate::select_record::SelectRecord;

/// SELECT records served by this instance.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub records: Vec<SelectRecord>,
}

impl SelectConfig {
    pub fn find(&self, name: &str) -> Option<&SelectRecord> {
        let name = name.trim_end_matches('.');
        self.records
            .iter()
            .find(|r| r.name.trim_end_matches('.').eq_ignore_ascii_case(name))
    }
}

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Suffix appended to a metadata key to form the key holding the ECS scope
/// prefix length of that value.
///
/// A provider that publishes `K` and wants ECS-aware caching of answers
/// derived from it publishes `K/_ecs-scope` (a decimal string) alongside.
pub const ECS_SCOPE_SUFFIX: &str = "/_ecs-scope";

/// Returns the companion scope key for `key`.
pub fn ecs_scope_key(key: &str) -> String {
    let mut scoped = String::with_capacity(key.len() + ECS_SCOPE_SUFFIX.len());
    scoped.push_str(key);
    scoped.push_str(ECS_SCOPE_SUFFIX);
    scoped
}

/// Lazily evaluated metadata value.
pub type ValueFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Per-query metadata store.
///
/// Created empty when a query enters the pipeline and dropped when its
/// processing finishes. Providers write into it before selection runs;
/// selectors only read.
#[derive(Default, Clone)]
pub struct QueryMetadata {
    values: FxHashMap<Arc<str>, ValueFn>,
}

impl QueryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `f` under `key`, replacing any previous provider.
    pub fn set_value_fn<F>(&mut self, key: impl Into<Arc<str>>, f: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.values.insert(key.into(), Arc::new(f));
    }

    /// Registers a constant value under `key`.
    pub fn set_value(&mut self, key: impl Into<Arc<str>>, value: impl Into<String>) {
        let value = value.into();
        self.set_value_fn(key, move || value.clone());
    }

    pub fn value_fn(&self, key: &str) -> Option<&ValueFn> {
        self.values.get(key)
    }

    /// Evaluates the provider registered under `key`, if any.
    pub fn value(&self, key: &str) -> Option<String> {
        self.value_fn(key).map(|f| f())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_ref())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for QueryMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("QueryMetadata").field("keys", &keys).finish()
    }
}

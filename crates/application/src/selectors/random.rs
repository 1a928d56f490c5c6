use dns_select_domain::{SelectionResult, SelectorCriteria};
use ring::error::Unspecified;
use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use super::{collect_options, Selector};

/// Source of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), Unspecified>;
}

impl EntropySource for SystemRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), Unspecified> {
        SecureRandom::fill(self, dest)
    }
}

/// Chooses one of the options uniformly at random, independent of the query.
pub struct RandomSelector {
    options: Arc<[Arc<str>]>,
    entropy: Box<dyn EntropySource>,
}

impl RandomSelector {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self::with_entropy(options, SystemRandom::new())
    }

    pub fn with_entropy<I, S, E>(options: I, entropy: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
        E: EntropySource + 'static,
    {
        Self {
            options: collect_options(options),
            entropy: Box::new(entropy),
        }
    }
}

impl Selector for RandomSelector {
    fn select(&self, _criteria: &SelectorCriteria<'_>) -> SelectionResult {
        if self.options.is_empty() {
            return SelectionResult::default();
        }

        match uniform_index(self.entropy.as_ref(), self.options.len()) {
            Ok(index) => SelectionResult::new(self.options[index].as_ref(), 0),
            Err(_) => {
                warn!(options = self.options.len(), "Entropy source failed, using default");
                SelectionResult::default()
            }
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn options(&self) -> &[Arc<str>] {
        &self.options
    }
}

impl fmt::Debug for RandomSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSelector")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Draws an index in `[0, len)` without modulo bias.
///
/// Draws falling in the incomplete last block of `len` values are rejected,
/// so every index has the same number of accepting draws.
fn uniform_index(entropy: &dyn EntropySource, len: usize) -> Result<usize, Unspecified> {
    let bound = len as u64;
    // 2^64 mod bound
    let remainder = (u64::MAX % bound + 1) % bound;
    let limit = u64::MAX - remainder;

    loop {
        let mut buf = [0u8; 8];
        entropy.fill(&mut buf)?;
        let value = u64::from_be_bytes(buf);
        if value <= limit {
            return Ok((value % bound) as usize);
        }
    }
}

use super::outcome::Outcome;
use crate::domain::errors::LedgerError;

/// Default retention cap for a ledger
pub const DEFAULT_MAX_HISTORY_LEN: usize = 10_000;

/// Append-only record of observed outcomes.
///
/// Entries are kept in arrival order. Once more than `max_len` outcomes are
/// retained the oldest are evicted; `total_observed` keeps counting every
/// accepted append regardless of eviction.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    entries: Vec<Outcome>,
    // Evicted prefix of `entries`, compacted once it reaches `max_len`
    head: usize,
    max_len: usize,
    total_observed: u64,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_HISTORY_LEN)
    }

    /// Create a ledger retaining at most `max_len` outcomes (minimum 2)
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            head: 0,
            max_len: max_len.max(2),
            total_observed: 0,
        }
    }

    /// Validate and append a raw value, returning the new retained length
    pub fn append(&mut self, value: i64) -> Result<usize, LedgerError> {
        let outcome = Outcome::new(value)?;
        Ok(self.push(outcome))
    }

    /// Append an already validated outcome, returning the new retained length
    pub fn push(&mut self, outcome: Outcome) -> usize {
        self.entries.push(outcome);
        self.total_observed += 1;

        if self.len() > self.max_len {
            self.head += 1;
            if self.head >= self.max_len {
                self.entries.drain(..self.head);
                self.head = 0;
            }
        }

        self.len()
    }

    /// The most recent `n` outcomes in original order (all of them if fewer exist)
    pub fn last(&self, n: usize) -> &[Outcome] {
        let all = self.all();
        &all[all.len().saturating_sub(n)..]
    }

    /// Every retained outcome, oldest first
    pub fn all(&self) -> &[Outcome] {
        &self.entries[self.head..]
    }

    pub fn len(&self) -> usize {
        self.entries.len() - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of outcomes accepted since creation, including evicted ones
    pub fn total_observed(&self) -> u64 {
        self.total_observed
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

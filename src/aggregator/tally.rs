//! Per-frame cost tally keyed by call site.
//!
//! Entries remember the order in which their call site was first seen.
//! Ranking sorts by cost descending with a stable sort, so call sites
//! with equal cost keep their first-seen order.

use std::collections::HashMap;

/// Accumulated cost of a single call site
///
/// **Public** - used by reporters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCost {
    /// Call-site identifier as it appears in the trace
    pub call_site: String,

    /// Sum of positive costs recorded for this call site
    pub cost: i64,
}

impl SiteCost {
    pub fn new(call_site: impl Into<String>, cost: i64) -> Self {
        Self {
            call_site: call_site.into(),
            cost,
        }
    }
}

/// Mapping from call site to accumulated cost, in first-seen order
#[derive(Debug, Default, Clone)]
pub struct CallSiteTally {
    index: HashMap<String, usize>,
    entries: Vec<SiteCost>,
}

impl CallSiteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-accumulate `cost` for `call_site`
    ///
    /// Returns the new total, or `None` (leaving the entry unchanged) if it
    /// would overflow.
    pub fn add(&mut self, call_site: &str, cost: i64) -> Option<i64> {
        let entries = &mut self.entries;
        let slot = *self.index.entry(call_site.to_string()).or_insert_with(|| {
            entries.push(SiteCost::new(call_site, 0));
            entries.len() - 1
        });

        let entry = &mut self.entries[slot];
        entry.cost = entry.cost.checked_add(cost)?;
        Some(entry.cost)
    }

    pub fn get(&self, call_site: &str) -> Option<i64> {
        self.index.get(call_site).map(|&slot| self.entries[slot].cost)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every entry
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|e| e.cost).sum()
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[SiteCost] {
        &self.entries
    }

    /// Consume the tally, returning entries sorted by cost (descending)
    pub fn into_ranked(self) -> Vec<SiteCost> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.cost.cmp(&a.cost));
        ranked
    }

    /// Drain the tally into a ranked list, leaving it empty
    pub fn take_ranked(&mut self) -> Vec<SiteCost> {
        std::mem::take(self).into_ranked()
    }
}

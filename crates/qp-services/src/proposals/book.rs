//! The current proposal
//!
//! Holds at most one proposal. Regeneration replaces it wholesale and a
//! user can clear it; nothing is ever merged.

use chrono::{DateTime, Duration, Utc};
use qp_planning::Proposal;
use tracing::info;

#[derive(Debug, Default)]
pub struct ProposalBook {
    current: Option<Proposal>,
}

impl ProposalBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Proposal> {
        self.current.as_ref()
    }

    /// Swap in a new proposal, returning the one it replaces
    pub fn replace(&mut self, proposal: Proposal) -> Option<Proposal> {
        info!(proposal_id = %proposal.id, items = proposal.items.len(), "Proposal replaced");
        self.current.replace(proposal)
    }

    pub fn clear(&mut self) -> Option<Proposal> {
        let previous = self.current.take();
        if let Some(p) = &previous {
            info!(proposal_id = %p.id, "Proposal cleared");
        }
        previous
    }

    /// Whether the current proposal is older than `threshold`. False when empty.
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        self.current
            .as_ref()
            .is_some_and(|p| p.is_stale(now, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qp_core::types::EngineKind;

    #[test]
    fn test_replace_and_clear() {
        let mut book = ProposalBook::new();
        assert!(book.current().is_none());
        assert!(!book.is_stale(Utc::now(), Duration::hours(24)));

        let first = Proposal::new(EngineKind::Strict, None, Vec::new());
        let first_id = first.id;
        assert!(book.replace(first).is_none());

        let second = Proposal::new(EngineKind::Strict, None, Vec::new());
        let replaced = book.replace(second).unwrap();
        assert_eq!(replaced.id, first_id);
        assert_ne!(book.current().unwrap().id, first_id);

        assert!(book.clear().is_some());
        assert!(book.current().is_none());
        assert!(book.clear().is_none());
    }

    #[test]
    fn test_staleness() {
        let mut book = ProposalBook::new();
        let old = Proposal::generated_at(Utc::now() - Duration::hours(25), EngineKind::Enhanced, None, Vec::new());
        book.replace(old);
        assert!(book.is_stale(Utc::now(), Duration::hours(24)));
        assert!(!book.is_stale(Utc::now(), Duration::hours(48)));
    }
}

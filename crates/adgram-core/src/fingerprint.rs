//! Cheap change detection over deal collections.

use adgram_proto::Deal;

/// Order-sensitive digest of the `(id, status)` pairs of a deal collection.
///
/// Equality of two fingerprints is a sufficient (not necessary) proxy for
/// "no render needed": additions, removals, reorderings, and status
/// mutations all change the digest, while mutations of unrelated fields
/// (`label`, `title`, amounts) deliberately do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(deals: &[Deal]) -> Self {
        let pairs: Vec<(i64, &str)> = deals
            .iter()
            .map(|deal| (deal.id, deal.status.as_str()))
            .collect();
        // serde_json over a pair list is deterministic; serialization of
        // plain integers and strings cannot fail
        Self(serde_json::to_string(&pairs).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::deal;

    #[test]
    fn identical_pairs_produce_equal_fingerprints() {
        let a = vec![deal(1, "pending"), deal(2, "funded")];
        let mut b = vec![deal(1, "pending"), deal(2, "funded")];
        // Order-irrelevant field mutations are invisible
        b[0].label = "Totally different label".to_string();
        b[1].amount = 999.0;

        assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    }

    #[test]
    fn status_change_is_detected() {
        let a = vec![deal(1, "pending"), deal(2, "funded")];
        let b = vec![deal(1, "pending"), deal(2, "posted")];
        assert_ne!(Fingerprint::of(&a), Fingerprint::of(&b));
    }

    #[test]
    fn membership_change_is_detected() {
        let a = vec![deal(1, "pending")];
        let added = vec![deal(1, "pending"), deal(2, "pending")];
        let removed: Vec<_> = vec![];

        assert_ne!(Fingerprint::of(&a), Fingerprint::of(&added));
        assert_ne!(Fingerprint::of(&a), Fingerprint::of(&removed));
    }

    #[test]
    fn order_is_significant() {
        let a = vec![deal(1, "pending"), deal(2, "funded")];
        let b = vec![deal(2, "funded"), deal(1, "pending")];
        assert_ne!(Fingerprint::of(&a), Fingerprint::of(&b));
    }

    #[test]
    fn empty_collection_has_a_fingerprint() {
        assert_eq!(Fingerprint::of(&[]), Fingerprint::of(&[]));
        assert_ne!(Fingerprint::of(&[]), Fingerprint::of(&[deal(1, "pending")]));
    }
}

//! Change-edge filtering for latest-value signals.
//!
//! The spawners have most-recent-value semantics: sampled once per tick, they
//! keep re-delivering their latest event until a new one is minted. Joining
//! such signals into the reducer naively would admit the same bullet or
//! asteroid every frame until the next real spawn. `ChangeEdge` turns a
//! "latest value, possibly repeated" signal into a "fires once per logical
//! event" signal by comparing a designated key against the previous one.
//!
//! One instance per signal channel — sharing an instance across channels
//! would let one channel's key mask another's.

/// Stateful edge detector keyed by `K`.
#[derive(Debug, Default)]
pub struct ChangeEdge<K: PartialEq> {
    last_key: Option<K>,
}

impl<K: PartialEq> ChangeEdge<K> {
    pub fn new() -> Self {
        Self { last_key: None }
    }

    /// Pass `latest` through iff its key differs from the previously seen
    /// key; repeats and `None` yield `None`.
    pub fn filter<T, F>(&mut self, latest: Option<T>, key: F) -> Option<T>
    where
        F: Fn(&T) -> K,
    {
        let value = latest?;
        let k = key(&value);
        if self.last_key.as_ref() == Some(&k) {
            return None;
        }
        self.last_key = Some(k);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_stays_none() {
        let mut edge: ChangeEdge<u64> = ChangeEdge::new();
        assert_eq!(edge.filter(None::<u64>, |v| *v), None);
    }

    #[test]
    fn test_first_value_passes() {
        let mut edge = ChangeEdge::new();
        assert_eq!(edge.filter(Some(7u64), |v| *v), Some(7));
    }

    #[test]
    fn test_repeat_is_suppressed() {
        let mut edge = ChangeEdge::new();
        assert_eq!(edge.filter(Some(7u64), |v| *v), Some(7));
        assert_eq!(edge.filter(Some(7u64), |v| *v), None);
        assert_eq!(edge.filter(Some(7u64), |v| *v), None);
    }

    #[test]
    fn test_new_key_passes_again() {
        let mut edge = ChangeEdge::new();
        assert_eq!(edge.filter(Some(7u64), |v| *v), Some(7));
        assert_eq!(edge.filter(Some(7u64), |v| *v), None);
        assert_eq!(edge.filter(Some(8u64), |v| *v), Some(8));
        assert_eq!(edge.filter(Some(8u64), |v| *v), None);
    }

    #[test]
    fn test_keyed_structs() {
        #[derive(Clone)]
        struct Event {
            id: u64,
        }

        let mut edge = ChangeEdge::new();
        assert!(edge.filter(Some(Event { id: 1 }), |e| e.id).is_some());
        assert!(edge.filter(Some(Event { id: 1 }), |e| e.id).is_none());
        assert!(edge.filter(Some(Event { id: 2 }), |e| e.id).is_some());
    }

    #[test]
    fn test_independent_channels() {
        let mut bullets = ChangeEdge::new();
        let mut asteroids = ChangeEdge::new();

        assert_eq!(bullets.filter(Some(5u64), |v| *v), Some(5));
        // Same key on the other channel must still pass: channels are not shared.
        assert_eq!(asteroids.filter(Some(5u64), |v| *v), Some(5));
    }
}

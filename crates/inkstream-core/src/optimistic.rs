//! Optimistic mutation tracking
//!
//! Views update local state before the remote write resolves. Every such
//! update is captured as a [`PendingMutation`] holding an explicit undo,
//! so a failed write rolls the local state back instead of leaving it
//! stale until the next full fetch.

/// An applied-but-unconfirmed local mutation.
///
/// Create with [`PendingMutation::apply`], then call
/// [`commit`](Self::commit) once the remote write succeeds or
/// [`rollback`](Self::rollback) if it fails.
pub struct PendingMutation<S> {
    undo: Option<Box<dyn FnOnce(&mut S) + Send>>,
}

impl<S> PendingMutation<S> {
    /// Mutate `state` in place with an explicit inverse.
    pub fn apply<M, U>(state: &mut S, mutate: M, undo: U) -> Self
    where
        M: FnOnce(&mut S),
        U: FnOnce(&mut S) + Send + 'static,
    {
        mutate(state);
        Self {
            undo: Some(Box::new(undo)),
        }
    }

    /// Mutate `state` in place, capturing a full snapshot as the inverse.
    ///
    /// Convenient for list-shaped view state where a clone is cheap
    /// relative to a network round trip.
    pub fn apply_with_snapshot<M>(state: &mut S, mutate: M) -> Self
    where
        S: Clone + Send + 'static,
        M: FnOnce(&mut S),
    {
        let snapshot = state.clone();
        mutate(state);
        Self {
            undo: Some(Box::new(move |s| *s = snapshot)),
        }
    }

    /// The remote write failed; restore the pre-mutation state.
    pub fn rollback(mut self, state: &mut S) {
        if let Some(undo) = self.undo.take() {
            undo(state);
        }
    }

    /// The remote write succeeded; the local update stands.
    pub fn commit(mut self) {
        self.undo = None;
    }
}

/// Toggle a profile id in a likes list, returning the updated list.
///
/// Present ⇒ removed, absent ⇒ appended. Pure; the caller applies the
/// result locally and sends it to the remote service.
pub fn toggle_like(likes: &[String], profile_id: &str) -> Vec<String> {
    if likes.iter().any(|id| id == profile_id) {
        likes.iter().filter(|id| *id != profile_id).cloned().collect()
    } else {
        let mut updated = likes.to_vec();
        updated.push(profile_id.to_string());
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollback_restores_state() {
        let mut list = vec![1, 2, 3];
        let pending = PendingMutation::apply(
            &mut list,
            |l| l.push(4),
            |l: &mut Vec<i32>| {
                l.pop();
            },
        );
        assert_eq!(list, vec![1, 2, 3, 4]);

        pending.rollback(&mut list);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_commit_keeps_state() {
        let mut list = vec![1, 2, 3];
        let pending = PendingMutation::apply_with_snapshot(&mut list, |l| l.retain(|&n| n != 2));
        assert_eq!(list, vec![1, 3]);

        pending.commit();
        assert_eq!(list, vec![1, 3]);
    }

    #[test]
    fn test_snapshot_rollback_restores_exactly() {
        let mut list = vec!["a".to_string(), "b".to_string()];
        let pending = PendingMutation::apply_with_snapshot(&mut list, |l| l.clear());
        assert!(list.is_empty());

        pending.rollback(&mut list);
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_toggle_like_adds_when_absent() {
        let likes = vec!["doc1".to_string()];
        let updated = toggle_like(&likes, "doc2");
        assert_eq!(updated, vec!["doc1".to_string(), "doc2".to_string()]);
    }

    #[test]
    fn test_toggle_like_removes_when_present() {
        let likes = vec!["doc1".to_string(), "doc2".to_string()];
        let updated = toggle_like(&likes, "doc1");
        assert_eq!(updated, vec!["doc2".to_string()]);
    }

    #[test]
    fn test_toggle_like_twice_is_identity() {
        let likes = vec!["doc1".to_string()];
        let once = toggle_like(&likes, "doc2");
        let twice = toggle_like(&once, "doc2");
        assert_eq!(twice, likes);
    }
}

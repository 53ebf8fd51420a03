//! Property-based tests for the pure pieces: like toggling, slug
//! derivation, and guard decisions.

use inkstream_core::types::post::slugify;
use inkstream_core::{
    evaluate, toggle_like, AuthStatus, BootPhase, GuardDecision, RouteAccess, SessionState,
};
use proptest::prelude::*;

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

proptest! {
    #[test]
    fn toggle_like_twice_is_identity(
        likes in prop::collection::vec(id_strategy(), 0..8),
        id in id_strategy(),
    ) {
        // Dedup the starting list; the service never stores duplicates.
        let mut likes = likes;
        likes.sort();
        likes.dedup();

        let once = toggle_like(&likes, &id);
        let twice = toggle_like(&once, &id);

        let mut expected = likes.clone();
        expected.sort();
        let mut actual = twice;
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn toggle_like_never_duplicates(
        likes in prop::collection::vec(id_strategy(), 0..8),
        id in id_strategy(),
    ) {
        let mut likes = likes;
        likes.sort();
        likes.dedup();

        let toggled = toggle_like(&likes, &id);
        let count = toggled.iter().filter(|l| **l == id).count();
        prop_assert!(count <= 1);
    }

    #[test]
    fn slugify_output_is_url_safe(title in ".{0,64}") {
        let slug = slugify(&title);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slugify_is_idempotent(title in ".{0,64}") {
        let slug = slugify(&title);
        prop_assert_eq!(slugify(&slug), slug.clone());
    }

    #[test]
    fn guard_is_total_and_only_waits_while_booting(
        booting in any::<bool>(),
        authenticated in any::<bool>(),
        access_idx in 0usize..3,
    ) {
        let access = [RouteAccess::Public, RouteAccess::Protected, RouteAccess::PublicOnly][access_idx];
        let state = SessionState {
            phase: if booting { BootPhase::Booting } else { BootPhase::Ready },
            status: if authenticated { AuthStatus::Authenticated } else { AuthStatus::Guest },
            ..SessionState::new()
        };

        let decision = evaluate(access, &state);
        prop_assert_eq!(decision == GuardDecision::Wait, booting);
        if !booting {
            match access {
                RouteAccess::Protected if !authenticated =>
                    prop_assert_eq!(decision, GuardDecision::RedirectToLogin),
                RouteAccess::PublicOnly if authenticated =>
                    prop_assert_eq!(decision, GuardDecision::RedirectHome),
                _ => prop_assert_eq!(decision, GuardDecision::Render),
            }
        }
    }
}

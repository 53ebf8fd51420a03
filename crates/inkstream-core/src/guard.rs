//! Route guard decision logic
//!
//! Pure function from (route access level, session state) to a guard
//! decision. The UI layer performs the actual navigation; keeping the
//! decision here makes the redirect rules testable without a renderer.
//!
//! The guard never evaluates against pre-rehydration state: while the
//! session coordinator is still booting, the decision is [`GuardDecision::Wait`],
//! a one-shot readiness barrier per app load.

use crate::session::{BootPhase, SessionState};

/// Authentication requirement of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders for everyone
    Public,
    /// Requires an authenticated session
    Protected,
    /// Renders only for guests (login/signup)
    PublicOnly,
}

/// Outcome of evaluating a route against the current session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested content
    Render,
    /// Session state not yet rehydrated; hold rendering
    Wait,
    /// Protected route requested while unauthenticated
    RedirectToLogin,
    /// Public-only route requested while authenticated
    RedirectHome,
}

/// Decide whether the requested route may render.
pub fn evaluate(access: RouteAccess, state: &SessionState) -> GuardDecision {
    if state.phase == BootPhase::Booting {
        return GuardDecision::Wait;
    }

    match (access, state.is_authenticated()) {
        (RouteAccess::Protected, false) => GuardDecision::RedirectToLogin,
        (RouteAccess::PublicOnly, true) => GuardDecision::RedirectHome,
        _ => GuardDecision::Render,
    }
}

//! Route guard for protected views.

use std::fmt;
use std::sync::Arc;

use super::store::SessionStore;

/// Unauthenticated landing page.
pub const ENTRY_ROUTE: &str = "/";

/// Client-side "navigate to path" capability supplied by the host router.
pub trait Navigator: Send + Sync {
    /// Start navigation to `path`. Fire-and-forget.
    fn navigate(&self, path: &str);
}

/// Check run by a protected view before it renders.
///
/// Without a navigator there is no client to redirect, so the guard lets the
/// view through untouched. With one, a missing session marker produces
/// exactly one navigation to [`ENTRY_ROUTE`].
#[derive(Clone)]
pub struct RouteGuard {
    session: SessionStore,
    navigator: Option<Arc<dyn Navigator>>,
}

impl RouteGuard {
    /// Create a guard over a session accessor and an optional navigator.
    #[must_use]
    pub fn new(session: SessionStore, navigator: Option<Arc<dyn Navigator>>) -> Self {
        Self { session, navigator }
    }

    /// The session accessor this guard consults.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Redirect to the entry route unless a vendor is signed in.
    ///
    /// Returns `false` only when a redirect was issued. Storage is re-read on
    /// every call.
    #[must_use]
    pub fn enforce_authenticated(&self) -> bool {
        let Some(navigator) = self.navigator.as_deref() else {
            return true;
        };

        if self.session.is_authenticated() {
            return true;
        }

        tracing::debug!(to = ENTRY_ROUTE, "no session marker, redirecting");
        navigator.navigate(ENTRY_ROUTE);
        false
    }
}

impl fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteGuard")
            .field("session", &self.session)
            .field("has_navigator", &self.navigator.is_some())
            .finish()
    }
}

/// Guard outcome for one protected view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Mounted, not yet checked.
    #[default]
    Unchecked,
    /// Session present at check time; the view renders.
    Allowed,
    /// Session absent at check time; navigation to the entry route issued.
    Redirecting,
}

impl GuardState {
    /// Whether the view may render its content.
    #[must_use]
    pub const fn can_render(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Whether the check has run.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Unchecked)
    }
}

/// One mounted protected view.
///
/// The check runs on the first [`mount`](Self::mount) only. Both outcomes are
/// final for the instance: a sign-in after a redirect does not unlock it, and
/// a sign-out after it was allowed does not lock it. A new instance is needed
/// to check again.
#[derive(Debug, Default)]
pub struct ProtectedView {
    state: GuardState,
}

impl ProtectedView {
    /// Create an unchecked view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GuardState::Unchecked,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> GuardState {
        self.state
    }

    /// Run the guard if this view has not been checked yet.
    pub fn mount(&mut self, guard: &RouteGuard) -> GuardState {
        if self.state == GuardState::Unchecked {
            self.state = if guard.enforce_authenticated() {
                GuardState::Allowed
            } else {
                GuardState::Redirecting
            };
        }
        self.state
    }
}

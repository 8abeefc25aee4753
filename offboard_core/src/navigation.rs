//! Current-route holder with a single fixed-delay redirect.
//!
//! The only timed behaviour in the application is "show the success state,
//! then go back to the directory". A [`Redirect`] is scheduled once and fires
//! when enough time has been fed to [`Navigator::advance`]; it cannot be
//! cancelled and is never retried.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::router::Route;

/// A navigation scheduled to happen after a delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

impl Redirect {
    pub fn new(to: Route, after: Duration) -> Self {
        Redirect { to, after }
    }
}

#[derive(Debug, Clone)]
struct Pending {
    redirect: Redirect,
    elapsed: Duration,
}

/// Tracks the mounted route and the pending redirect, if any.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    pending: Option<Pending>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Navigator {
            current: start,
            pending: None,
        }
    }

    /// The currently mounted route
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate immediately.
    pub fn go(&mut self, route: Route) {
        tracing::debug!(from = %self.current, to = %route, "navigate");
        self.current = route;
    }

    /// Schedule a redirect. A redirect already pending is kept.
    pub fn schedule(&mut self, redirect: Redirect) {
        if self.pending.is_some() {
            tracing::debug!(to = %redirect.to, "redirect already pending, ignoring");
            return;
        }
        self.pending = Some(Pending {
            redirect,
            elapsed: Duration::ZERO,
        });
    }

    /// Whether a redirect is waiting to fire
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed elapsed time; returns the route navigated to if the redirect fired.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Route> {
        let pending = self.pending.as_mut()?;
        pending.elapsed += elapsed;
        if pending.elapsed < pending.redirect.after {
            return None;
        }
        let fired = self.pending.take()?.redirect.to;
        self.go(fired.clone());
        Some(fired)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(Route::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_fires_after_delay() {
        let mut nav = Navigator::new(Route::Review);
        nav.schedule(Redirect::new(Route::Directory, Duration::from_millis(2000)));

        assert_eq!(nav.advance(Duration::from_millis(1500)), None);
        assert_eq!(nav.current(), &Route::Review);

        assert_eq!(nav.advance(Duration::from_millis(500)), Some(Route::Directory));
        assert_eq!(nav.current(), &Route::Directory);
        assert!(!nav.has_pending());

        // Fires only once
        assert_eq!(nav.advance(Duration::from_secs(10)), None);
    }

    #[test]
    fn test_second_schedule_is_ignored() {
        let mut nav = Navigator::default();
        nav.schedule(Redirect::new(Route::ExitInterview, Duration::from_millis(10)));
        nav.schedule(Redirect::new(Route::NewOffboarding, Duration::ZERO));
        assert_eq!(nav.advance(Duration::from_millis(10)), Some(Route::ExitInterview));
    }

    #[test]
    fn test_advance_without_pending() {
        let mut nav = Navigator::default();
        assert_eq!(nav.advance(Duration::from_secs(1)), None);
    }
}

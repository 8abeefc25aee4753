//! Per-system access switches. Purely local state: toggling performs no
//! action and leaves no audit trail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{OffboardError, OffboardResult};

/// Systems listed on the Access & Security tab.
pub const SYSTEMS: [&str; 6] = ["Email", "Slack", "GitHub", "Jira", "VPN", "Payroll Portal"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAccessState {
    /// System name → revoked
    revoked: BTreeMap<String, bool>,
}

impl SystemAccessState {
    /// Every listed system starts active (not revoked).
    pub fn new<'a>(systems: impl IntoIterator<Item = &'a str>) -> Self {
        SystemAccessState {
            revoked: systems.into_iter().map(|s| (s.to_string(), false)).collect(),
        }
    }

    pub fn is_revoked(&self, system: &str) -> OffboardResult<bool> {
        self.revoked
            .get(system)
            .copied()
            .ok_or_else(|| OffboardError::not_found("systems", system))
    }

    /// Flip one system; returns the new revoked value.
    pub fn toggle(&mut self, system: &str) -> OffboardResult<bool> {
        let flag = self
            .revoked
            .get_mut(system)
            .ok_or_else(|| OffboardError::not_found("systems", system))?;
        *flag = !*flag;
        tracing::debug!(system, revoked = *flag, "access toggled");
        Ok(*flag)
    }

    pub fn systems(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.revoked.iter().map(|(s, r)| (s.as_str(), *r))
    }

    pub fn revoked_count(&self) -> usize {
        self.revoked.values().filter(|r| **r).count()
    }
}

impl Default for SystemAccessState {
    fn default() -> Self {
        SystemAccessState::new(SYSTEMS)
    }
}

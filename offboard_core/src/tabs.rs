//! Generic tabbed container.
//!
//! One `TabSet` serves every tabbed view: it holds the named panels, the
//! selected key, and reports a [`TabChange`] when the selection actually moves
//! so the caller can react (load, reset, log).

use serde::{Deserialize, Serialize};

use crate::errors::{OffboardError, OffboardResult};

/// A selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange<K> {
    pub from: K,
    pub to: K,
}

/// An ordered set of labelled panels with exactly one selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSet<K> {
    panels: Vec<(K, String)>,
    selected: usize,
}

impl<K: Copy + PartialEq + std::fmt::Debug> TabSet<K> {
    /// Build from `(key, label)` pairs; the first panel starts selected.
    ///
    /// # Example
    /// ```
    /// use offboard_core::tabs::TabSet;
    ///
    /// let mut tabs = TabSet::new([(1, "One"), (2, "Two")]).unwrap();
    /// assert_eq!(tabs.selected(), 1);
    /// let change = tabs.select(2).unwrap().unwrap();
    /// assert_eq!((change.from, change.to), (1, 2));
    /// ```
    pub fn new<L: Into<String>>(panels: impl IntoIterator<Item = (K, L)>) -> OffboardResult<Self> {
        let panels: Vec<(K, String)> = panels.into_iter().map(|(k, l)| (k, l.into())).collect();
        if panels.is_empty() {
            return Err(OffboardError::invalid_input("panels", "[]", "A tab set needs at least one panel"));
        }
        for (i, (key, _)) in panels.iter().enumerate() {
            if panels[..i].iter().any(|(k, _)| k == key) {
                return Err(OffboardError::duplicate("tabs", format!("{key:?}")));
            }
        }
        Ok(TabSet { panels, selected: 0 })
    }

    /// Currently selected key
    pub fn selected(&self) -> K {
        self.panels[self.selected].0
    }

    /// Label of the selected panel
    pub fn selected_label(&self) -> &str {
        &self.panels[self.selected].1
    }

    /// Keys and labels in order
    pub fn panels(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.panels.iter().map(|(k, l)| (*k, l.as_str()))
    }

    /// Select a panel. Returns `Some(change)` if the selection moved.
    pub fn select(&mut self, key: K) -> OffboardResult<Option<TabChange<K>>> {
        let index = self
            .panels
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or_else(|| OffboardError::not_found("tabs", format!("{key:?}")))?;
        Ok(self.move_to(index))
    }

    /// Select a panel by its label, ignoring case.
    pub fn select_label(&mut self, label: &str) -> OffboardResult<Option<TabChange<K>>> {
        let index = self
            .panels
            .iter()
            .position(|(_, l)| l.eq_ignore_ascii_case(label))
            .ok_or_else(|| OffboardError::not_found("tabs", label))?;
        Ok(self.move_to(index))
    }

    /// Cycle forward, wrapping around.
    pub fn next(&mut self) -> Option<TabChange<K>> {
        let index = (self.selected + 1) % self.panels.len();
        self.move_to(index)
    }

    /// Cycle backward, wrapping around.
    pub fn previous(&mut self) -> Option<TabChange<K>> {
        let index = (self.selected + self.panels.len() - 1) % self.panels.len();
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> Option<TabChange<K>> {
        if index == self.selected {
            return None;
        }
        let from = self.selected();
        self.selected = index;
        Some(TabChange {
            from,
            to: self.selected(),
        })
    }
}

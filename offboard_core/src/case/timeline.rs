//! Read-only case timeline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Completed,
    InProgress,
}

impl EventStatus {
    /// Indicator colour for the timeline dot
    pub fn dot_color(&self) -> &'static str {
        match self {
            EventStatus::Completed => "green",
            EventStatus::InProgress => "blue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventStatus::Completed => "Completed",
            EventStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub timestamp: NaiveDateTime,
    pub status: EventStatus,
}

impl TimelineEvent {
    pub fn dot_color(&self) -> &'static str {
        self.status.dot_color()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimelineFilter {
    #[default]
    AllEvents,
    CompletedOnly,
    InProgressOnly,
}

impl TimelineFilter {
    pub const ALL: [TimelineFilter; 3] = [
        TimelineFilter::AllEvents,
        TimelineFilter::CompletedOnly,
        TimelineFilter::InProgressOnly,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TimelineFilter::AllEvents => "All Events",
            TimelineFilter::CompletedOnly => "Completed Only",
            TimelineFilter::InProgressOnly => "In Progress Only",
        }
    }

    pub fn matches(&self, event: &TimelineEvent) -> bool {
        match self {
            TimelineFilter::AllEvents => true,
            TimelineFilter::CompletedOnly => event.status == EventStatus::Completed,
            TimelineFilter::InProgressOnly => event.status == EventStatus::InProgress,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
    pub filter: TimelineFilter,
}

impl Timeline {
    pub fn new(events: Vec<TimelineEvent>) -> Self {
        Timeline {
            events,
            filter: TimelineFilter::default(),
        }
    }

    pub fn all(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn visible(&self) -> Vec<&TimelineEvent> {
        self.events.iter().filter(|e| self.filter.matches(e)).collect()
    }
}

pub(crate) fn seed_events(start: NaiveDateTime) -> Vec<TimelineEvent> {
    let event = |id: &str, title: &str, days: i64, status| TimelineEvent {
        id: id.to_string(),
        title: title.to_string(),
        timestamp: start + chrono::Duration::days(days),
        status,
    };
    vec![
        event("EVT-1", "Resignation submitted", 0, EventStatus::Completed),
        event("EVT-2", "Manager approval received", 1, EventStatus::Completed),
        event("EVT-3", "Offboarding case opened", 2, EventStatus::Completed),
        event("EVT-4", "Knowledge transfer in progress", 9, EventStatus::InProgress),
        event("EVT-5", "Asset collection scheduled", 12, EventStatus::InProgress),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timeline() -> Timeline {
        let start = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        Timeline::new(seed_events(start))
    }

    #[test]
    fn test_filters() {
        let mut timeline = timeline();
        assert_eq!(timeline.visible().len(), 5);

        timeline.filter = TimelineFilter::CompletedOnly;
        let visible = timeline.visible();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|e| e.dot_color() == "green"));

        timeline.filter = TimelineFilter::InProgressOnly;
        let visible = timeline.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.dot_color() == "blue"));
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = TimelineFilter::ALL.iter().map(|f| f.display_name()).collect();
        assert_eq!(labels, ["All Events", "Completed Only", "In Progress Only"]);
    }
}

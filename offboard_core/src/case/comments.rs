//! Case comment thread. Insertion order is display order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::employee::initials_of;
use crate::errors::{OffboardError, OffboardResult};
use crate::ids::IdGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseComment {
    pub id: String,
    pub author: String,
    pub role: String,
    pub timestamp: NaiveDateTime,
    pub text: String,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    comments: Vec<CaseComment>,
    author: String,
    role: String,
    ids: IdGenerator,
}

impl CommentThread {
    /// New thread; comments added later are stamped with `author` and `role`.
    pub fn new(comments: Vec<CaseComment>, author: impl Into<String>, role: impl Into<String>) -> Self {
        let ids = IdGenerator::after("CMT", comments.iter().map(|c| c.id.as_str()));
        CommentThread {
            comments,
            author: author.into(),
            role: role.into(),
            ids,
        }
    }

    pub fn all(&self) -> &[CaseComment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Append a comment from the current user.
    pub fn add(&mut self, text: &str, at: NaiveDateTime) -> OffboardResult<&CaseComment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(OffboardError::missing_field("comment"));
        }
        let comment = CaseComment {
            id: self.ids.next_id(),
            author: self.author.clone(),
            role: self.role.clone(),
            timestamp: at,
            text: text.to_string(),
            initials: initials_of(&self.author),
        };
        tracing::debug!(comment = %comment.id, "comment added");
        self.comments.push(comment);
        Ok(&self.comments[self.comments.len() - 1])
    }

    /// Remove one comment by id, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> OffboardResult<CaseComment> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| OffboardError::not_found("comments", id))?;
        tracing::debug!(comment = %id, "comment deleted");
        Ok(self.comments.remove(index))
    }
}

pub(crate) fn seed_comments(base: NaiveDateTime) -> Vec<CaseComment> {
    let comment = |id: &str, author: &str, role: &str, hours: i64, text: &str| CaseComment {
        id: id.to_string(),
        author: author.to_string(),
        role: role.to_string(),
        timestamp: base + chrono::Duration::hours(hours),
        text: text.to_string(),
        initials: initials_of(author),
    };
    vec![
        comment("CMT-1", "Olivia Martinez", "HR Specialist", 0,
            "Resignation letter received and acknowledged."),
        comment("CMT-2", "David Chen", "Engineering Manager", 26,
            "Knowledge transfer plan drafted; sessions start next week."),
        comment("CMT-3", "IT Helpdesk", "IT Support", 50,
            "Laptop return scheduled for the last working day."),
    ]
}

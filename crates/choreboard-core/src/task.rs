//! Task input model for the household calendar.
//!
//! Tasks arrive from the calendar subsystem as a day-keyed collection for the
//! displayed month. This module defines the task record, the closed set of
//! household members a task can be assigned to, and the `TasksByDay` shape
//! the statistics engine consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label substituted when a task has no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Household member a task is assigned to.
///
/// The set is closed: every task carries exactly one of these three tags.
/// Fixed order (ParentA, ParentB, Both) is used wherever members are
/// enumerated, e.g. the bar-chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Member {
    ParentA,
    ParentB,
    Both,
}

impl Member {
    /// All members in fixed display order.
    pub const ALL: [Member; 3] = [Member::ParentA, Member::ParentB, Member::Both];

    /// Resolve a raw owner tag as produced by the calendar subsystem.
    ///
    /// Returns `None` for anything outside the closed set; the statistics
    /// engine turns that into a hard error rather than dropping the task.
    pub fn from_tag(tag: &str) -> Option<Member> {
        match tag {
            "parentA" => Some(Member::ParentA),
            "parentB" => Some(Member::ParentB),
            "both" => Some(Member::Both),
            _ => None,
        }
    }

    /// The wire tag for this member.
    pub fn tag(&self) -> &'static str {
        match self {
            Member::ParentA => "parentA",
            Member::ParentB => "parentB",
            Member::Both => "both",
        }
    }

    /// Default display label.
    pub fn label(&self) -> &'static str {
        match self {
            Member::ParentA => "Parent A",
            Member::ParentB => "Parent B",
            Member::Both => "Both",
        }
    }
}

/// One actionable item on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, stable across recomputations. Produced upstream.
    pub id: String,
    /// Display label.
    pub text: String,
    /// Optional free-text annotation.
    #[serde(default)]
    pub notes: Option<String>,
    /// Raw owner tag, resolved against the closed member set by the engine.
    pub member: String,
    /// Optional category label; `None` and `""` count as uncategorized.
    #[serde(default)]
    pub category: Option<String>,
    pub completed: bool,
    /// Star rating, meaningful only when completed. Out-of-range values are
    /// tolerated and treated as absent for display.
    #[serde(default)]
    pub rating: Option<i32>,
}

impl Task {
    /// Category label with the sentinel substituted for absent/empty values.
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Number of rating stars to display, if the rating is present and in
    /// the 1..=5 range.
    pub fn rating_stars(&self) -> Option<u32> {
        self.rating
            .filter(|r| (1..=5).contains(r))
            .map(|r| r as u32)
    }
}

/// Day-of-month to ordered task list for the displayed month.
///
/// The ordered map pins the canonical flattening order: days ascending,
/// insertion order preserved within a day. There is no finer-grained
/// timestamp on tasks.
pub type TasksByDay = BTreeMap<u32, Vec<Task>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn task(category: Option<&str>, rating: Option<i32>) -> Task {
        Task {
            id: "t-1".to_string(),
            text: "Water the plants".to_string(),
            notes: None,
            member: "parentA".to_string(),
            category: category.map(String::from),
            completed: true,
            rating,
        }
    }

    #[test]
    fn member_tag_round_trip() {
        for member in Member::ALL {
            assert_eq!(Member::from_tag(member.tag()), Some(member));
        }
        assert_eq!(Member::from_tag("uncle"), None);
        assert_eq!(Member::from_tag(""), None);
        // Tags are case-sensitive wire values.
        assert_eq!(Member::from_tag("ParentA"), None);
    }

    #[test]
    fn category_label_substitutes_sentinel() {
        assert_eq!(task(Some("Shopping"), None).category_label(), "Shopping");
        assert_eq!(task(None, None).category_label(), UNCATEGORIZED);
        assert_eq!(task(Some(""), None).category_label(), UNCATEGORIZED);
    }

    #[test]
    fn rating_stars_only_for_valid_range() {
        assert_eq!(task(None, Some(3)).rating_stars(), Some(3));
        assert_eq!(task(None, Some(5)).rating_stars(), Some(5));
        assert_eq!(task(None, Some(0)).rating_stars(), None);
        assert_eq!(task(None, Some(9)).rating_stars(), None);
        assert_eq!(task(None, Some(-2)).rating_stars(), None);
        assert_eq!(task(None, None).rating_stars(), None);
    }

    #[test]
    fn task_deserializes_with_optional_fields_absent() {
        let json = r#"{"id":"a","text":"Dishes","member":"both","completed":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.member, "both");
        assert_eq!(task.notes, None);
        assert_eq!(task.category, None);
        assert_eq!(task.rating, None);
    }
}

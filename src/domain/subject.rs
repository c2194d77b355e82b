//! Subject records and difficulty levels.

use serde::{Deserialize, Serialize};

use crate::id::generate_subject_id;

/// Topic substituted when a subject has no explicit topics but carries a
/// syllabus attachment.
pub const SYLLABUS_TOPIC: &str = "Syllabus review";

/// How demanding a subject is.
///
/// Difficulty drives both the time-weight multiplier and the base duration
/// of each generated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Weight multiplier used by the allocator (heuristic, not a hard cap).
    pub fn weight_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Base duration in minutes for a single task of this difficulty.
    pub fn base_minutes(&self) -> u32 {
        match self {
            Difficulty::Easy => 25,
            Difficulty::Medium => 35,
            Difficulty::Hard => 45,
        }
    }
}

/// A subject the user wants to study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier ("sub-{timestamp}-{hex}")
    pub id: String,

    /// User-supplied display name
    pub name: String,

    /// Ordered topics; may be empty when a syllabus attachment substitutes
    pub topics: Vec<String>,

    pub difficulty: Difficulty,

    /// Display-only, never consulted by the scheduler
    pub color: Option<String>,

    /// Reference to an attached syllabus, substituted as a single synthetic
    /// topic when `topics` is empty
    pub syllabus: Option<String>,
}

impl Subject {
    /// Create a subject with explicit topics.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, topics: Vec<String>) -> Self {
        Self {
            id: generate_subject_id(),
            name: name.into(),
            topics,
            difficulty,
            color: None,
            syllabus: None,
        }
    }

    /// Attach a syllabus reference.
    pub fn with_syllabus(mut self, syllabus: impl Into<String>) -> Self {
        self.syllabus = Some(syllabus.into());
        self
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The topics the allocator schedules against.
    ///
    /// Explicit topics win; an empty topic list with a syllabus attachment
    /// yields a single synthetic topic. A subject with neither is excluded
    /// from generation entirely.
    pub fn effective_topics(&self) -> Vec<String> {
        if !self.topics.is_empty() {
            self.topics.clone()
        } else if self.syllabus.is_some() {
            vec![SYLLABUS_TOPIC.to_string()]
        } else {
            Vec::new()
        }
    }

    /// Allocation weight: `max(1, topics) * difficulty multiplier`.
    ///
    /// Informational only; see the allocator for how weights are (and are
    /// not) used.
    pub fn weight(&self) -> f64 {
        let topic_count = self.effective_topics().len().max(1);
        topic_count as f64 * self.difficulty.weight_multiplier()
    }
}

//! Core types for the activities service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activities keyed by their exact, case-sensitive name
pub type ActivityMap = BTreeMap<String, Activity>;

/// A named extracurricular offering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity; informational only, signups are not checked against it
    pub max_participants: u32,
    /// Student emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

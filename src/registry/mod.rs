//! Activity registry
//!
//! The registry owns every activity and its participant list for the
//! lifetime of the process. Nothing is persisted; a restart brings back
//! the seeded set.

use tokio::sync::RwLock;

use crate::types::{Activity, ActivityMap};
use crate::{Error, Result};

pub mod seed;

pub use seed::initial_activities;

/// In-memory store of activities, shared by all request handlers
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    /// Write lock covers each check-then-mutate sequence
    activities: RwLock<ActivityMap>,
}

impl ActivityRegistry {
    /// Create a registry holding the given activities
    pub fn from_activities(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Create a registry holding the startup activities
    pub fn seeded() -> Self {
        Self::from_activities(initial_activities())
    }

    /// Snapshot of every activity, including current participants
    pub async fn list(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    /// Snapshot of a single activity
    pub async fn get(&self, name: &str) -> Result<Activity> {
        self.activities
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(Error::ActivityNotFound)
    }

    /// Number of activities
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// True when no activities are registered
    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Append `email` to the activity's participants.
    ///
    /// `max_participants` is not enforced.
    pub async fn signup(&self, name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(Error::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(Error::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = %name,
            email = %email,
            participants = activity.participants.len(),
            "Student signed up"
        );

        Ok(())
    }

    /// Remove `email` from the activity's participants, keeping the others in order.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(Error::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(Error::NotSignedUp)?;

        activity.participants.remove(position);
        tracing::info!(
            activity = %name,
            email = %email,
            participants = activity.participants.len(),
            "Student unregistered"
        );

        Ok(())
    }
}

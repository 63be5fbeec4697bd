use thiserror::Error;
use tracing::warn;

use crate::models::{seed_activities, Activity, ActivityRoster, ParticipantRow};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    Full,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// In-memory activities keyed by name. The set of activities is fixed at
/// construction; only participant lists change.
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
}

impl ActivityRegistry {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn get_all(&self) -> ActivityRoster {
        ActivityRoster(self.activities.clone())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity, ActivityError> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(ActivityError::NotFound)
    }

    /// Appends `email` to the activity's participants. Checks existence,
    /// then membership, then capacity.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), ActivityError> {
        let activity = self.get_mut(name)?;
        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(ActivityError::Full);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` and returns the position it held, so the removal
    /// can be undone without reordering the roster.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<usize, ActivityError> {
        let activity = self.get_mut(name)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ActivityError::NotSignedUp)?;
        activity.participants.remove(position);
        Ok(position)
    }

    /// Inverse of a successful [`signup`](Self::signup).
    pub fn undo_signup(&mut self, name: &str, email: &str) {
        if let Ok(activity) = self.get_mut(name) {
            if let Some(position) = activity.participants.iter().rposition(|p| p == email) {
                activity.participants.remove(position);
            }
        }
    }

    /// Inverse of a successful [`unregister`](Self::unregister).
    pub fn undo_unregister(&mut self, name: &str, email: &str, position: usize) {
        if let Ok(activity) = self.get_mut(name) {
            let position = position.min(activity.participants.len());
            activity.participants.insert(position, email.to_string());
        }
    }

    /// Adds a participant read back from the record file. Rows naming an
    /// unknown activity, repeating a participant, or overflowing capacity
    /// are dropped.
    pub fn restore(&mut self, row: ParticipantRow) -> bool {
        match self.signup(&row.activity, &row.email) {
            Ok(()) => true,
            Err(ActivityError::AlreadySignedUp) => false,
            Err(e) => {
                warn!(activity = %row.activity, email = %row.email, reason = %e, "skipping persisted participant");
                false
            }
        }
    }

    /// All participants as `activity,email` rows, activities in registry
    /// order and participants in signup order.
    pub fn participant_rows(&self) -> Vec<ParticipantRow> {
        self.activities
            .iter()
            .flat_map(|a| {
                a.participants.iter().map(|email| ParticipantRow {
                    activity: a.name.clone(),
                    email: email.clone(),
                })
            })
            .collect()
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::database::{RosterStore, SaveError};
use crate::models::{ActivityRoster, Student};
use crate::services::activity_registry::{ActivityError, ActivityRegistry};
use crate::services::student_registry::{StudentError, StudentRegistry};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error(transparent)]
    Student(#[from] StudentError),

    #[error("Failed to save persistence: {0}")]
    ParticipantsNotSaved(#[source] SaveError),

    #[error("Failed to save students: {0}")]
    StudentsNotSaved(#[source] SaveError),
}

struct Registries {
    activities: ActivityRegistry,
    students: StudentRegistry,
}

/// Owns both registries and keeps them in step with the record files.
///
/// Every mutation runs under one lock: validate, apply in memory, rewrite
/// the affected file, and undo the in-memory change if the rewrite fails.
/// Callers only see success once the file write has succeeded.
pub struct RosterService {
    state: Mutex<Registries>,
    store: Arc<dyn RosterStore>,
}

impl RosterService {
    pub fn new(
        activities: ActivityRegistry,
        students: StudentRegistry,
        store: Arc<dyn RosterStore>,
    ) -> Self {
        Self {
            state: Mutex::new(Registries {
                activities,
                students,
            }),
            store,
        }
    }

    /// Builds the service and merges whatever the store holds into
    /// `activities` and an empty student registry.
    pub async fn open(mut activities: ActivityRegistry, store: Arc<dyn RosterStore>) -> Self {
        let rows = store.load_participants().await;
        let row_count = rows.len();
        let restored = rows
            .into_iter()
            .filter(|row| activities.restore(row.clone()))
            .count();

        let mut students = StudentRegistry::new();
        for student in store.load_students().await {
            students.restore(student);
        }

        info!(
            participant_rows = row_count,
            participants_restored = restored,
            students = students.len(),
            "roster loaded"
        );
        Self::new(activities, students, store)
    }

    pub async fn activities(&self) -> ActivityRoster {
        self.state.lock().await.activities.get_all()
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let mut state = self.state.lock().await;
        state.activities.signup(activity, email)?;

        let rows = state.activities.participant_rows();
        if let Err(e) = self.store.save_participants(&rows).await {
            warn!(activity, email, error = %e, "signup not persisted, rolling back");
            state.activities.undo_signup(activity, email);
            return Err(RosterError::ParticipantsNotSaved(e));
        }

        info!(activity, email, "signed up");
        Ok(())
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let mut state = self.state.lock().await;
        let position = state.activities.unregister(activity, email)?;

        let rows = state.activities.participant_rows();
        if let Err(e) = self.store.save_participants(&rows).await {
            warn!(activity, email, error = %e, "unregister not persisted, rolling back");
            state.activities.undo_unregister(activity, email, position);
            return Err(RosterError::ParticipantsNotSaved(e));
        }

        info!(activity, email, "unregistered");
        Ok(())
    }

    pub async fn register_student(&self, student: Student) -> Result<(), RosterError> {
        let mut state = self.state.lock().await;
        let student_id = student.student_id.clone();
        state.students.register(student)?;

        if let Err(e) = self.store.save_students(state.students.students()).await {
            warn!(student_id = %student_id, error = %e, "registration not persisted, rolling back");
            state.students.remove(&student_id);
            return Err(RosterError::StudentsNotSaved(e));
        }

        info!(student_id = %student_id, "student registered");
        Ok(())
    }

    pub async fn student(&self, student_id: &str) -> Result<Student, RosterError> {
        let state = self.state.lock().await;
        Ok(state.students.get(student_id)?.clone())
    }

    pub async fn students_sorted_by_name(&self) -> Vec<Student> {
        self.state.lock().await.students.list_sorted_by_name()
    }

    pub async fn available_seats(&self) -> usize {
        self.state.lock().await.students.available_seats()
    }
}

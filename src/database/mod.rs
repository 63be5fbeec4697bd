use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ParticipantRow, Student};

pub mod csv_file;
pub mod participants_repo;
pub mod students_repo;

/// A failed rewrite of one of the record files.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Durable copy of the participant and student record sets.
///
/// Loading is best-effort and never fails; saving rewrites the whole record
/// set and reports any failure so the caller can undo its in-memory change.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn load_participants(&self) -> Vec<ParticipantRow>;

    async fn save_participants(&self, rows: &[ParticipantRow]) -> Result<(), SaveError>;

    async fn load_students(&self) -> Vec<Student>;

    async fn save_students(&self, students: &[Student]) -> Result<(), SaveError>;
}

#[derive(Debug, Clone)]
pub struct CsvRosterStore {
    participants_path: PathBuf,
    students_path: PathBuf,
}

impl CsvRosterStore {
    pub fn new(participants_path: impl Into<PathBuf>, students_path: impl Into<PathBuf>) -> Self {
        Self {
            participants_path: participants_path.into(),
            students_path: students_path.into(),
        }
    }

    pub fn participants_path(&self) -> &Path {
        &self.participants_path
    }

    pub fn students_path(&self) -> &Path {
        &self.students_path
    }
}

#[async_trait]
impl RosterStore for CsvRosterStore {
    async fn load_participants(&self) -> Vec<ParticipantRow> {
        participants_repo::load_participants(&self.participants_path).await
    }

    async fn save_participants(&self, rows: &[ParticipantRow]) -> Result<(), SaveError> {
        participants_repo::save_participants(&self.participants_path, rows).await
    }

    async fn load_students(&self) -> Vec<Student> {
        students_repo::load_students(&self.students_path).await
    }

    async fn save_students(&self, students: &[Student]) -> Result<(), SaveError> {
        students_repo::save_students(&self.students_path, students).await
    }
}

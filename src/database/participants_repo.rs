use std::path::Path;

use super::{csv_file, SaveError};
use crate::models::ParticipantRow;

pub async fn load_participants(path: &Path) -> Vec<ParticipantRow> {
    csv_file::read_rows(path, 2)
        .await
        .into_iter()
        .map(|mut fields| ParticipantRow {
            activity: std::mem::take(&mut fields[0]),
            email: std::mem::take(&mut fields[1]),
        })
        .collect()
}

pub async fn save_participants(path: &Path, rows: &[ParticipantRow]) -> Result<(), SaveError> {
    csv_file::write_rows(
        path,
        rows.iter().map(|r| [r.activity.as_str(), r.email.as_str()]),
    )
    .await
}

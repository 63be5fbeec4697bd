use std::path::Path;

use super::{csv_file, SaveError};
use crate::models::Student;

pub async fn load_students(path: &Path) -> Vec<Student> {
    csv_file::read_rows(path, 3)
        .await
        .into_iter()
        .map(|fields| Student::new(&fields[0], &fields[1], &fields[2]))
        .collect()
}

pub async fn save_students(path: &Path, students: &[Student]) -> Result<(), SaveError> {
    csv_file::write_rows(
        path,
        students
            .iter()
            .map(|s| [s.student_id.as_str(), s.name.as_str(), s.email.as_str()]),
    )
    .await
}

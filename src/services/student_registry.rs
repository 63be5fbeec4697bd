use thiserror::Error;
use tracing::warn;

use crate::models::Student;

pub const STUDENT_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    #[error("Student registry is full")]
    RegistryFull,

    #[error("Student ID already registered")]
    DuplicateId,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Student not found")]
    NotFound,
}

/// Registered students in registration order.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: Vec<Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Capacity is checked before the id, and the id before the email.
    pub fn register(&mut self, student: Student) -> Result<(), StudentError> {
        if self.students.len() >= STUDENT_CAPACITY {
            return Err(StudentError::RegistryFull);
        }
        if self
            .students
            .iter()
            .any(|s| s.student_id == student.student_id)
        {
            return Err(StudentError::DuplicateId);
        }
        if self.students.iter().any(|s| s.email == student.email) {
            return Err(StudentError::DuplicateEmail);
        }
        self.students.push(student);
        Ok(())
    }

    pub fn get(&self, student_id: &str) -> Result<&Student, StudentError> {
        self.students
            .iter()
            .find(|s| s.student_id == student_id)
            .ok_or(StudentError::NotFound)
    }

    /// Students ordered by name (byte-wise, case-sensitive); equal names
    /// keep registration order.
    pub fn list_sorted_by_name(&self) -> Vec<Student> {
        let mut roster = self.students.clone();
        roster.sort_by(|a, b| a.name.cmp(&b.name));
        roster
    }

    pub fn available_seats(&self) -> usize {
        STUDENT_CAPACITY.saturating_sub(self.students.len())
    }

    /// Drops a student. Only used to undo a registration that could not
    /// be persisted.
    pub fn remove(&mut self, student_id: &str) -> Option<Student> {
        let position = self
            .students
            .iter()
            .position(|s| s.student_id == student_id)?;
        Some(self.students.remove(position))
    }

    /// Adds a student read back from the record file. A repeated id
    /// replaces the earlier record in place; rows past capacity or reusing
    /// another student's email are dropped.
    pub fn restore(&mut self, student: Student) -> bool {
        if self
            .students
            .iter()
            .any(|s| s.email == student.email && s.student_id != student.student_id)
        {
            warn!(student_id = %student.student_id, email = %student.email, "skipping persisted student: email already registered");
            return false;
        }
        if let Some(existing) = self
            .students
            .iter_mut()
            .find(|s| s.student_id == student.student_id)
        {
            *existing = student;
            return true;
        }
        if self.students.len() >= STUDENT_CAPACITY {
            warn!(student_id = %student.student_id, "skipping persisted student: registry is full");
            return false;
        }
        self.students.push(student);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> Student {
        Student::new(id, name, &format!("{id}@mergington.edu"))
    }

    fn names(roster: &[Student]) -> Vec<&str> {
        roster.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut reg = StudentRegistry::new();
        reg.register(student("1", "Bob")).unwrap();
        reg.register(student("2", "Alice")).unwrap();
        reg.register(student("3", "Amy")).unwrap();

        assert_eq!(names(&reg.list_sorted_by_name()), vec!["Alice", "Amy", "Bob"]);
    }

    #[test]
    fn equal_names_keep_registration_order() {
        let mut reg = StudentRegistry::new();
        reg.register(student("z", "Sam")).unwrap();
        reg.register(student("a", "Alex")).unwrap();
        reg.register(student("m", "Sam")).unwrap();

        let ids: Vec<String> = reg
            .list_sorted_by_name()
            .into_iter()
            .map(|s| s.student_id)
            .collect();
        assert_eq!(ids, vec!["a", "z", "m"]);
    }

    #[test]
    fn name_order_is_case_sensitive() {
        let mut reg = StudentRegistry::new();
        reg.register(student("1", "alice")).unwrap();
        reg.register(student("2", "Bob")).unwrap();

        assert_eq!(names(&reg.list_sorted_by_name()), vec!["Bob", "alice"]);
    }

    #[test]
    fn duplicate_id_and_email_are_rejected() {
        let mut reg = StudentRegistry::new();
        reg.register(Student::new("1", "Ann", "ann@x.edu")).unwrap();

        assert_eq!(
            reg.register(Student::new("1", "Other", "other@x.edu")),
            Err(StudentError::DuplicateId)
        );
        assert_eq!(
            reg.register(Student::new("2", "Ann Two", "ann@x.edu")),
            Err(StudentError::DuplicateEmail)
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn seats_count_down_and_full_registry_reports_first() {
        let mut reg = StudentRegistry::new();
        for i in 0..10 {
            reg.register(student(&i.to_string(), "Kid")).unwrap();
        }
        assert_eq!(reg.available_seats(), STUDENT_CAPACITY - 10);

        for i in 10..STUDENT_CAPACITY {
            reg.register(student(&i.to_string(), "Kid")).unwrap();
        }
        assert_eq!(reg.available_seats(), 0);

        // Duplicate id as well, but capacity wins.
        assert_eq!(
            reg.register(student("0", "Kid")),
            Err(StudentError::RegistryFull)
        );
    }

    #[test]
    fn get_unknown_student() {
        let reg = StudentRegistry::new();
        assert_eq!(reg.get("nobody"), Err(StudentError::NotFound));
    }

    #[test]
    fn restore_replaces_repeated_id_in_place() {
        let mut reg = StudentRegistry::new();
        reg.restore(Student::new("1", "Old", "old@x.edu"));
        reg.restore(Student::new("2", "Other", "o@x.edu"));
        reg.restore(Student::new("1", "New", "new@x.edu"));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.students()[0].name, "New");
    }

    #[test]
    fn restore_skips_reused_email() {
        let mut reg = StudentRegistry::new();
        assert!(reg.restore(Student::new("s1", "Ann", "a@x.edu")));
        assert!(!reg.restore(Student::new("s2", "Bob", "a@x.edu")));
        assert!(reg.restore(Student::new("s3", "Cat", "c@x.edu")));
        // Repeated id taking over someone else's email.
        assert!(!reg.restore(Student::new("s3", "Cat", "a@x.edu")));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("s3").unwrap().email, "c@x.edu");
        assert_eq!(reg.get("s2"), Err(StudentError::NotFound));
    }

    #[test]
    fn restore_stops_at_capacity() {
        let mut reg = StudentRegistry::new();
        let restored = (0..=STUDENT_CAPACITY)
            .filter(|i| reg.restore(student(&i.to_string(), "Kid")))
            .count();

        assert_eq!(restored, STUDENT_CAPACITY);
        assert_eq!(reg.len(), STUDENT_CAPACITY);
        assert_eq!(reg.get("100"), Err(StudentError::NotFound));
    }

    #[test]
    fn remove_undoes_registration() {
        let mut reg = StudentRegistry::new();
        reg.register(student("1", "Ann")).unwrap();
        assert!(reg.remove("1").is_some());
        assert!(reg.is_empty());
        assert!(reg.remove("1").is_none());
    }
}

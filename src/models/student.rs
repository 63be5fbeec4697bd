use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(student_id: &str, name: &str, email: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

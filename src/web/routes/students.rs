use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::Student;
use crate::services::roster_service::{RosterError, RosterService};

#[derive(Debug, Deserialize)]
pub struct RegisterStudentQuery {
    pub student_id: String,
    pub name: String,
    pub email: String,
}

pub async fn register_student_handler(
    State(service): State<Arc<RosterService>>,
    Query(query): Query<RegisterStudentQuery>,
) -> Result<Json<Value>, RosterError> {
    let message = format!("Registered student {}", query.student_id);
    service
        .register_student(Student {
            student_id: query.student_id,
            name: query.name,
            email: query.email,
        })
        .await?;
    Ok(Json(serde_json::json!({ "message": message })))
}

pub async fn get_student_handler(
    State(service): State<Arc<RosterService>>,
    Path(student_id): Path<String>,
) -> Result<Json<Student>, RosterError> {
    service.student(&student_id).await.map(Json)
}

pub async fn list_students_handler(
    State(service): State<Arc<RosterService>>,
) -> Json<Vec<Student>> {
    Json(service.students_sorted_by_name().await)
}

pub async fn available_seats_handler(State(service): State<Arc<RosterService>>) -> Json<Value> {
    Json(serde_json::json!({ "available_seats": service.available_seats().await }))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::ActivityRoster;
use crate::services::roster_service::{RosterError, RosterService};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(service): State<Arc<RosterService>>,
) -> Json<ActivityRoster> {
    Json(service.activities().await)
}

pub async fn signup_handler(
    State(service): State<Arc<RosterService>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Value>, RosterError> {
    service.signup(&activity_name, &query.email).await?;
    Ok(Json(serde_json::json!({
        "message": format!("Signed up {} for {}", query.email, activity_name)
    })))
}

pub async fn unregister_handler(
    State(service): State<Arc<RosterService>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Value>, RosterError> {
    service.unregister(&activity_name, &query.email).await?;
    Ok(Json(serde_json::json!({
        "message": format!("Unregistered {} from {}", query.email, activity_name)
    })))
}

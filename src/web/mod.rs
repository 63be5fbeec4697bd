use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::roster_service::RosterService;

pub mod error;
pub mod routes;

use routes::{activities, students};

/// Builds the full application: JSON API, root redirect and the static
/// front-end under `/static`.
pub fn app(service: Arc<RosterService>, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .route(
            "/students",
            get(students::list_students_handler).post(students::register_student_handler),
        )
        .route(
            "/students/available_seats",
            get(students::available_seats_handler),
        )
        .route("/students/:student_id", get(students::get_student_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .merge(api)
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(service)
}

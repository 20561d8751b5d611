use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::page;
use crate::service::{ServiceError, TaskService};

#[derive(Deserialize)]
pub struct AddForm {
    #[serde(default)]
    task_name: String,
}

pub fn router(service: TaskService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_task))
        .route("/complete/:task_id", post(complete_task))
        .route("/delete/:task_id", post(delete_task))
        .with_state(service)
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Store(err) => {
                tracing::error!("store error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

async fn index(State(service): State<TaskService>) -> Result<Html<String>, ServiceError> {
    let listing = service.list().await?;
    Ok(Html(page::render_index(&listing)))
}

async fn add_task(
    State(service): State<TaskService>,
    Form(form): Form<AddForm>,
) -> Result<Response, ServiceError> {
    service.add(&form.task_name).await?;
    Ok(redirect_home())
}

async fn complete_task(
    State(service): State<TaskService>,
    Path(task_id): Path<String>,
) -> Result<Response, ServiceError> {
    service.toggle(&task_id).await?;
    Ok(redirect_home())
}

async fn delete_task(
    State(service): State<TaskService>,
    Path(task_id): Path<String>,
) -> Result<Response, ServiceError> {
    service.delete(&task_id).await?;
    Ok(redirect_home())
}

fn redirect_home() -> Response {
    (StatusCode::SEE_OTHER, [(header::LOCATION, "/")]).into_response()
}

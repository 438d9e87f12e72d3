//! # API REST
//!
//! REST API implementation for the notes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `api-shared` for request/response types and `notes-core` for all data operations.

#![warn(rust_2018_idioms)]

mod error;

pub use error::ApiError;

use api_shared::{
    CreateNoteReq, DeleteNoteRes, ErrorRes, HealthRes, HealthService, NoteRes, SeedRes,
    UpdateNoteReq,
};
use axum::{
    extract::{rejection::JsonRejection, Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use notes_core::constants::MISSING_FIELDS_MESSAGE;
use notes_core::NoteService;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub note_service: NoteService,
    /// Run the seeder before every list request.
    pub seed_on_list: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_notes, create_note, update_note, delete_note, seed),
    components(schemas(
        HealthRes,
        NoteRes,
        CreateNoteReq,
        UpdateNoteReq,
        DeleteNoteRes,
        SeedRes,
        ErrorRes
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with CORS and Swagger UI attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", put(update_note).delete(delete_note))
        .route("/seed", get(seed))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Does not touch the database.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "All notes, newest first", body = [NoteRes]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all notes
///
/// Seeds an empty collection with the default notes first (unless disabled),
/// then returns every note ordered by creation time, newest first.
///
/// # Errors
/// Returns `500 Internal Server Error` if the database cannot be reached or read.
/// A failed seed is logged and does not fail the request on its own.
#[axum::debug_handler]
async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<NoteRes>>, ApiError> {
    if state.seed_on_list {
        if let Err(e) = state.note_service.seed_if_empty().await {
            tracing::warn!("Seeding before list failed, continuing: {}", e);
        }
    }

    match state.note_service.list_all().await {
        Ok(notes) => Ok(Json(notes.into_iter().map(NoteRes::from).collect())),
        Err(e) => Err(ApiError::from_note_error(
            e,
            "Error fetching notes",
            "Failed to fetch notes",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteReq,
    responses(
        (status = 201, description = "Note created", body = NoteRes),
        (status = 400, description = "Missing or invalid title/content", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a new note
///
/// # Errors
/// Returns `400 Bad Request` if the body is not JSON, if `title` or `content`
/// is missing or empty, or if the title is longer than 100 characters.
/// Returns `500 Internal Server Error` if the note cannot be stored.
#[axum::debug_handler]
async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteReq>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteRes>), ApiError> {
    let Json(req) = payload.map_err(ApiError::from_rejection)?;

    let Some((title, content)) = req.required_fields() else {
        tracing::warn!("Create note rejected: title or content missing");
        return Err(ApiError::bad_request(MISSING_FIELDS_MESSAGE));
    };

    match state.note_service.create(title, content).await {
        Ok(note) => Ok((StatusCode::CREATED, Json(NoteRes::from(note)))),
        Err(e) => Err(ApiError::from_note_error(
            e,
            "Error creating note",
            "Failed to create note",
        )),
    }
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    request_body = UpdateNoteReq,
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Note updated", body = NoteRes),
        (status = 400, description = "Invalid title/content", body = ErrorRes),
        (status = 404, description = "Note not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Update an existing note
///
/// Replaces whichever of `title` and `content` are present in the body and
/// refreshes `updatedAt`.
#[axum::debug_handler]
async fn update_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    payload: Result<Json<UpdateNoteReq>, JsonRejection>,
) -> Result<Json<NoteRes>, ApiError> {
    let Json(req) = payload.map_err(ApiError::from_rejection)?;

    match state.note_service.update(&id, req.into()).await {
        Ok(note) => Ok(Json(NoteRes::from(note))),
        Err(e) => Err(ApiError::from_note_error(
            e,
            "Error updating note",
            "Failed to update note",
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Note deleted", body = DeleteNoteRes),
        (status = 404, description = "Note not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Permanently delete a note
#[axum::debug_handler]
async fn delete_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<DeleteNoteRes>, ApiError> {
    match state.note_service.delete(&id).await {
        Ok(()) => Ok(Json(DeleteNoteRes {
            message: "Note deleted successfully".into(),
        })),
        Err(e) => Err(ApiError::from_note_error(
            e,
            "Error deleting note",
            "Failed to delete note",
        )),
    }
}

#[utoipa::path(
    get,
    path = "/seed",
    responses(
        (status = 200, description = "Seeding finished", body = SeedRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Seed the database with the default notes if it is empty
#[axum::debug_handler]
async fn seed(State(state): State<AppState>) -> Result<Json<SeedRes>, ApiError> {
    match state.note_service.seed_if_empty().await {
        Ok(_) => Ok(Json(SeedRes {
            success: true,
            message: "Database seeding process completed".into(),
        })),
        Err(e) => Err(ApiError::from_note_error(
            e,
            "Error in seed route",
            "Failed to seed database",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use http_body_util::BodyExt;
    use notes_core::{MemoryNoteStore, MongoNoteStore};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(seed_on_list: bool) -> Router {
        router(AppState {
            note_service: NoteService::new(Arc::new(MemoryNoteStore::new())),
            seed_on_list,
        })
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn create(app: &Router, title: &str, content: &str) -> Value {
        let (status, body) = send(
            app,
            json_request(
                Method::POST,
                "/notes",
                json!({ "title": title, "content": content }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_post_creates_note_with_generated_id_and_equal_timestamps() {
        let app = app(false);

        let body = create(&app, "A", "B").await;

        assert_eq!(body["title"], "A");
        assert_eq!(body["content"], "B");
        assert_eq!(body["id"].as_str().unwrap().len(), 24);
        assert_eq!(body["createdAt"], body["updatedAt"]);
    }

    #[tokio::test]
    async fn test_post_with_missing_fields_is_bad_request() {
        let app = app(false);

        let (status, body) =
            send(&app, json_request(Method::POST, "/notes", json!({ "title": "" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Title and content are required" }));
    }

    #[tokio::test]
    async fn test_post_with_whitespace_only_title_is_created() {
        let app = app(false);

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/notes", json!({ "title": " ", "content": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], " ");
        assert_eq!(body["content"], "x");
    }

    #[tokio::test]
    async fn test_post_with_long_title_is_bad_request() {
        let app = app(false);

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/notes",
                json!({ "title": "t".repeat(101), "content": "body" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Title cannot be more than 100 characters" })
        );
    }

    #[tokio::test]
    async fn test_post_with_malformed_body_is_bad_request() {
        let app = app(false);
        let req = Request::builder()
            .method(Method::POST)
            .uri("/notes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body" }));
    }

    #[tokio::test]
    async fn test_list_seeds_empty_collection_and_returns_newest_first() {
        let app = app(true);

        let (status, body) = send(&app, empty_request(Method::GET, "/notes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        create(&app, "Fresh", "Newest note").await;
        let (_, body) = send(&app, empty_request(Method::GET, "/notes")).await;
        let notes = body.as_array().unwrap();
        assert_eq!(notes.len(), 4);
        assert_eq!(notes[0]["title"], "Fresh");
    }

    #[tokio::test]
    async fn test_list_without_seeding_returns_empty_array() {
        let app = app(false);

        let (status, body) = send(&app, empty_request(Method::GET, "/notes")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_put_updates_note() {
        let app = app(false);
        let created = create(&app, "Old", "Old body").await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/notes/{id}"),
                json!({ "title": "New", "content": "New body" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], created["id"]);
        assert_eq!(body["title"], "New");
        assert_eq!(body["content"], "New body");
        assert_eq!(body["createdAt"], created["createdAt"]);
        assert_ne!(body["updatedAt"], created["updatedAt"]);
    }

    #[tokio::test]
    async fn test_put_unknown_id_is_not_found() {
        let app = app(false);

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                "/notes/unknown-id",
                json!({ "title": "x", "content": "y" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Note not found" }));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again_is_not_found() {
        let app = app(false);
        let created = create(&app, "Doomed", "Body").await;
        let uri = format!("/notes/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, empty_request(Method::DELETE, &uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Note deleted successfully" }));

        let (_, listed) = send(&app, empty_request(Method::GET, "/notes")).await;
        assert_eq!(listed, json!([]));

        let (status, _) = send(&app, empty_request(Method::DELETE, &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seed_route_is_idempotent() {
        let app = app(false);

        for _ in 0..2 {
            let (status, body) = send(&app, empty_request(Method::GET, "/seed")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body,
                json!({ "success": true, "message": "Database seeding process completed" })
            );
        }

        let (_, listed) = send(&app, empty_request(Method::GET, "/notes")).await;
        assert_eq!(listed.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_database_is_internal_error() {
        let app = router(AppState {
            note_service: NoteService::new(Arc::new(MongoNoteStore::new("not a mongodb uri"))),
            seed_on_list: true,
        });

        let (status, body) = send(&app, empty_request(Method::GET, "/notes")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch notes" }));

        let (status, body) = send(
            &app,
            json_request(Method::POST, "/notes", json!({ "title": "A", "content": "B" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to create note" }));
    }

    #[tokio::test]
    async fn test_seed_route_with_unreachable_database_is_internal_error() {
        let app = router(AppState {
            note_service: NoteService::new(Arc::new(MongoNoteStore::new("not a mongodb uri"))),
            seed_on_list: false,
        });

        let (status, body) = send(&app, empty_request(Method::GET, "/seed")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to seed database" }));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(false);

        let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }
}

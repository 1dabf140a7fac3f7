//! HTTP API for creating and listing blog posts

use anyhow::Result;
use axum::{
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::import::{import_document, ImportedDocument};
use crate::content::{decode_form, decode_wysiwyg_form, BlogDocument, FormFields};
use crate::helpers::query_string;
use crate::index::IndexEntry;
use crate::{BlogCms, Error};

/// Server state
pub struct ServerState {
    cms: BlogCms,
    /// Held while a post is written so index updates never interleave
    index_lock: Mutex<()>,
}

impl ServerState {
    pub fn new(cms: BlogCms) -> Self {
        Self {
            cms,
            index_lock: Mutex::new(()),
        }
    }
}

/// Response for a created post
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub path: String,
    pub feature_image: String,
    pub content_image: String,
    /// Link to the packaged post. The `/api/download-blog` endpoint is
    /// served by an external packager, not by this router.
    pub download_url: String,
}

/// Response for the post listing
#[derive(Debug, Serialize)]
pub struct BlogsResponse {
    pub success: bool,
    pub blogs: Vec<IndexEntry>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub html: String,
}

/// Error reported as `{"success": false, "error": ...}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(e: impl Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast_ref::<Error>() {
            Some(Error::MissingField(_) | Error::EmptySlug(_)) => Self::bad_request(e),
            _ => {
                tracing::error!("Error creating blog: {:#}", e);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Failed to create blog post: {}", e),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Build the application router
pub fn router(cms: BlogCms) -> Router {
    let blogs_dir = cms.blogs_dir.clone();
    let images_dir = cms.images_dir.clone();
    let state = Arc::new(ServerState::new(cms));

    Router::new()
        .route("/api/create-blog", post(create_blog))
        .route("/api/create-blog-wysiwyg", post(create_blog_wysiwyg))
        .route("/api/parse-document", post(parse_document))
        .route("/api/blogs", get(list_blogs))
        .nest_service("/blogs", ServeDir::new(blogs_dir))
        .nest_service("/imagesofblog", ServeDir::new(images_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(cms: &BlogCms, ip: &str, port: u16) -> Result<()> {
    let app = router(cms.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create a post from a JSON document or a structured form
async fn create_blog(
    State(state): State<Arc<ServerState>>,
    request: Request,
) -> Result<Json<CreateResponse>, ApiError> {
    let doc = if is_json(request.headers()) {
        let Json(doc) = Json::<BlogDocument>::from_request(request, &())
            .await
            .map_err(ApiError::bad_request)?;
        doc
    } else {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(ApiError::bad_request)?;
        decode_form(
            &FormFields::from_pairs(pairs),
            &state.cms.config.default_author,
        )
    };

    publish(&state, doc).await
}

/// Create a post from rich-editor markup
async fn create_blog_wysiwyg(
    State(state): State<Arc<ServerState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<CreateResponse>, ApiError> {
    let doc = decode_wysiwyg_form(
        &FormFields::from_pairs(pairs),
        &state.cms.config.default_author,
    );
    publish(&state, doc).await
}

/// Split a converted document into a title, sections and JSON-LD
async fn parse_document(Json(request): Json<ParseRequest>) -> Json<ImportedDocument> {
    Json(import_document(&request.html))
}

/// The most recent posts
async fn list_blogs(State(state): State<Arc<ServerState>>) -> Json<BlogsResponse> {
    let index = state.cms.load_index();
    Json(BlogsResponse {
        success: true,
        blogs: index.latest(state.cms.config.index_listing_limit).to_vec(),
        total: index.len(),
    })
}

async fn publish(
    state: &ServerState,
    doc: BlogDocument,
) -> Result<Json<CreateResponse>, ApiError> {
    let feature_image = doc.feature_image.name.clone();
    let content_image = doc.content_image.name.clone();

    let created = {
        let _guard = state.index_lock.lock().await;
        state.cms.create_blog(doc)?
    };
    tracing::info!("Blog created: {}", created.filename);

    let path = Path::new(".")
        .join(&state.cms.config.blogs_dir)
        .join(&created.filename);
    let download_url = format!(
        "/api/download-blog?{}",
        query_string(&[
            ("filename", created.filename.as_str()),
            ("featureImage", feature_image.as_str()),
            ("contentImage", content_image.as_str()),
        ])
    );

    Ok(Json(CreateResponse {
        success: true,
        message: "Blog post created successfully!".to_string(),
        filename: created.filename,
        path: path.display().to_string(),
        feature_image: or_none(feature_image),
        content_image: or_none(content_image),
        download_url,
    }))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

fn or_none(name: String) -> String {
    if name.is_empty() {
        "none".to_string()
    } else {
        name
    }
}

use crate::api::ApiError;
use crate::state::{NestedRouter, State};
use crate::views::ErrorPage;
use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

mod assets;
mod health;
mod page;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .merge(page::route())
        .route("/health", get(health::get))
        .nest("/static", assets::route())
        .fallback(not_found)
}

/// Everything `main` serves. Trailing slashes are trimmed before routing.
pub fn app(state: Arc<State>, cors: Option<CorsLayer>) -> NormalizePath<axum::Router> {
    let mut router = route().with_state(state).layer(TraceLayer::new_for_http());
    if let Some(cors) = cors {
        router = router.layer(cors);
    }
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no route for this path")]
    NoRoute,
    #[error("no such post")]
    NotFound,
    #[error(transparent)]
    Form(#[from] FormRejection),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not render page: {0}")]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Markdown(#[from] crate::markdown::RenderError),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NoRoute | PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Form(rejection) => rejection.status(),
            PageError::Api(err) => upstream_status(err),
            PageError::Template(_) | PageError::Markdown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            PageError::NoRoute => "ページが見つかりません。",
            PageError::Form(_) => "入力内容を読み取れませんでした。",
            _ => match self.status() {
                StatusCode::NOT_FOUND => "投稿が見つかりません。",
                StatusCode::BAD_GATEWAY => {
                    "投稿の取得に失敗しました。時間をおいて再度お試しください。"
                }
                _ => "ページを表示できませんでした。",
            },
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("Error serving page: {self}");
        }

        let page = ErrorPage {
            notice: None,
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Error rendering error page: {err}");
                (status, message).into_response()
            }
        }
    }
}

/// The status a page reports for a failed call to the posts API.
pub fn upstream_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::NotFound => StatusCode::NOT_FOUND,
        ApiError::Status(_) | ApiError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn render(page: &impl Template) -> Result<Html<String>, PageError> {
    Ok(Html(page.render()?))
}

async fn not_found() -> PageError {
    PageError::NoRoute
}

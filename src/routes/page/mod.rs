use crate::state::NestedRouter;
use crate::views::{Notice, NoticeQuery};
use axum::extract::Query;
use axum::routing::{get, post};

mod delete;
mod detail;
mod form;
mod list;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(list::get))
        .route("/posts/:id", get(detail::get))
        .route("/posts/:id/delete", post(delete::post))
        .route("/create", get(form::new).post(form::create))
        .route("/edit/:id", get(form::edit).post(form::update))
}

// a malformed notice is dropped rather than failing the page
fn notice(query: Option<Query<NoticeQuery>>) -> Option<Notice> {
    query.and_then(|Query(query)| query.notice)
}

fn post_id(raw: &str) -> Result<crate::blog::PostID, super::PageError> {
    crate::blog::parse_post_id(raw).ok_or(super::PageError::NotFound)
}

use crate::routes::{render, PageError};
use crate::state::SharedState;
use crate::views::{ListPage, Notice, NoticeQuery};
use axum::extract::{Query, State};
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    query: Option<Query<NoticeQuery>>,
) -> Result<Html<String>, PageError> {
    let (posts, notice) = match state.api.list_posts().await {
        Ok(posts) => (posts, super::notice(query)),
        Err(err) => {
            tracing::error!("Error fetching posts: {err}");
            (Vec::new(), Some(Notice::LoadFailed))
        }
    };

    render(&ListPage { notice, posts })
}

use crate::routes::{render, PageError};
use crate::state::SharedState;
use crate::views::{DetailPage, NoticeQuery};
use axum::extract::{Path, Query, State};
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<String>,
    query: Option<Query<NoticeQuery>>,
) -> Result<Html<String>, PageError> {
    let post_id = super::post_id(&post_id)?;
    let post = state.api.get_post(post_id).await?;
    let body_html = crate::markdown::render(post.content.clone()).await?;

    render(&DetailPage {
        notice: super::notice(query),
        post,
        body_html,
    })
}

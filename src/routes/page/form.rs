use crate::blog::PostDraft;
use crate::routes::{render, upstream_status, PageError};
use crate::state::SharedState;
use crate::views::{FormPage, Notice};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

pub(super) async fn new() -> Result<Html<String>, PageError> {
    render(&FormPage::create(PostDraft::default()))
}

pub(super) async fn edit(
    State(state): SharedState,
    Path(post_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let post_id = super::post_id(&post_id)?;
    let post = state.api.get_post(post_id).await?;

    render(&FormPage::edit(post_id, post.to_draft()))
}

pub(super) async fn create(
    State(state): SharedState,
    form: Result<Form<PostDraft>, FormRejection>,
) -> Result<Response, PageError> {
    let Form(draft) = form?;
    match state.api.create_post(&draft).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Created post");
            Ok(Redirect::to(&Notice::Created.on("/")).into_response())
        }
        Err(err) => {
            tracing::warn!("Error creating post {:?}: {err}", draft.title);
            let page = FormPage::create(draft).with_notice(Notice::SaveFailed);
            Ok((upstream_status(&err), render(&page)?).into_response())
        }
    }
}

pub(super) async fn update(
    State(state): SharedState,
    Path(post_id): Path<String>,
    form: Result<Form<PostDraft>, FormRejection>,
) -> Result<Response, PageError> {
    let post_id = super::post_id(&post_id)?;
    let Form(draft) = form?;

    match state.api.update_post(post_id, &draft).await {
        Ok(_) => {
            tracing::info!(post_id, "Updated post");
            Ok(Redirect::to(&Notice::Updated.on("/")).into_response())
        }
        Err(err) => {
            tracing::warn!("Error updating post {post_id}: {err}");
            let page = FormPage::edit(post_id, draft).with_notice(Notice::SaveFailed);
            Ok((upstream_status(&err), render(&page)?).into_response())
        }
    }
}

use crate::routes::PageError;
use crate::state::SharedState;
use crate::views::Notice;
use axum::extract::{Path, State};
use axum::response::Redirect;

pub(super) async fn post(
    State(state): SharedState,
    Path(post_id): Path<String>,
) -> Result<Redirect, PageError> {
    let post_id = super::post_id(&post_id)?;

    match state.api.delete_post(post_id).await {
        Ok(()) => {
            tracing::info!(post_id, "Deleted post");
            Ok(Redirect::to(&Notice::Deleted.on("/")))
        }
        Err(err) => {
            tracing::warn!("Error deleting post {post_id}: {err}");
            Ok(Redirect::to(
                &Notice::DeleteFailed.on(&crate::blog::post_path(post_id)),
            ))
        }
    }
}

use crate::api::PostsApi;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub api: PostsApi,
}

impl State {
    pub fn new(api: PostsApi) -> State {
        State { api }
    }
}

use crate::blog::{Post, PostDraft, PostID};
use reqwest::StatusCode;
use tracing::{debug, instrument};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("post not found")]
    NotFound,
    #[error("posts API answered {0}")]
    Status(StatusCode),
    #[error("posts API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the remote posts API.
#[derive(Debug, Clone)]
pub struct PostsApi {
    http: reqwest::Client,
    base_url: String,
}

impl PostsApi {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Result<PostsApi, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(PostsApi {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    fn post_url(&self, id: PostID) -> String {
        format!("{}/api/posts/{id}", self.base_url)
    }

    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        debug!("Sending request");
        let response = check(self.http.get(self.posts_url()).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, id: PostID) -> Result<Post, ApiError> {
        debug!("Sending request");
        let response = check(self.http.get(self.post_url(id)).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        debug!("Sending request");
        let response = check(self.http.post(self.posts_url()).json(draft).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_post(&self, id: PostID, draft: &PostDraft) -> Result<Post, ApiError> {
        debug!("Sending request");
        let response = check(self.http.put(self.post_url(id)).json(draft).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: PostID) -> Result<(), ApiError> {
        debug!("Sending request");
        check(self.http.delete(self.post_url(id)).send().await?)?;
        Ok(())
    }
}

fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status => Err(ApiError::Status(status)),
    }
}

use serde::{Deserialize, Serialize};

pub type PostID = u64;

/// How many characters of a post's content the list view shows.
pub const EXCERPT_CHARS: usize = 100;

/// A post as the posts API returns it.
///
/// The API writes upper-camel keys (`ID`, `Title`, ...). Lower-case keys are
/// accepted too so hand-written fixtures and other backends decode the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "ID", alias = "id")]
    pub id: PostID,
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "Content", alias = "content", default)]
    pub content: String,
    #[serde(rename = "Author", alias = "author", default)]
    pub author: String,

    #[serde(
        rename = "CreatedAt",
        alias = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(
        rename = "UpdatedAt",
        alias = "updated_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// The editable part of a post. Sent as the body of create and update calls
/// and received from the form view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    pub fn excerpt(&self) -> String {
        let mut excerpt = self.content.chars().take(EXCERPT_CHARS).collect::<String>();
        excerpt.push_str("...");
        excerpt
    }

    pub fn posted_at(&self) -> Option<String> {
        // the API reports the zero time for posts created without a timestamp
        self.created_at
            .filter(|timestamp| timestamp.timestamp() > 0)
            .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M").to_string())
    }

    /// Only set when the post was edited after it was first published.
    pub fn edited_at(&self) -> Option<String> {
        let (Some(created_at), Some(updated_at)) = (self.created_at, self.updated_at) else {
            return None;
        };
        (updated_at - created_at >= chrono::Duration::minutes(1))
            .then(|| updated_at.format("%Y-%m-%d %H:%M").to_string())
    }

    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
        }
    }
}

/// Path segments that are not a valid ID name no post. Only plain digits
/// count, so `+1` is rejected even though `u64` would parse it.
pub fn parse_post_id(raw: &str) -> Option<PostID> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn post_path(post_id: PostID) -> String {
    format!("/posts/{post_id}")
}

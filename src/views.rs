use crate::blog::{Post, PostDraft, PostID};
use askama::Template;
use serde::Deserialize;

/// One-shot banner telling the user how their last action went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    DeleteFailed,
    SaveFailed,
    LoadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Created => "新規投稿が作成されました！",
            Notice::Updated => "投稿を更新しました！",
            Notice::Deleted => "投稿を削除しました",
            Notice::DeleteFailed => "投稿の削除に失敗しました",
            Notice::SaveFailed => "保存に失敗しました。",
            Notice::LoadFailed => "投稿の取得に失敗しました。",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::DeleteFailed | Notice::SaveFailed | Notice::LoadFailed
        )
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::DeleteFailed => "delete_failed",
            Notice::SaveFailed => "save_failed",
            Notice::LoadFailed => "load_failed",
        }
    }

    /// `path` with this notice attached, for redirects.
    pub fn on(&self, path: &str) -> String {
        format!("{path}?notice={}", self.as_query())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    #[serde(default)]
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListPage {
    pub notice: Option<Notice>,
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    pub notice: Option<Notice>,
    pub post: Post,
    pub body_html: String,
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage {
    pub notice: Option<Notice>,
    pub editing: Option<PostID>,
    pub draft: PostDraft,
}

impl FormPage {
    pub fn create(draft: PostDraft) -> FormPage {
        FormPage {
            notice: None,
            editing: None,
            draft,
        }
    }

    pub fn edit(post_id: PostID, draft: PostDraft) -> FormPage {
        FormPage {
            notice: None,
            editing: Some(post_id),
            draft,
        }
    }

    pub fn with_notice(self, notice: Notice) -> FormPage {
        FormPage {
            notice: Some(notice),
            ..self
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.editing.is_some() {
            "投稿を編集"
        } else {
            "新規投稿を作成"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "更新する"
        } else {
            "作成する"
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub notice: Option<Notice>,
    pub status: u16,
    pub message: &'static str,
}

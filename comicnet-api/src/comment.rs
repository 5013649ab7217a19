use crate::{Author, Uuid};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(String::from(s))
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Author,
    pub body: String,

    /// Display-ready, never parsed
    pub created_at: String,

    pub like_count: u64,
    pub liked_by_viewer: bool,

    /// Replies in the order they were posted
    #[serde(default)]
    pub replies: im::Vector<Comment>,
}

impl Comment {
    pub fn find_in<'a>(comments: &'a im::Vector<Comment>, id: &CommentId) -> Option<&'a Comment> {
        for c in comments.iter() {
            if c.id == *id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in(&c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    /// Number of comments in this subtree, this one included
    pub fn count_with_replies(&self) -> usize {
        1 + self
            .replies
            .iter()
            .map(Comment::count_with_replies)
            .sum::<usize>()
    }
}

/// What a user submits when posting a comment
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub id: CommentId,
    pub author: Author,
    pub body: String,
    pub created_at: String,
}

impl NewComment {
    pub fn now(author: Author, body: impl Into<String>) -> NewComment {
        NewComment {
            id: CommentId::generate(),
            author,
            body: body.into(),
            created_at: crate::now_timestamp(),
        }
    }
}

impl From<NewComment> for Comment {
    fn from(c: NewComment) -> Comment {
        Comment {
            id: c.id,
            author: c.author,
            body: c.body,
            created_at: c.created_at,
            like_count: 0,
            liked_by_viewer: false,
            replies: im::Vector::new(),
        }
    }
}

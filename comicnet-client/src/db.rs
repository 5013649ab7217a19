use anyhow::Context;

use crate::{
    api::{Comment, Notification},
    CommentTree, NotificationList,
};

/// Everything the client holds for one piece of content and one viewer
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DbDump {
    #[serde(default)]
    pub comments: CommentTree,

    #[serde(default)]
    pub notifications: NotificationList,
}

impl DbDump {
    pub fn stub() -> DbDump {
        DbDump::default()
    }

    /// Appends already-built top-level comments, replies included
    pub fn add_comments(&mut self, comments: Vec<Comment>) {
        self.comments = self
            .comments
            .comments()
            .iter()
            .cloned()
            .chain(comments)
            .collect();
    }

    /// Appends already-built notifications after the existing ones, so they
    /// are expected to be older than what the list already holds
    pub fn add_notifications(&mut self, notifications: Vec<Notification>) {
        self.notifications = self
            .notifications
            .iter()
            .cloned()
            .chain(notifications)
            .collect();
    }

    pub fn from_json(json: &str) -> anyhow::Result<DbDump> {
        serde_json::from_str(json).context("parsing db dump")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing db dump")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        Author, CommentId, NewComment, NotificationDraft, NotificationId, NotificationType,
    };

    fn comment(id: &str) -> Comment {
        Comment::from(NewComment {
            id: CommentId::from(id),
            author: Author::new("kai").with_avatar("https://example.invalid/kai.png"),
            body: format!("comment {id}"),
            created_at: String::from("5m ago"),
        })
    }

    #[test]
    fn dump_survives_json() {
        let mut db = DbDump::stub();
        let mut parent = comment("c1");
        parent.replies.push_back(comment("c1r1"));
        db.add_comments(vec![parent, comment("c2")]);
        db.add_notifications(vec![Notification::from_draft(
            NotificationDraft::new(NotificationType::Follow, "Follow", "kai follows you"),
            NotificationId::from("n1"),
            String::from("1d ago"),
        )]);
        assert_eq!(db.comments.comment_count(), 3);

        let parsed = DbDump::from_json(&db.to_json().unwrap()).unwrap();
        assert_eq!(parsed, db);
        assert_eq!(parsed.comments.comment_count(), 3);
    }

    #[test]
    fn missing_sections_are_empty() {
        let db = DbDump::from_json("{}").unwrap();
        assert!(db.comments.is_empty());
        assert!(db.notifications.is_empty());
        assert!(DbDump::from_json("42").is_err());
        assert!(DbDump::from_json(r#"{"comments": 5}"#).is_err());
    }
}

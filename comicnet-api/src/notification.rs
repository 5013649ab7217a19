use std::{fmt, str::FromStr};

use crate::{Error, Uuid};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct NotificationId(pub String);

impl NotificationId {
    pub fn generate() -> NotificationId {
        NotificationId(Uuid::new_v4().to_string())
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> NotificationId {
        NotificationId(String::from(s))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Like,
    Comment,
    Follow,
    Mention,
    System,
    Vote,
}

impl NotificationType {
    pub const ALL: [NotificationType; 6] = [
        NotificationType::Like,
        NotificationType::Comment,
        NotificationType::Follow,
        NotificationType::Mention,
        NotificationType::System,
        NotificationType::Vote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Like => "like",
            NotificationType::Comment => "comment",
            NotificationType::Follow => "follow",
            NotificationType::Mention => "mention",
            NotificationType::System => "system",
            NotificationType::Vote => "vote",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<NotificationType, Error> {
        NotificationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownNotificationType(String::from(s)))
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Comic,
    Post,
    Idea,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Comic => "comic",
            ContentType::Post => "post",
            ContentType::Idea => "idea",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<ContentType, Error> {
        match s {
            "comic" => Ok(ContentType::Comic),
            "post" => Ok(ContentType::Post),
            "idea" => Ok(ContentType::Idea),
            _ => Err(Error::UnknownContentType(String::from(s))),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,

    /// Display-ready, only ever compared as a string
    pub timestamp: String,

    #[serde(default)]
    pub read: bool,

    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,

    /// Overrides the derived group key when set
    #[serde(default)]
    pub group_id: Option<String>,
}

impl Notification {
    pub fn from_draft(d: NotificationDraft, id: NotificationId, timestamp: String) -> Notification {
        Notification {
            id,
            notification_type: d.notification_type,
            title: d.title,
            message: d.message,
            timestamp,
            read: false,
            avatar: d.avatar,
            content_id: d.content_id,
            content_type: d.content_type,
            group_id: d.group_id,
        }
    }

    /// Key under which this notification is displayed
    ///
    /// The explicit `group_id` wins, then `{type}_{content_type}_{content_id}`
    /// when both content fields are set, then the bare type.
    pub fn group_key(&self) -> String {
        if let Some(g) = &self.group_id {
            return g.clone();
        }
        match (&self.content_type, &self.content_id) {
            (Some(content_type), Some(content_id)) => {
                format!("{}_{}_{}", self.notification_type, content_type, content_id)
            }
            _ => String::from(self.notification_type.as_str()),
        }
    }
}

/// Everything about a notification that its sender decides
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NotificationDraft {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl NotificationDraft {
    pub fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationDraft {
        NotificationDraft {
            notification_type,
            title: title.into(),
            message: message.into(),
            avatar: None,
            content_id: None,
            content_type: None,
            group_id: None,
        }
    }

    pub fn about(mut self, content_type: ContentType, content_id: impl Into<String>) -> Self {
        self.content_type = Some(content_type);
        self.content_id = Some(content_id.into());
        self
    }

    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

use chrono::{SecondsFormat, Utc};

mod comment;
pub use comment::{Comment, CommentId, NewComment};

mod error;
pub use error::Error;

mod notification;
pub use notification::{
    ContentType, Notification, NotificationDraft, NotificationId, NotificationType,
};

mod theme;
pub use theme::ThemeMode;

mod user;
pub use user::Author;

pub use uuid::Uuid;
pub type Time = chrono::DateTime<Utc>;

/// Renders `t` as fixed-width RFC 3339 in UTC with millisecond precision
///
/// All timestamps generated by this crate go through this function, so that
/// comparing them as strings is the same as comparing them as times.
pub fn format_timestamp(t: &Time) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

// Strings that reach display or storage layers must not carry null bytes
pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(String::from(s)));
    }
    Ok(())
}

/// Checks a user-submitted comment body before it is handed to a comment tree
pub fn validate_body(s: &str) -> Result<(), Error> {
    validate_string(s)?;
    if s.trim().is_empty() {
        return Err(Error::EmptyString);
    }
    Ok(())
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown theme mode {0:?}")]
    UnknownThemeMode(String),

    #[error("Unknown notification type {0:?}")]
    UnknownNotificationType(String),

    #[error("Unknown content type {0:?}")]
    UnknownContentType(String),

    #[error("Empty string is not allowed")]
    EmptyString,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),
}

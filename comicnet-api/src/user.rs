/// Display identity of whoever wrote a comment
///
/// Both fields are passed through to the display layer untouched.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub username: String,
    pub avatar: Option<String>,
}

impl Author {
    pub fn new(username: impl Into<String>) -> Author {
        Author {
            username: username.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Author {
        self.avatar = Some(avatar.into());
        self
    }
}

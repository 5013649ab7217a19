mod comment;
pub use comment::CommentTree;

mod context;
pub use context::{AppContext, NotificationCenter};

mod db;
pub use db::DbDump;

mod notification;
pub use notification::{NotificationGroup, NotificationList};

mod store;
pub use store::{FileStore, MemoryStore, PreferenceStore};

mod theme;
pub use theme::ThemeController;

pub mod api {
    pub use comicnet_api::*;
}

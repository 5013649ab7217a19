use crate::{
    api::{NotificationDraft, NotificationId},
    NotificationGroup, NotificationList, PreferenceStore, ThemeController,
};

/// Owns the notification list of a session and swaps in the updated list on
/// every change
#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    list: NotificationList,
}

impl NotificationCenter {
    pub fn new(list: NotificationList) -> NotificationCenter {
        NotificationCenter { list }
    }

    pub fn list(&self) -> &NotificationList {
        &self.list
    }

    pub fn into_list(self) -> NotificationList {
        self.list
    }

    pub fn unread_count(&self) -> usize {
        self.list.unread_count()
    }

    pub fn groups(&self) -> Vec<NotificationGroup> {
        self.list.groups()
    }

    pub fn add(&mut self, draft: NotificationDraft) -> NotificationId {
        let (list, id) = self.list.add(draft);
        self.list = list;
        id
    }

    pub fn mark_read(&mut self, id: &NotificationId) {
        self.list = self.list.mark_read(id);
    }

    pub fn mark_many_read(&mut self, ids: &[NotificationId]) {
        self.list = self.list.mark_many_read(ids);
    }

    pub fn mark_all_read(&mut self) {
        self.list = self.list.mark_all_read();
    }

    pub fn mark_group_read(&mut self, key: &str) {
        self.list = self.list.mark_group_read(key);
    }

    pub fn remove(&mut self, id: &NotificationId) {
        self.list = self.list.remove(id);
    }

    pub fn clear(&mut self) {
        self.list = self.list.clear();
    }
}

/// Session-wide state, handed explicitly to whatever needs it
pub struct AppContext<S> {
    pub theme: ThemeController<S>,
    pub notifications: NotificationCenter,
}

impl<S: PreferenceStore> AppContext<S> {
    pub async fn init(store: S, notifications: NotificationList) -> AppContext<S> {
        let theme = ThemeController::load(store).await;
        tracing::debug!(
            theme = %theme.mode(),
            notifications = notifications.len(),
            "initialized app context"
        );
        AppContext {
            theme,
            notifications: NotificationCenter::new(notifications),
        }
    }

    /// Ends the session, handing back the notifications for the caller to keep
    pub fn teardown(self) -> NotificationList {
        tracing::debug!("tearing down app context");
        self.notifications.into_list()
    }
}

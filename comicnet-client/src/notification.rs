use std::{cmp::Reverse, collections::BTreeMap};

use crate::api::{Notification, NotificationDraft, NotificationId};

/// Notifications, newest first
///
/// Like `CommentTree`, every operation returns a new list sharing its storage
/// with the previous one.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct NotificationList(im::Vector<Notification>);

/// Collapsed view of one notification group
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NotificationGroup {
    pub key: String,
    pub latest: Notification,
    pub count: usize,
    pub unread: usize,
}

impl FromIterator<Notification> for NotificationList {
    fn from_iter<I: IntoIterator<Item = Notification>>(iter: I) -> NotificationList {
        NotificationList(iter.into_iter().collect())
    }
}

impl NotificationList {
    pub fn new() -> NotificationList {
        NotificationList::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.0.iter()
    }

    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.0.iter().find(|n| n.id == *id)
    }

    /// Turns `draft` into an unread notification stamped with the current
    /// time, and puts it in front of all the others
    pub fn add(&self, draft: NotificationDraft) -> (NotificationList, NotificationId) {
        let id = NotificationId::generate();
        let n = Notification::from_draft(draft, id.clone(), crate::api::now_timestamp());
        (self.push_front(n), id)
    }

    pub fn push_front(&self, n: Notification) -> NotificationList {
        let mut res = self.0.clone();
        res.push_front(n);
        NotificationList(res)
    }

    pub fn mark_read(&self, id: &NotificationId) -> NotificationList {
        self.mark_where(|n| n.id == *id)
    }

    pub fn mark_many_read(&self, ids: &[NotificationId]) -> NotificationList {
        self.mark_where(|n| ids.contains(&n.id))
    }

    pub fn mark_all_read(&self) -> NotificationList {
        self.mark_where(|_| true)
    }

    pub fn mark_group_read(&self, key: &str) -> NotificationList {
        let ids = self
            .0
            .iter()
            .filter(|n| n.group_key() == key)
            .map(|n| n.id.clone())
            .collect::<Vec<_>>();
        self.mark_many_read(&ids)
    }

    fn mark_where(&self, mut matches: impl FnMut(&Notification) -> bool) -> NotificationList {
        let mut res = self.0.clone();
        for n in res.iter_mut() {
            if !n.read && matches(n) {
                n.read = true;
            }
        }
        NotificationList(res)
    }

    pub fn remove(&self, id: &NotificationId) -> NotificationList {
        let mut res = self.0.clone();
        res.retain(|n| n.id != *id);
        NotificationList(res)
    }

    pub fn clear(&self) -> NotificationList {
        NotificationList::new()
    }

    pub fn unread_count(&self) -> usize {
        self.0.iter().filter(|n| !n.read).count()
    }

    /// Notifications by group key, each group ordered by descending timestamp
    ///
    /// Timestamps are compared as plain strings. This matches time order for
    /// the timestamps `add` generates, but not for relative strings like
    /// "10m ago" and "2h ago", which keep their string order.
    pub fn group_by(&self) -> BTreeMap<String, Vec<Notification>> {
        let mut groups: BTreeMap<String, Vec<Notification>> = BTreeMap::new();
        for n in self.0.iter() {
            groups.entry(n.group_key()).or_default().push(n.clone());
        }
        for g in groups.values_mut() {
            g.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }
        groups
    }

    /// One summary per group, the group with the most recent notification first
    pub fn groups(&self) -> Vec<NotificationGroup> {
        let mut res = self
            .group_by()
            .into_iter()
            .filter_map(|(key, notifs)| {
                let count = notifs.len();
                let unread = notifs.iter().filter(|n| !n.read).count();
                let latest = notifs.into_iter().next()?;
                Some(NotificationGroup {
                    key,
                    latest,
                    count,
                    unread,
                })
            })
            .collect::<Vec<_>>();
        res.sort_by(|a, b| {
            (Reverse(&a.latest.timestamp), &a.key).cmp(&(Reverse(&b.latest.timestamp), &b.key))
        });
        res
    }
}

//! Transient toast shown after every remote operation.
//!
//! `NotificationCompute` holds at most one notification. Commands emit through
//! [`notify`]; the compute then stamps the notification with the current
//! [`Time`] on its next run and clears it once `notification_duration` has
//! passed. Each notification carries its own sequence number, so a notification
//! that supersedes another gets a fresh deadline and is never cleared by the
//! older one's timer.

use std::any::TypeId;

use chrono::{DateTime, Utc};
use usertable_states::{Compute, Dep, State, Time, Updater};

use crate::BusinessConfig;

pub const FETCH_FAILED: &str = "Failed to fetch users";
pub const USER_ADDED: &str = "User added successfully";
pub const ADD_FAILED: &str = "Failed to add user";
pub const USER_UPDATED: &str = "User updated successfully";
pub const UPDATE_FAILED: &str = "Failed to update user";
pub const USER_DELETED: &str = "User deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Primary,
    Info,
    Danger,
}

impl NotificationKind {
    pub fn is_danger(self) -> bool {
        matches!(self, Self::Danger)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// When the notification was first displayed. `None` until the next compute pass.
    pub shown_at: Option<DateTime<Utc>>,
    seq: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: None,
            seq: 0,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn primary(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Primary)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Danger)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCompute {
    current: Option<Notification>,
    emitted: u64,
}

impl State for NotificationCompute {}

impl NotificationCompute {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Number of notifications shown since startup.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Replace the current notification.
    pub fn show(&mut self, mut notification: Notification) {
        self.emitted += 1;
        notification.seq = self.emitted;
        notification.shown_at = None;
        self.current = Some(notification);
    }

    fn stamp(&mut self, seq: u64, now: DateTime<Utc>) {
        if let Some(current) = self.current.as_mut() {
            if current.seq == seq && current.shown_at.is_none() {
                current.shown_at = Some(now);
            }
        }
    }

    fn expire(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }
}

impl Compute for NotificationCompute {
    fn deps(&self) -> Vec<TypeId> {
        vec![TypeId::of::<Time>(), TypeId::of::<BusinessConfig>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let Some(current) = &self.current else {
            return;
        };
        let now = *deps.get_state_ref::<Time>().as_ref();
        let seq = current.seq;

        match current.shown_at {
            None => updater.mutate::<Self>(move |n| n.stamp(seq, now)),
            Some(shown_at) => {
                let duration = deps.get_state_ref::<BusinessConfig>().notification_duration;
                if now - shown_at >= duration {
                    updater.mutate::<Self>(move |n| n.expire(seq));
                }
            }
        }
    }
}

/// Emit `notification`, replacing whatever is on screen.
pub fn notify(updater: &Updater, notification: Notification) {
    updater.mutate::<NotificationCompute>(move |n| n.show(notification));
}

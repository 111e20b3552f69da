//! Transient, non-blocking user messages.
//!
//! Every `show` mounts its own element: there is no queue, no dedup and no
//! rate limit. Each message fades after its display window and is unmounted
//! once the fade has finished.

use crate::config::Timings;
use crate::host::Page;
use crate::session::Task;
use crate::timer::TimerQueue;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Duration,
}

pub struct Notifier {
    next_id: u64,
    live: SmallVec<[Notification; 4]>,
    info_display: Duration,
    error_display: Duration,
    fade: Duration,
}

impl Notifier {
    pub fn new(timings: &Timings) -> Self {
        Self {
            next_id: 0,
            live: SmallVec::new(),
            info_display: timings.info_display,
            error_display: timings.error_display,
            fade: timings.notification_fade,
        }
    }

    /// Notifications mounted and not yet removed, oldest first.
    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    pub fn show<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        timers: &mut TimerQueue<Task>,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Duration,
    ) -> Option<NotificationId> {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let notification = Notification {
            id,
            message: message.into(),
            kind,
            created_at: now,
        };
        if let Err(e) = page.mount_notification(&notification) {
            log::warn!("[notify] could not mount {:?}: {}", id, e);
            return None;
        }
        let window = match kind {
            NotificationKind::Info => self.info_display,
            NotificationKind::Error => self.error_display,
        };
        timers.schedule(now, window, Task::FadeNotification(id));
        log::info!("[notify] {:?} {:?}: {}", id, kind, notification.message);
        self.live.push(notification);
        Some(id)
    }

    pub(crate) fn fade<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        timers: &mut TimerQueue<Task>,
        id: NotificationId,
        now: Duration,
    ) {
        page.fade_notification(id);
        timers.schedule(now, self.fade, Task::RemoveNotification(id));
    }

    pub(crate) fn remove<P: Page + ?Sized>(&mut self, page: &mut P, id: NotificationId) {
        page.unmount_notification(id);
        self.live.retain(|n| n.id != id);
    }
}

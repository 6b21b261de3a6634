use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

impl NotificationKind {
    /// How long a toast of this kind stays on screen.
    pub fn lifetime(&self) -> Duration {
        match self {
            NotificationKind::Success => Duration::from_millis(2000),
            NotificationKind::Failure => Duration::from_millis(4000),
        }
    }
}

/// A transient toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    active: Vec<Notification>,
}

impl Notifications {
    /// Show a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.active.push(Notification {
            id,
            kind,
            text: text.into(),
        });

        id
    }

    /// Remove a toast. Unknown or already dismissed ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|n| n.id != id);
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

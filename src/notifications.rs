// Transient user-facing messages. Nothing reads these back; they only get rendered.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
    Music,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "check",
            Self::Error => "alert",
            Self::Warning => "warning",
            Self::Music => "music",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Info => "text-info",
            Self::Success => "text-success",
            Self::Error => "text-danger",
            Self::Warning => "text-warning",
            Self::Music => "text-primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.items.push(Notification { id, notice });
        id
    }

    /// Unknown ids are ignored; the timer may fire after a manual dismiss.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

use std::time::{Duration, Instant};

use derive_more::{Display, From};
use tracing::debug;

pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Display, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    #[display(fmt = "default")]
    Default,
    #[display(fmt = "destructive")]
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_owned(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Display, From, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Debug)]
struct Entry {
    id: ToastId,
    toast: Toast,
    shown_at: Instant,
}

/// Notifications waiting to be shown. The caller supplies the clock; toasts
/// older than the timeout are dropped by [`ToastQueue::expire`].
#[derive(Debug)]
pub struct ToastQueue {
    timeout: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TIMEOUT)
    }
}

impl ToastQueue {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        debug!(%id, title = %toast.title, variant = %toast.variant, "toast");
        self.entries.push(Entry {
            id,
            toast,
            shown_at: now,
        });

        id
    }

    /// Returns false when the toast was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Drops every toast shown at least `timeout` before `now` and returns their ids.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastId> {
        let timeout = self.timeout;
        let mut expired = Vec::new();

        self.entries.retain(|e| {
            let alive = now.saturating_duration_since(e.shown_at) < timeout;
            if !alive {
                expired.push(e.id);
            }
            alive
        });

        expired
    }

    /// Deadline of the oldest toast, for the shell's timer. A timeout too large
    /// to represent as an `Instant` never fires.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter_map(|e| e.shown_at.checked_add(self.timeout))
            .min()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.toast)
    }

    pub fn active(&self) -> impl Iterator<Item = (ToastId, &Toast)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.toast))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Toast, ToastQueue, ToastVariant};

    #[test]
    fn unittest_ids_are_unique() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();

        let a = queue.push(Toast::success("a"), now);
        let b = queue.push(Toast::success("b"), now);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn unittest_auto_dismiss() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let start = Instant::now();

        let first = queue.push(Toast::success("first"), start);
        let second = queue.push(Toast::error("second"), start + Duration::from_secs(2));
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_secs(5)));

        assert!(queue.expire(start + Duration::from_millis(4_999)).is_empty());
        assert_eq!(queue.expire(start + Duration::from_secs(5)), vec![first]);
        assert_eq!(queue.active().map(|(id, _)| id).collect::<Vec<_>>(), vec![second]);

        assert_eq!(queue.expire(start + Duration::from_secs(7)), vec![second]);
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn unittest_huge_timeout_never_expires() {
        let mut queue = ToastQueue::new(Duration::MAX);
        let start = Instant::now();
        queue.push(Toast::success("sticky"), start);

        assert_eq!(queue.next_deadline(), None);
        assert!(queue.expire(start + Duration::from_secs(86_400)).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn unittest_manual_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Toast::error("failed"), Instant::now());

        assert_eq!(queue.get(id).map(|t| t.variant), Some(ToastVariant::Destructive));
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.get(id).is_none());
    }
}

//! Transient error banner

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// A message shown in the error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Default)]
struct BannerInner {
    current: Option<Banner>,
    next_id: u64,
}

/// Slot holding at most one banner, shared with its dismiss timer
#[derive(Debug, Clone, Default)]
pub struct BannerSlot {
    inner: Arc<Mutex<BannerInner>>,
}

impl BannerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any current banner, and schedule its removal
    ///
    /// Removal needs a tokio runtime; without one the banner stays until
    /// `dismiss` is called. Returns the banner id.
    pub fn show(&self, message: impl Into<String>, duration: Duration) -> u64 {
        let id = {
            let mut inner = self.inner.lock();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.current = Some(Banner {
                id,
                message: message.into(),
            });
            id
        };

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let slot = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(duration).await;
                slot.dismiss(id);
            });
        }
        id
    }

    /// Remove banner `id` if it is still the one shown
    pub fn dismiss(&self, id: u64) {
        let mut inner = self.inner.lock();
        if inner.current.as_ref().is_some_and(|b| b.id == id) {
            inner.current = None;
        }
    }

    pub fn current(&self) -> Option<Banner> {
        self.inner.lock().current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_banner_auto_dismisses() {
        let slot = BannerSlot::new();
        slot.show("boom", Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(slot.current().map(|b| b.message), Some("boom".to_string()));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(slot.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_banner_survives_older_timer() {
        let slot = BannerSlot::new();
        slot.show("first", Duration::from_secs(3));

        tokio::time::sleep(Duration::from_secs(2)).await;
        slot.show("second", Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(slot.current().map(|b| b.message), Some("second".to_string()));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_without_runtime_stays_until_dismissed() {
        let slot = BannerSlot::new();
        let id = slot.show("offline", Duration::from_secs(3));
        assert!(slot.current().is_some());

        slot.dismiss(id + 1);
        assert!(slot.current().is_some());

        slot.dismiss(id);
        assert!(slot.current().is_none());
    }
}

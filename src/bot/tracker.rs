use std::collections::BTreeSet;
use std::sync::Arc;
use teloxide::types::MessageId;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Tracked {
    messages: BTreeSet<i32>,
    pinned: BTreeSet<i32>,
}

/// Messages seen or sent in the giveaway chat since start-up.
///
/// The Bot API has no way to list chat history, so this is what gets purged
/// after a draw. Pinned messages are never handed out for deletion.
#[derive(Debug, Clone, Default)]
pub struct MessageTracker {
    inner: Arc<Mutex<Tracked>>,
}

impl MessageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn track(&self, id: MessageId) {
        self.inner.lock().await.messages.insert(id.0);
    }

    pub async fn mark_pinned(&self, id: MessageId) {
        self.inner.lock().await.pinned.insert(id.0);
    }

    /// Newest tracked message. Message ids grow monotonically within a chat.
    pub async fn latest(&self) -> Option<MessageId> {
        self.inner.lock().await.messages.last().copied().map(MessageId)
    }

    /// Removes and returns tracked messages up to and including `up_to`,
    /// except pinned ones (plus `also_pinned`, the chat's current pin as
    /// reported by the API). Newer messages stay tracked.
    pub async fn take_purgeable(
        &self,
        up_to: MessageId,
        also_pinned: Option<MessageId>,
    ) -> Vec<MessageId> {
        let mut tracked = self.inner.lock().await;
        if let Some(id) = also_pinned {
            tracked.pinned.insert(id.0);
        }

        let newer = match up_to.0.checked_add(1) {
            Some(next) => tracked.messages.split_off(&next),
            None => BTreeSet::new(),
        };
        let older = std::mem::replace(&mut tracked.messages, newer);

        let mut purge = Vec::new();
        for id in older {
            if tracked.pinned.contains(&id) {
                tracked.messages.insert(id);
            } else {
                purge.push(MessageId(id));
            }
        }
        purge
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_take_purgeable_skips_pinned() {
        let tracker = MessageTracker::new();
        for id in [1, 2, 3, 4] {
            tracker.track(MessageId(id)).await;
        }
        tracker.mark_pinned(MessageId(2)).await;

        let purge = tracker.take_purgeable(MessageId(4), Some(MessageId(4))).await;
        assert_eq!(purge, vec![MessageId(1), MessageId(3)]);
        // pinned ones stay tracked, the rest are gone
        assert!(tracker.take_purgeable(MessageId(4), None).await.is_empty());
        assert_eq!(tracker.latest().await, Some(MessageId(4)));
    }

    #[tokio::test]
    async fn test_take_purgeable_keeps_messages_after_cutoff() {
        let tracker = MessageTracker::new();
        for id in [10, 11, 12] {
            tracker.track(MessageId(id)).await;
        }
        let cutoff = tracker.latest().await.unwrap();

        // entries for the next round arrive while the purge is in flight
        tracker.track(MessageId(13)).await;
        tracker.track(MessageId(14)).await;

        let purge = tracker.take_purgeable(cutoff, None).await;
        assert_eq!(purge, vec![MessageId(10), MessageId(11), MessageId(12)]);
        assert_eq!(
            tracker.take_purgeable(MessageId(14), None).await,
            vec![MessageId(13), MessageId(14)]
        );
    }

    #[tokio::test]
    async fn test_track_deduplicates() {
        let tracker = MessageTracker::new();
        assert_eq!(tracker.latest().await, None);
        tracker.track(MessageId(7)).await;
        tracker.track(MessageId(7)).await;
        assert_eq!(
            tracker.take_purgeable(MessageId(7), None).await,
            vec![MessageId(7)]
        );
    }
}

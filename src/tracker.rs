//! Sequence-numbered request tracking.
//!
//! Every edit of the password field gets a ticket. Only the holder of the
//! most recently issued ticket may write to the UI; older responses are
//! dropped. Issuing a ticket also cancels the previous one so its request
//! can be abandoned early.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    token: CancellationToken,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Cancelled once a newer ticket has been issued.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_superseded(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug)]
pub struct RequestTracker {
    latest: AtomicU64,
    current: Mutex<CancellationToken>,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
            current: Mutex::new(CancellationToken::new()),
        }
    }

    /// Issues the next ticket and cancels the previous one.
    ///
    /// Sequence numbers start at 1 and strictly increase.
    pub fn issue(&self) -> RequestTicket {
        // Held across the increment so seq order and token order agree.
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current.cancel();

        let token = CancellationToken::new();
        *current = token.clone();
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        RequestTicket { seq, token }
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Sequence number of the last issued ticket, 0 if none.
    pub fn latest_seq(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sequence_numbers_increase() {
        let tracker = RequestTracker::new();
        assert_eq!(tracker.latest_seq(), 0);

        let first = tracker.issue();
        let second = tracker.issue();
        let third = tracker.issue();

        assert_eq!(first.seq(), 1);
        assert_eq!(second.seq(), 2);
        assert_eq!(third.seq(), 3);
        assert_eq!(tracker.latest_seq(), 3);
    }

    #[test]
    fn test_only_last_ticket_is_latest() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_latest(&first));

        let second = tracker.issue();
        assert!(!tracker.is_latest(&first));
        assert!(tracker.is_latest(&second));
    }

    #[test]
    fn test_issue_cancels_previous_ticket() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(!first.is_superseded());

        let second = tracker.issue();
        assert!(first.is_superseded());
        assert!(!second.is_superseded());
    }

    #[tokio::test]
    async fn test_cancelled_future_resolves_on_supersede() {
        let tracker = Arc::new(RequestTracker::new());
        let first = tracker.issue();

        let waiter = tokio::spawn({
            let token = first.token().clone();
            async move { token.cancelled().await }
        });

        tracker.issue();
        waiter.await.unwrap();
    }

    #[test]
    fn test_concurrent_issue_yields_unique_sequence() {
        let tracker = Arc::new(RequestTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || (0..100).map(|_| tracker.issue().seq()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert_eq!(tracker.latest_seq(), 800);
    }
}

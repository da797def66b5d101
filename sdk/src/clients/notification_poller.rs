use crate::client::NotificationClient;
use crate::error::CoveraError;
use crate::http::config::HttpClientConfig;
use crate::models::notification::{Notification, Recipient};
use crate::token::store::TokenStore;
use crate::utils::duration::CoveraDuration;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, error, info};

/// `NotificationPoller` keeps a role-scoped notification list fresh by
/// re-fetching it on a fixed interval until stopped.
///
/// Every tick replaces the list wholesale. Each request carries a monotonic
/// sequence number and a response older than the last applied one is
/// discarded, so a slow response can never overwrite a newer list. The
/// polling task is owned by this struct and cancelled on `stop()` or drop.
pub struct NotificationPoller {
    client: Arc<dyn NotificationClient>,
    recipient: Recipient,
    interval: CoveraDuration,
    state: Arc<PollerState>,
    handle: Option<JoinHandle<()>>,
}

impl NotificationPoller {
    pub fn new(
        client: Arc<dyn NotificationClient>,
        recipient: Recipient,
        interval: CoveraDuration,
    ) -> Self {
        Self {
            client,
            recipient,
            interval,
            state: Arc::new(PollerState::default()),
            handle: None,
        }
    }

    /// Builds a poller for the signed-in identity, failing with
    /// `MissingIdentity` when no entity id is resolvable from the token.
    pub fn for_identity(
        client: Arc<dyn NotificationClient>,
        store: &TokenStore,
        interval: CoveraDuration,
    ) -> Result<Self, CoveraError> {
        let (role, entity_id) = store.require_identity()?;
        Ok(Self::new(client, Recipient::new(role, entity_id), interval))
    }

    /// Builds a poller for the signed-in identity using the poll interval
    /// from the client configuration.
    pub fn from_config(
        client: Arc<dyn NotificationClient>,
        store: &TokenStore,
        config: &HttpClientConfig,
    ) -> Result<Self, CoveraError> {
        Self::for_identity(client, store, config.poll_interval)
    }

    pub fn interval(&self) -> CoveraDuration {
        self.interval
    }

    /// Starts the polling task. The first fetch is issued immediately,
    /// then one per interval. Starting an already-running poller is a
    /// no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let client = self.client.clone();
        let recipient = self.recipient;
        let state = self.state.clone();
        let interval = self.interval;
        info!("Notifications for {recipient} will be polled every: {interval}");
        self.handle = Some(tokio::spawn(async move {
            let mut interval_timer = time::interval(interval.get_duration());
            loop {
                interval_timer.tick().await;
                let sequence = state.begin_poll();
                match client.get_notifications(&recipient).await {
                    Ok(notifications) => {
                        if !state.apply(sequence, notifications) {
                            debug!("Discarded stale notification response for {recipient}");
                        }
                    }
                    Err(error) => {
                        // Soft failure: show nothing rather than stale
                        // data, and wait for the next tick.
                        error!("There was an error while polling notifications: {error}");
                        state.apply_failure(sequence);
                    }
                }
            }
        }));
    }

    /// Cancels the polling task. No further fetches are issued afterwards.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Notification polling for {} stopped", self.recipient);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The most recently applied notification list.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state.notifications()
    }

    /// Marks a notification as read by deleting it server-side and removes
    /// it from the local list without waiting for the next tick. A failed
    /// delete leaves the entry in place; the next tick reconciles either
    /// way.
    pub async fn mark_as_read(&self, notification_id: u64) {
        match self.client.delete_notification(notification_id).await {
            Ok(()) => self.state.remove(notification_id),
            Err(error) => {
                error!("There was an error while deleting notification with ID: {notification_id}: {error}");
            }
        }
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct PollerState {
    inner: Mutex<PollerInner>,
    next_sequence: AtomicU64,
}

#[derive(Debug, Default)]
struct PollerInner {
    notifications: Vec<Notification>,
    last_applied: u64,
}

impl PollerState {
    /// Issues the sequence number for the next poll. Sequence numbers
    /// start at 1 so that 0 can mean "nothing applied yet".
    fn begin_poll(&self) -> u64 {
        self.next_sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Replaces the list wholesale unless a newer response was already
    /// applied. Returns whether the response was applied.
    fn apply(&self, sequence: u64, notifications: Vec<Notification>) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if sequence <= inner.last_applied {
            return false;
        }
        inner.last_applied = sequence;
        inner.notifications = notifications;
        true
    }

    /// Clears the visible list on a failed poll, with the same freshness
    /// check as `apply`.
    fn apply_failure(&self, sequence: u64) -> bool {
        self.apply(sequence, Vec::new())
    }

    fn remove(&self, notification_id: u64) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .notifications
            .retain(|notification| notification.id != notification_id);
    }

    fn notifications(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notifications
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationKind;
    use crate::models::role::Role;
    use async_trait::async_trait;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct MockNotificationClient {
        notifications: Mutex<Vec<Notification>>,
        polls: AtomicU64,
        fail_polls: AtomicBool,
        fail_deletes: AtomicBool,
    }

    impl MockNotificationClient {
        fn with_notifications(notifications: Vec<Notification>) -> Arc<Self> {
            let client = Self::default();
            *client.notifications.lock().unwrap() = notifications;
            Arc::new(client)
        }

        fn polls(&self) -> u64 {
            self.polls.load(Ordering::Relaxed)
        }
    }

    #[async_trait]
    impl NotificationClient for MockNotificationClient {
        async fn get_notifications(
            &self,
            _recipient: &Recipient,
        ) -> Result<Vec<Notification>, CoveraError> {
            self.polls.fetch_add(1, Ordering::Relaxed);
            if self.fail_polls.load(Ordering::Relaxed) {
                return Err(CoveraError::InvalidResponse(500));
            }
            Ok(self.notifications.lock().unwrap().clone())
        }

        async fn delete_notification(&self, notification_id: u64) -> Result<(), CoveraError> {
            if self.fail_deletes.load(Ordering::Relaxed) {
                return Err(CoveraError::InvalidResponse(500));
            }
            self.notifications
                .lock()
                .unwrap()
                .retain(|notification| notification.id != notification_id);
            Ok(())
        }
    }

    fn notification(id: u64) -> Notification {
        Notification {
            id,
            kind: NotificationKind::Info,
            message: format!("notification {id}"),
            customer_id: Some(7),
            agent_id: None,
        }
    }

    fn poller(client: Arc<MockNotificationClient>) -> NotificationPoller {
        NotificationPoller::new(
            client,
            Recipient::new(Role::Customer, 7),
            CoveraDuration::from(10),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn should_fetch_immediately_and_then_per_interval() {
        let client = MockNotificationClient::with_notifications(vec![notification(1)]);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(client.polls(), 1);
        assert_eq!(poller.notifications(), vec![notification(1)]);

        time::sleep(Duration::from_secs(25)).await;
        assert_eq!(client.polls(), 3);
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn should_replace_list_wholesale_on_each_tick() {
        let client = MockNotificationClient::with_notifications(vec![notification(1)]);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(poller.notifications(), vec![notification(1)]);

        *client.notifications.lock().unwrap() = vec![notification(2), notification(3)];
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(poller.notifications(), vec![notification(2), notification(3)]);
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn should_issue_no_fetches_after_stop() {
        let client = MockNotificationClient::with_notifications(vec![notification(1)]);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_secs(35)).await;
        let polls_before_stop = client.polls();
        assert!(polls_before_stop >= 3);

        poller.stop();
        assert!(!poller.is_running());
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(client.polls(), polls_before_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn should_issue_no_fetches_after_drop() {
        let client = MockNotificationClient::with_notifications(vec![notification(1)]);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_millis(1)).await;
        let polls_before_drop = client.polls();
        drop(poller);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(client.polls(), polls_before_drop);
    }

    #[tokio::test(start_paused = true)]
    async fn should_clear_visible_list_on_fetch_failure() {
        let client = MockNotificationClient::with_notifications(vec![notification(1)]);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(poller.notifications().len(), 1);

        client.fail_polls.store(true, Ordering::Relaxed);
        time::sleep(Duration::from_secs(10)).await;
        assert!(poller.notifications().is_empty());
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn should_remove_entry_optimistically_on_mark_as_read() {
        let client =
            MockNotificationClient::with_notifications(vec![notification(1), notification(2)]);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_millis(1)).await;
        poller.stop();

        poller.mark_as_read(1).await;
        assert_eq!(poller.notifications(), vec![notification(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_entry_when_delete_fails() {
        let client =
            MockNotificationClient::with_notifications(vec![notification(1), notification(2)]);
        client.fail_deletes.store(true, Ordering::Relaxed);
        let mut poller = poller(client.clone());
        poller.start();

        time::sleep(Duration::from_millis(1)).await;
        poller.stop();

        poller.mark_as_read(1).await;
        assert_eq!(poller.notifications().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_at_the_configured_interval() {
        let client = MockNotificationClient::with_notifications(vec![notification(1)]);
        let store = TokenStore::in_memory();
        let payload = URL_SAFE_NO_PAD.encode(r#"{"role":"CUSTOMER","customerId":7}"#);
        store.set_token(&format!("header.{payload}.signature"));

        let config = HttpClientConfig {
            poll_interval: CoveraDuration::from(30),
            ..Default::default()
        };
        let mut poller =
            NotificationPoller::from_config(client.clone(), &store, &config).unwrap();
        assert_eq!(poller.interval().as_secs(), 30);

        poller.start();
        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(client.polls(), 1);

        time::sleep(Duration::from_secs(70)).await;
        assert_eq!(client.polls(), 3);
        poller.stop();
    }

    #[tokio::test]
    async fn should_fail_to_build_without_identity() {
        let client = MockNotificationClient::with_notifications(Vec::new());
        let store = TokenStore::in_memory();
        let result = NotificationPoller::for_identity(client, &store, CoveraDuration::from(10));
        assert!(matches!(result, Err(CoveraError::MissingIdentity)));
    }

    #[test]
    fn should_discard_responses_older_than_last_applied() {
        let state = PollerState::default();
        let first = state.begin_poll();
        let second = state.begin_poll();

        assert!(state.apply(second, vec![notification(2)]));
        assert!(!state.apply(first, vec![notification(1)]));
        assert_eq!(state.notifications(), vec![notification(2)]);
    }

    #[test]
    fn should_apply_failure_with_the_same_freshness_check() {
        let state = PollerState::default();
        let first = state.begin_poll();
        let second = state.begin_poll();

        assert!(state.apply(second, vec![notification(2)]));
        assert!(!state.apply_failure(first));
        assert_eq!(state.notifications(), vec![notification(2)]);
    }

    #[test]
    fn should_keep_applying_after_a_poisoned_lock() {
        let state = Arc::new(PollerState::default());
        let poisoner = state.clone();
        std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the poller state");
        })
        .join()
        .unwrap_err();

        let sequence = state.begin_poll();
        assert!(state.apply(sequence, vec![notification(1)]));
        assert_eq!(state.notifications(), vec![notification(1)]);
    }
}

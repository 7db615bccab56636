//! The observable value and its subscriber list.

use std::cell::RefCell;
use std::rc::Rc;

use super::subscriber::Subscriber;
use super::value::Value;

/// Shared handle to a subscriber. The caller keeps a clone to inspect the
/// subscriber's own state between notifications.
pub type SharedSubscriber<'s> = Rc<RefCell<dyn Subscriber + 's>>;

/// Handle returned by [`ObservableValue::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A named value that notifies its subscribers when it changes.
///
/// Single-threaded: subscribers are `Rc<RefCell<_>>` and notification runs
/// on the caller's stack before [`set_value`](Self::set_value) returns.
pub struct ObservableValue<'s> {
    name: String,
    value: Value,
    subscribers: Vec<(SubscriptionId, SharedSubscriber<'s>)>,
    next_id: u64,
}

impl<'s> ObservableValue<'s> {
    pub fn new(name: impl Into<String>, initial: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: initial.into(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Append a subscriber. Notification order follows subscription order.
    ///
    /// The same subscriber may be added more than once; it is then notified
    /// once per subscription.
    pub fn subscribe(&mut self, subscriber: SharedSubscriber<'s>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        tracing::debug!(observable = %self.name, ?id, "subscribed");
        id
    }

    /// Remove a subscription. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;
        tracing::debug!(observable = %self.name, ?id, removed, "unsubscribed");
        removed
    }

    /// Store `value` and notify subscribers if it differs from the current one.
    ///
    /// Returns true when the value changed (and subscribers were notified).
    pub fn set_value(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.value == value {
            tracing::trace!(observable = %self.name, %value, "value unchanged");
            return false;
        }

        self.value = value;
        self.notify();
        true
    }

    /// Call `update` on every subscriber, in subscription order.
    ///
    /// A subscriber that is already mutably borrowed (for example, one
    /// reentrantly notifying itself) is skipped with a warning.
    pub fn notify(&self) {
        tracing::debug!(
            observable = %self.name,
            value = %self.value,
            subscribers = self.subscribers.len(),
            "notifying subscribers"
        );
        for (id, subscriber) in &self.subscribers {
            match subscriber.try_borrow_mut() {
                Ok(mut subscriber) => subscriber.update(self),
                Err(_) => {
                    tracing::warn!(observable = %self.name, ?id, "subscriber busy, skipped");
                }
            }
        }
    }
}

impl std::fmt::Debug for ObservableValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableValue")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

//! Observable values with synchronous subscriber notification.
//!
//! A write that changes an [`ObservableValue`] pushes a notification to every
//! subscriber, in subscription order, before the write returns. Subscribers
//! then pull the new [`Value`] back out of the observable.
//!
//! # Module Structure
//!
//! - [`value`] - The closed [`Value`] type and typed conversions
//! - [`observable`] - [`ObservableValue`] and subscription handles
//! - [`subscriber`] - The [`Subscriber`] capability and [`read_typed`]
//! - [`speed_alarm`] - [`SpeedAlarm`], a threshold-watching subscriber

mod observable;
mod speed_alarm;
mod subscriber;
mod value;

pub use observable::{ObservableValue, SharedSubscriber, SubscriptionId};
pub use speed_alarm::SpeedAlarm;
pub use subscriber::{read_typed, Subscriber};
pub use value::{FromValue, Value, ValueError};

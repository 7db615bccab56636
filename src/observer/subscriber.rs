//! The subscriber capability.

use super::observable::ObservableValue;
use super::value::FromValue;

/// Receives change notifications from an [`ObservableValue`].
///
/// Implementors own whatever derived state they keep between updates.
pub trait Subscriber {
    /// Called after the observable's value changed. Read the new value from
    /// `observable`.
    fn update(&mut self, observable: &ObservableValue<'_>);
}

/// Read the observable's value as `T`, degrading to `T::default()` when the
/// stored variant does not match.
///
/// This is the lenient read subscribers use; callers that need to tell a
/// mismatch apart from a genuine default use [`Value::get`](super::Value::get).
pub fn read_typed<T: FromValue + Default>(observable: &ObservableValue<'_>) -> T {
    match observable.value().get::<T>() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(observable = observable.name(), %err, "typed read fell back to default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_typed_returns_matching_value() {
        let observable = ObservableValue::new("speed", 42i64);
        assert_eq!(read_typed::<i64>(&observable), 42);
    }

    #[test]
    fn read_typed_mismatch_yields_default() {
        let observable = ObservableValue::new("speed", "very fast");
        assert_eq!(read_typed::<i64>(&observable), 0);
        assert!(!read_typed::<bool>(&observable));
        assert_eq!(read_typed::<f64>(&observable), 0.0);
    }

    #[test]
    fn read_typed_text_mismatch_yields_empty_string() {
        let observable = ObservableValue::new("speed", 1i64);
        assert_eq!(read_typed::<String>(&observable), "");
    }
}

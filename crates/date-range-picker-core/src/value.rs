use std::fmt;

use tracing::debug;

type ChangeCallback = Box<dyn FnMut(&str)>;
type TouchedCallback = Box<dyn FnMut()>;

/// Two-way string value shared with a host form.
///
/// Values written by the host are stored opaque; they are not parsed back into
/// a selection.
#[derive(Default)]
pub struct ValuePort {
    value: Option<String>,
    on_change: Option<ChangeCallback>,
    on_touched: Option<TouchedCallback>,
}

impl ValuePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Host-side write. Ignored when equal to the current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.value.as_deref() != Some(value.as_str()) {
            debug!(%value, "host wrote picker value");
            self.value = Some(value);
        }
    }

    /// Register the callback that receives values pushed by the picker.
    /// Replaces any previously registered callback.
    pub fn on_value_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Register a touched callback. The picker never fires it.
    pub fn on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.on_touched = Some(Box::new(callback));
    }

    /// Store `value` and notify the host.
    pub(crate) fn push(&mut self, value: String) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&value);
        }
        self.value = Some(value);
    }
}

impl fmt::Debug for ValuePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuePort")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .field("on_touched", &self.on_touched.is_some())
            .finish()
    }
}

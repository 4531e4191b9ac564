//! Mock clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::session::{Clipboard, ClipboardError};

/// Clipboard that records copied text, or fails when marked unavailable.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    unavailable: Arc<Mutex<bool>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything successfully copied, in order.
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }

    /// Simulate a machine without a clipboard.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }
}

impl Clipboard for MockClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.unavailable.lock().unwrap() {
            return Err(ClipboardError::Unavailable(
                "mock clipboard disabled".to_string(),
            ));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

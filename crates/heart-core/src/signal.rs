//! One-shot "model finished loading" notification.

use std::fmt;

/// Fires its callback exactly once: on [`LoadSignal::fire`], or on drop if
/// it was never fired. Consuming `fire` makes a second call impossible.
pub struct LoadSignal {
    callback: Option<Box<dyn FnOnce()>>,
}

impl LoadSignal {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    pub fn fire(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(cb) = self.callback.take() {
            cb();
        }
    }
}

impl Drop for LoadSignal {
    fn drop(&mut self) {
        if self.callback.is_some() {
            log::warn!("[asset] loader dropped before completing; signalling loaded");
        }
        self.run();
    }
}

impl fmt::Debug for LoadSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadSignal")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

//! Cancellation shared between the Ctrl-C handler and the session loop.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use super::server_error::ServerError;

/// Cloneable stop flag. The session checks it after every receive returns.
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken {
    cancelled: Arc<AtomicBool>,
}

impl ShutdownToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Installs a process-wide Ctrl-C handler that cancels `token`.
///
/// Can only succeed once per process.
///
/// # Errors
/// [`ServerError::Signal`] if a handler is already installed or the OS refuses.
pub fn install_ctrl_c_handler(token: &ShutdownToken) -> Result<(), ServerError> {
    let t = token.clone();
    ctrlc::set_handler(move || {
        t.cancel();
    })
    .map_err(|e| ServerError::Signal(format!("Error setting Ctrl-C handler: {e}")))
}

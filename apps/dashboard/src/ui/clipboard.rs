//! Copy buttons that flash "Copied!" and then revert.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

pub const COPIED_LABEL: &str = r#"<i class="bi bi-check"></i> Copied!"#;

/// How long the copied label stays before the button reverts.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// One copy button and the clipboard it writes to.
///
/// `copy` spawns the revert timer, so it must run inside a tokio runtime.
pub struct CopyButton {
    original: String,
    label: Arc<Mutex<String>>,
    clipboard: Mutex<Option<String>>,
    revert_after: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl CopyButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_revert(label, COPY_FEEDBACK)
    }

    pub fn with_revert(label: impl Into<String>, revert_after: Duration) -> Self {
        let original = label.into();
        Self {
            label: Arc::new(Mutex::new(original.clone())),
            original,
            clipboard: Mutex::new(None),
            revert_after,
            pending: Mutex::new(None),
        }
    }

    /// Puts `text` on the clipboard and shows the copied label until the
    /// revert delay passes. A second copy restarts the delay and still reverts
    /// to the label the button was built with.
    pub async fn copy(&self, text: &str) {
        *self.clipboard.lock().await = Some(text.to_string());
        debug!("Copied {} chars to clipboard", text.chars().count());

        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *self.label.lock().await = COPIED_LABEL.to_string();

        let label = Arc::clone(&self.label);
        let original = self.original.clone();
        let delay = self.revert_after;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            *label.lock().await = original;
        }));
    }

    /// Current button markup.
    pub async fn label(&self) -> String {
        self.label.lock().await.clone()
    }

    /// Last text copied through this button.
    pub async fn clipboard(&self) -> Option<String> {
        self.clipboard.lock().await.clone()
    }
}

impl Drop for CopyButton {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

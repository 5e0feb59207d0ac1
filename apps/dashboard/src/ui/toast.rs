//! Toast notifications with timed auto-dismiss.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Length of the fade-out before a dismissed toast is removed.
pub const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "bi-check-circle-fill",
            ToastKind::Error => "bi-x-circle-fill",
            ToastKind::Warning => "bi-exclamation-triangle-fill",
            ToastKind::Info => "bi-info-circle-fill",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "var(--success)",
            ToastKind::Error => "var(--error)",
            ToastKind::Warning => "var(--warning)",
            ToastKind::Info => "var(--info)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    /// Set once the TTL has elapsed; the toast is removed after `FADE_OUT`.
    pub fading: bool,
    pub created_at: DateTime<Utc>,
}

/// Holds the visible toasts. Cloning shares the same stack.
///
/// `show` spawns a timer task, so it must run inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct ToastCenter {
    toasts: Arc<Mutex<Vec<Toast>>>,
    ttl: Duration,
}

impl ToastCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    pub async fn show(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: ToastKind,
    ) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            kind,
            fading: false,
            created_at: Utc::now(),
        };
        let id = toast.id;
        debug!("Toast {id} ({:?}): {}", kind, toast.title);
        self.toasts.lock().await.push(toast);

        let toasts = Arc::clone(&self.toasts);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(t) = toasts.lock().await.iter_mut().find(|t| t.id == id) {
                t.fading = true;
            }
            tokio::time::sleep(FADE_OUT).await;
            toasts.lock().await.retain(|t| t.id != id);
        });

        id
    }

    /// Close-button path: removes the toast immediately.
    /// Returns false if it was already gone.
    pub async fn dismiss(&self, id: Uuid) -> bool {
        let mut toasts = self.toasts.lock().await;
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    /// Visible toasts, oldest first.
    pub async fn active(&self) -> Vec<Toast> {
        self.toasts.lock().await.clone()
    }
}

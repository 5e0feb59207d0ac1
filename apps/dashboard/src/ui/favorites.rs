use std::collections::HashSet;

use tokio::sync::Mutex;

use crate::ui::toast::{ToastCenter, ToastKind};

/// Favorited listings (jobs, hostels), keyed by listing id.
#[derive(Debug, Default)]
pub struct Favorites {
    ids: Mutex<HashSet<String>>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the favorite state of `id`, announces it with a toast, and returns
    /// whether the listing is now favorited.
    pub async fn toggle(&self, id: &str, toasts: &ToastCenter) -> bool {
        let now_favorited = {
            let mut ids = self.ids.lock().await;
            if ids.remove(id) {
                false
            } else {
                ids.insert(id.to_string());
                true
            }
        };

        if now_favorited {
            toasts
                .show("Saved", "Added to favorites", ToastKind::Success)
                .await;
        } else {
            toasts
                .show("Removed", "Removed from favorites", ToastKind::Info)
                .await;
        }
        now_favorited
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.ids.lock().await.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_toggle_round_trip_with_toasts() {
        let toasts = ToastCenter::new(Duration::from_secs(5));
        let favorites = Favorites::new();

        assert!(favorites.toggle("job-42", &toasts).await);
        assert!(favorites.contains("job-42").await);
        assert!(!favorites.toggle("job-42", &toasts).await);
        assert!(!favorites.contains("job-42").await);

        let shown: Vec<(String, ToastKind)> = toasts
            .active()
            .await
            .into_iter()
            .map(|t| (t.message, t.kind))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("Added to favorites".to_string(), ToastKind::Success),
                ("Removed from favorites".to_string(), ToastKind::Info),
            ]
        );
    }

    #[tokio::test]
    async fn test_listings_are_independent() {
        let toasts = ToastCenter::new(Duration::from_secs(5));
        let favorites = Favorites::new();
        favorites.toggle("hostel-1", &toasts).await;
        assert!(!favorites.contains("hostel-2").await);
    }
}

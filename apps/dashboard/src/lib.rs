//! Headless core of the student dashboard.
//!
//! `ProfileStore` owns the profile record and mirrors it to a key-value slot.
//! The `ui` modules hold the logic the page's event handlers call into.
//! `AppState` wires both together for injection into those handlers.

pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod ui;

pub use config::Config;
pub use errors::StoreError;
pub use models::{ProfilePatch, ProfileRecord};
pub use state::AppState;
pub use store::{MergeStrategy, ProfileStore, PROFILE_SLOT_KEY};

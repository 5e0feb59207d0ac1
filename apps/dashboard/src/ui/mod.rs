// Headless logic behind the dashboard's UI glue: validation rules, timers and
// the small calculations the page renders. Nothing here touches a document.

pub mod clipboard;
pub mod controls;
pub mod counter;
pub mod favorites;
pub mod filters;
pub mod overlays;
pub mod progress;
pub mod search;
pub mod submit;
pub mod tabs;
pub mod toast;
pub mod validation;
pub mod viewport;

pub use clipboard::CopyButton;
pub use overlays::Overlays;
pub use search::SearchDebouncer;
pub use submit::{FormSubmitter, SubmitOutcome};
pub use tabs::{Tab, TabSet};
pub use toast::{Toast, ToastCenter, ToastKind};

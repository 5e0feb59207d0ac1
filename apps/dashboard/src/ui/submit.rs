use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::ui::toast::{ToastCenter, ToastKind};
use crate::ui::validation::{validate_form, Form, FormReport};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted,
    /// Validation failed; nothing was sent.
    Invalid(FormReport),
    /// A submission is already in flight (the button is disabled).
    Busy,
}

/// Simulated form submission: validate, hold the button in its processing
/// state for `delay`, then announce success.
#[derive(Debug)]
pub struct FormSubmitter {
    delay: Duration,
    toasts: ToastCenter,
    processing: AtomicBool,
}

impl FormSubmitter {
    pub fn new(delay: Duration, toasts: ToastCenter) -> Self {
        Self {
            delay,
            toasts,
            processing: AtomicBool::new(false),
        }
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    pub async fn submit(&self, form: &Form) -> SubmitOutcome {
        let report = validate_form(form);
        if !report.is_valid() {
            debug!("Form rejected: {} invalid field(s)", report.errors.len());
            return SubmitOutcome::Invalid(report);
        }

        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SubmitOutcome::Busy;
        }

        {
            let _processing = ProcessingGuard(&self.processing);
            tokio::time::sleep(self.delay).await;
        }

        self.toasts
            .show(
                "Success!",
                "Your form has been submitted successfully.",
                ToastKind::Success,
            )
            .await;
        SubmitOutcome::Submitted
    }
}

/// Re-enables the submit button when dropped, including when the submit
/// future is cancelled mid-delay.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::validation::{Field, FieldError, FieldKind};
    use std::sync::Arc;

    fn contact_form(email: &str) -> Form {
        Form::new(vec![
            Field::new("name", FieldKind::Text, "Muhammad Khan").required(),
            Field::new("email", FieldKind::Email, email).required(),
        ])
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_form_submits_after_delay() {
        let toasts = ToastCenter::new(Duration::from_secs(5));
        let submitter = Arc::new(FormSubmitter::new(Duration::from_secs(2), toasts.clone()));

        let task = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&contact_form("mk@example.com")).await })
        };

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(submitter.is_processing());
        assert!(toasts.active().await.is_empty());

        assert_eq!(task.await.unwrap(), SubmitOutcome::Submitted);
        assert!(!submitter.is_processing());

        let active = toasts.active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Success!");
        assert_eq!(active[0].kind, ToastKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_is_not_submitted() {
        let toasts = ToastCenter::new(Duration::from_secs(5));
        let submitter = FormSubmitter::new(Duration::from_secs(2), toasts.clone());

        match submitter.submit(&contact_form("nope")).await {
            SubmitOutcome::Invalid(report) => {
                assert_eq!(report.errors["email"], FieldError::InvalidEmail);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert!(toasts.active().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_processing_is_busy() {
        let toasts = ToastCenter::new(Duration::from_secs(5));
        let submitter = Arc::new(FormSubmitter::new(Duration::from_secs(2), toasts));

        let first = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move { submitter.submit(&contact_form("mk@example.com")).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(
            submitter.submit(&contact_form("mk@example.com")).await,
            SubmitOutcome::Busy
        );
        assert_eq!(first.await.unwrap(), SubmitOutcome::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_releases_button() {
        let toasts = ToastCenter::new(Duration::from_secs(5));
        let submitter = FormSubmitter::new(Duration::from_secs(2), toasts.clone());
        let form = contact_form("mk@example.com");

        let cancelled =
            tokio::time::timeout(Duration::from_millis(500), submitter.submit(&form)).await;
        assert!(cancelled.is_err());
        assert!(!submitter.is_processing());
        assert!(toasts.active().await.is_empty());

        assert_eq!(submitter.submit(&form).await, SubmitOutcome::Submitted);
    }
}

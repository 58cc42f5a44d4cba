//! Confirmation messages for registered helpers.
//!
//! The registration workflow calls the [`HelperNotifier`] of the application state after the
//! registration is committed. Failures are logged and never undo a registration.

use async_trait::async_trait;

use crate::server::{
    error::notification::NotificationError,
    model::db::{EventModel, HelperModel, JobModel, ShiftModel},
};

/// Rendered confirmation for one helper
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub recipient: String,
    /// Contact address of the event
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait HelperNotifier: Send + Sync {
    /// Delivers the registration confirmation for `shifts` to `helper`
    async fn send_confirmation(
        &self,
        event: &EventModel,
        helper: &HelperModel,
        shifts: &[(JobModel, ShiftModel)],
    ) -> Result<(), NotificationError>;
}

/// Notifier writing the composed confirmation to the log
pub struct LogNotifier;

#[async_trait]
impl HelperNotifier for LogNotifier {
    async fn send_confirmation(
        &self,
        event: &EventModel,
        helper: &HelperModel,
        shifts: &[(JobModel, ShiftModel)],
    ) -> Result<(), NotificationError> {
        let confirmation = compose_confirmation(event, helper, shifts)?;

        tracing::info!(
            recipient = %confirmation.recipient,
            reply_to = %confirmation.reply_to,
            subject = %confirmation.subject,
            "{}",
            confirmation.body
        );

        Ok(())
    }
}

/// Composes the confirmation message listing every registered shift
pub fn compose_confirmation(
    event: &EventModel,
    helper: &HelperModel,
    shifts: &[(JobModel, ShiftModel)],
) -> Result<Confirmation, NotificationError> {
    if helper.email.trim().is_empty() {
        return Err(NotificationError::MissingRecipient(helper.id));
    }

    let mut body = format!(
        "Hello {},\n\nthank you for helping at {}. You are registered for:\n\n",
        helper.full_name(),
        event.name
    );

    for (job, shift) in shifts {
        body.push_str(&format!(
            "- {}: {} - {}\n",
            job.name,
            shift.begin.format("%Y-%m-%d %H:%M"),
            shift.end.format("%Y-%m-%d %H:%M")
        ));
    }

    body.push_str(&format!(
        "\nIf you have any questions, contact {}.\n",
        event.email
    ));

    Ok(Confirmation {
        recipient: helper.email.clone(),
        reply_to: event.email.clone(),
        subject: format!("Registration for {}", event.name),
        body,
    })
}

/// Sends the confirmation, logging instead of returning a failure
pub async fn notify_registration(
    notifier: &dyn HelperNotifier,
    event: &EventModel,
    helper: &HelperModel,
    shifts: &[(JobModel, ShiftModel)],
) {
    if let Err(e) = notifier.send_confirmation(event, helper, shifts).await {
        tracing::warn!(
            event_id = event.id,
            helper_id = helper.id,
            "Registration stored but confirmation failed: {}",
            e
        );
    }
}

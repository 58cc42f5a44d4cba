use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Helper ID {0} has no e-mail address to send the confirmation to")]
    MissingRecipient(i32),
    #[error("Failed to deliver confirmation to helper ID {helper_id}: {reason}")]
    Delivery { helper_id: i32, reason: String },
}

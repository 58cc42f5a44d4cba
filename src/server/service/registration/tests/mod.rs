
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use shiftdesk_test_utils::prelude::*;

use crate::server::{error::notification::NotificationError, service::notification::LogNotifier};

use super::*;

/// Notifier that always fails and counts its calls
#[derive(Default)]
struct FailingNotifier {
    calls: AtomicUsize,
}

#[async_trait]
impl HelperNotifier for FailingNotifier {
    async fn send_confirmation(
        &self,
        _event: &EventModel,
        helper: &HelperModel,
        _shifts: &[(JobModel, ShiftModel)],
    ) -> Result<(), NotificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Err(NotificationError::Delivery {
            helper_id: helper.id,
            reason: "mail server unreachable".to_string(),
        })
    }
}

fn form(shifts: Vec<i32>) -> RegisterForm {
    RegisterForm {
        prename: "Anna".to_string(),
        surname: "Adler".to_string(),
        email: "anna@example.org".to_string(),
        phone: String::new(),
        comment: String::new(),
        shifts,
    }
}

fn validation_error(result: Result<impl std::fmt::Debug, Error>) -> ValidationError {
    match result {
        Err(Error::ValidationError(errors)) => errors,
        other => panic!("expected validation error, got {:?}", other),
    }
}

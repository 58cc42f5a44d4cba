use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::DEFAULT_LOGIN_URL,
    service::notification::{HelperNotifier, LogNotifier},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Delivers registration confirmations to helpers
    pub notifier: Arc<dyn HelperNotifier>,
    pub login_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        notifier: Arc<dyn HelperNotifier>,
        login_url: impl Into<String>,
    ) -> Self {
        Self {
            db,
            notifier,
            login_url: login_url.into(),
        }
    }
}

/// State with the logging notifier and the default login URL
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, Arc::new(LogNotifier), DEFAULT_LOGIN_URL)
    }
}

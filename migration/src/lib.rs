pub use sea_orm_migration::prelude::*;

mod m20261019_000001_app_user;
mod m20261019_000002_event;
mod m20261019_000003_event_admin;
mod m20261019_000004_job;
mod m20261019_000005_shift;
mod m20261019_000006_helper;
mod m20261019_000007_helper_shift;
mod m20261019_000008_agreement;
mod m20261019_000009_user_agreement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_app_user::Migration),
            Box::new(m20261019_000002_event::Migration),
            Box::new(m20261019_000003_event_admin::Migration),
            Box::new(m20261019_000004_job::Migration),
            Box::new(m20261019_000005_shift::Migration),
            Box::new(m20261019_000006_helper::Migration),
            Box::new(m20261019_000007_helper_shift::Migration),
            Box::new(m20261019_000008_agreement::Migration),
            Box::new(m20261019_000009_user_agreement::Migration),
        ]
    }
}

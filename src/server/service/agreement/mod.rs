#[cfg(test)]
mod tests;

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::agreement::{AgreementDto, AgreementForm, UserAgreementDto},
    server::{
        data::agreement::{AgreementRepository, UserAgreementRepository},
        error::{access::AccessError, validation::ValidationError, Error},
        model::db::{AgreementModel, UserModel},
        service::{permission::require_superuser, validate},
    },
};

/// Upper bound for the rich-text body of an agreement
const MAX_TEXT_LENGTH: usize = 100_000;

pub struct AgreementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgreementService<'a> {
    /// Creates a new instance of [`AgreementService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Agreements in effect today that `user` has not accepted yet
    pub async fn pending(&self, user: &UserModel) -> Result<Vec<AgreementDto>, Error> {
        self.pending_on(user, Utc::now().date_naive()).await
    }

    /// Agreements beginning on or before `today` that `user` has not accepted, ordered by begin
    pub async fn pending_on(
        &self,
        user: &UserModel,
        today: NaiveDate,
    ) -> Result<Vec<AgreementDto>, Error> {
        let agreed: HashSet<i32> = UserAgreementRepository::new(self.db)
            .get_agreed_ids(user.id)
            .await?
            .into_iter()
            .collect();

        Ok(AgreementRepository::new(self.db)
            .get_effective(today)
            .await?
            .into_iter()
            .filter(|agreement| !agreed.contains(&agreement.id))
            .map(AgreementDto::from)
            .collect())
    }

    /// Records that `user` accepted the agreement
    pub async fn agree(&self, user: &UserModel, agreement_id: i32) -> Result<UserAgreementDto, Error> {
        self.agree_at(user, agreement_id, Utc::now().naive_utc())
            .await
    }

    /// Records the acceptance at `now`
    ///
    /// An acceptance that already carries a timestamp is returned unchanged.
    pub async fn agree_at(
        &self,
        user: &UserModel,
        agreement_id: i32,
        now: NaiveDateTime,
    ) -> Result<UserAgreementDto, Error> {
        if AgreementRepository::new(self.db)
            .get(agreement_id)
            .await?
            .is_none()
        {
            return Err(AccessError::NotFound.into());
        }

        let user_agreement_repo = UserAgreementRepository::new(self.db);
        let user_agreement = match user_agreement_repo.get(user.id, agreement_id).await? {
            None => {
                user_agreement_repo
                    .create(user.id, agreement_id, Some(now))
                    .await?
            }
            Some(existing) if existing.agreed.is_none() => {
                user_agreement_repo.set_agreed(existing, now).await?
            }
            Some(existing) => {
                tracing::debug!(
                    user_id = user.id,
                    agreement_id,
                    "Agreement already accepted, keeping timestamp"
                );

                return Ok(UserAgreementDto::from(existing));
            }
        };

        tracing::info!(user_id = user.id, agreement_id, "User accepted agreement");

        Ok(UserAgreementDto::from(user_agreement))
    }

    /// Creates a new agreement, superusers only
    pub async fn create(
        &self,
        actor: &UserModel,
        form: AgreementForm,
    ) -> Result<AgreementModel, Error> {
        require_superuser(actor)?;

        let mut errors = ValidationError::new();
        let name = validate::required(&mut errors, "name", &form.name, validate::MAX_NAME_LENGTH);
        // Stored sanitized, scripts and unsafe attributes never reach the database
        let text = validate::required(
            &mut errors,
            "text",
            &ammonia::clean(&form.text),
            MAX_TEXT_LENGTH,
        );
        let (name, text) = errors.into_result((name, text))?;

        let agreement = AgreementRepository::new(self.db)
            .create(&name, &text, form.begin)
            .await?;

        tracing::info!(agreement_id = agreement.id, actor_id = actor.id, "Created agreement");

        Ok(agreement)
    }
}

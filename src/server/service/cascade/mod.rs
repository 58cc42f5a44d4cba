//! Deletion routines for the event hierarchy.
//!
//! Foreign keys restrict deletes, so children are always removed here, bottom-up, by the one
//! routine responsible for each entity type. Callers run these inside a transaction.
//!
//! A helper only exists while registered for at least one shift: whenever registrations are
//! removed, helpers left without any are deleted as well.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::{
    event::EventRepository, event_admin::EventAdminRepository, helper::HelperRepository,
    helper_shift::HelperShiftRepository, job::JobRepository, shift::ShiftRepository,
};

/// Deletes helpers of `helper_ids` that have no registration left
///
/// Returns the number of deleted helpers.
pub async fn delete_orphaned_helpers<C: ConnectionTrait>(
    db: &C,
    helper_ids: &[i32],
) -> Result<u64, DbErr> {
    let registered = HelperShiftRepository::new(db)
        .get_registered_helper_ids(helper_ids)
        .await?;

    let orphaned: Vec<i32> = helper_ids
        .iter()
        .copied()
        .filter(|helper_id| !registered.contains(helper_id))
        .collect();

    if orphaned.is_empty() {
        return Ok(0);
    }

    Ok(HelperRepository::new(db)
        .delete_many(&orphaned)
        .await?
        .rows_affected)
}

/// Removes a helper's registrations for `shift_ids`
///
/// Returns `true` when the helper was deleted because no registration is left.
pub async fn unregister_helper<C: ConnectionTrait>(
    db: &C,
    helper_id: i32,
    shift_ids: &[i32],
) -> Result<bool, DbErr> {
    HelperShiftRepository::new(db)
        .delete_for_helper(helper_id, shift_ids)
        .await?;

    Ok(delete_orphaned_helpers(db, &[helper_id]).await? > 0)
}

/// Deletes shifts together with their registrations
pub async fn delete_shifts<C: ConnectionTrait>(db: &C, shift_ids: &[i32]) -> Result<(), DbErr> {
    if shift_ids.is_empty() {
        return Ok(());
    }

    let registration_repo = HelperShiftRepository::new(db);
    let helper_ids: Vec<i32> = registration_repo
        .get_helper_ids_by_shift_ids(shift_ids)
        .await?
        .into_iter()
        .collect();

    registration_repo.delete_by_shift_ids(shift_ids).await?;
    delete_orphaned_helpers(db, &helper_ids).await?;

    ShiftRepository::new(db).delete_many(shift_ids).await?;

    Ok(())
}

/// Deletes jobs together with their shifts
pub async fn delete_jobs<C: ConnectionTrait>(db: &C, job_ids: &[i32]) -> Result<(), DbErr> {
    if job_ids.is_empty() {
        return Ok(());
    }

    let shift_ids: Vec<i32> = ShiftRepository::new(db)
        .get_many_by_job_ids(job_ids)
        .await?
        .into_iter()
        .map(|shift| shift.id)
        .collect();

    delete_shifts(db, &shift_ids).await?;

    JobRepository::new(db).delete_many(job_ids).await?;

    Ok(())
}

/// Deletes an event with its jobs, helpers and admin memberships
pub async fn delete_event<C: ConnectionTrait>(db: &C, event_id: i32) -> Result<(), DbErr> {
    let job_ids: Vec<i32> = JobRepository::new(db)
        .get_many_by_event_id(event_id)
        .await?
        .into_iter()
        .map(|job| job.id)
        .collect();

    delete_jobs(db, &job_ids).await?;

    // Helpers of the event whose registrations were not reachable through its jobs
    let helper_repo = HelperRepository::new(db);
    let helper_ids = helper_repo.get_ids_by_event_id(event_id).await?;
    if !helper_ids.is_empty() {
        helper_repo.delete_many(&helper_ids).await?;
    }

    EventAdminRepository::new(db)
        .delete_by_event_id(event_id)
        .await?;
    EventRepository::new(db).delete(event_id).await?;

    Ok(())
}

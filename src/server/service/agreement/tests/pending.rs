use super::*;

/// Expect accepted and future agreements to be left out
#[tokio::test]
async fn lists_unaccepted_effective_agreements() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let accepted = test
        .agreement()
        .insert_agreement("Code of conduct", factory::date(1, 1))
        .await?;
    let privacy = test
        .agreement()
        .insert_agreement("Privacy", factory::date(3, 1))
        .await?;
    test.agreement()
        .insert_agreement("Future", factory::date(12, 1))
        .await?;
    test.agreement()
        .insert_user_agreement(alice.id, accepted.id, Some(factory::datetime(2, 9)))
        .await?;

    let agreement_service = AgreementService::new(&test.db);
    let pending = agreement_service
        .pending_on(&alice, factory::date(6, 1))
        .await
        .unwrap();

    let ids: Vec<i32> = pending.iter().map(|agreement| agreement.id).collect();
    assert_eq!(ids, vec![privacy.id]);

    Ok(())
}

/// Expect an acceptance row without timestamp to count as pending
#[tokio::test]
async fn unset_acceptance_is_pending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let privacy = test
        .agreement()
        .insert_agreement("Privacy", factory::date(3, 1))
        .await?;
    test.agreement()
        .insert_user_agreement(alice.id, privacy.id, None)
        .await?;

    let agreement_service = AgreementService::new(&test.db);
    let pending = agreement_service
        .pending_on(&alice, factory::date(3, 1))
        .await
        .unwrap();

    assert_eq!(pending.len(), 1);

    Ok(())
}

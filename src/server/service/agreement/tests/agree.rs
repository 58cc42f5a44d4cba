use super::*;

/// Expect a first acceptance to store the timestamp
#[tokio::test]
async fn stores_acceptance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let privacy = test
        .agreement()
        .insert_agreement("Privacy", factory::date(3, 1))
        .await?;

    let agreement_service = AgreementService::new(&test.db);
    let now = factory::datetime(5, 10);
    let user_agreement = agreement_service
        .agree_at(&alice, privacy.id, now)
        .await
        .unwrap();

    assert_eq!(user_agreement.agreed, Some(now));
    assert!(agreement_service
        .pending_on(&alice, factory::date(6, 1))
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Expect accepting twice to keep the first timestamp
#[tokio::test]
async fn keeps_first_timestamp() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let privacy = test
        .agreement()
        .insert_agreement("Privacy", factory::date(3, 1))
        .await?;

    let agreement_service = AgreementService::new(&test.db);
    let first = factory::datetime(5, 10);
    agreement_service
        .agree_at(&alice, privacy.id, first)
        .await
        .unwrap();
    let second = agreement_service
        .agree_at(&alice, privacy.id, factory::datetime(6, 10))
        .await
        .unwrap();

    assert_eq!(second.agreed, Some(first));

    Ok(())
}

/// Expect an acceptance row without timestamp to be completed
#[tokio::test]
async fn sets_unset_acceptance() -> Result<(), TestError> {
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
    let now = factory::datetime(5, 10);
    let user_agreement = agreement_service
        .agree_at(&alice, privacy.id, now)
        .await
        .unwrap();

    assert_eq!(user_agreement.agreed, Some(now));

    Ok(())
}

/// Expect an unknown agreement to be not found
#[tokio::test]
async fn unknown_agreement_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;

    let agreement_service = AgreementService::new(&test.db);
    let result = agreement_service.agree(&alice, 1).await;

    assert!(matches!(
        result,
        Err(Error::AccessError(AccessError::NotFound))
    ));

    Ok(())
}

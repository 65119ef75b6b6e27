//! User directory tests against a real (SQLite, in-memory) store.

mod common;

use homebanking::domain::{NewUser, UpdateUser};
use homebanking::errors::AppError;
use homebanking::infra::UserRepository;
use homebanking::services::UserService;

use common::{directory, new_user, store, test_database};

#[tokio::test]
async fn test_migrations_are_applied_on_connect() {
    let db = test_database().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 1);
    assert!(status.iter().all(|(_, applied)| *applied));
    assert!(db.ping().await.is_ok());
}

#[tokio::test]
async fn test_store_assigns_ids_and_looks_up_by_email() {
    let db = test_database().await;
    let repo = store(&db);

    let first = repo
        .insert(NewUser::from(new_user("a@x.com", "Ana")))
        .await
        .unwrap();
    let second = repo
        .insert(NewUser::from(new_user("b@x.com", "Bea")))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert!(repo.exists_by_id(first.id).await.unwrap());
    assert!(!repo.exists_by_id(second.id + 100).await.unwrap());

    let found = repo.find_by_email("b@x.com").await.unwrap().unwrap();
    assert_eq!(found, second);
    assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_delete_of_missing_row_is_not_found() {
    let db = test_database().await;
    let repo = store(&db);

    let result = repo.delete_by_id(404).await;

    assert!(matches!(result, Err(AppError::UserNotFound)));
}

#[tokio::test]
async fn test_create_user_returns_input_fields_and_store_id() {
    let db = test_database().await;
    let service = directory(&db);

    let dto = service
        .create_user(new_user("fresh@x.com", "Bea"))
        .await
        .unwrap();

    assert!(dto.id > 0);
    assert_eq!(dto.name, "Bea");
    assert_eq!(dto.surname, "Gomez");
    assert_eq!(dto.email, "fresh@x.com");
    assert_eq!(dto.password, "secret");
    assert_eq!(dto.dni, "30123456");

    let fetched = service.get_user_by_id(dto.id).await.unwrap();
    assert_eq!(fetched, dto);
}

#[tokio::test]
async fn test_create_user_with_existing_email_leaves_store_untouched() {
    let db = test_database().await;
    let service = directory(&db);
    service.create_user(new_user("a@x.com", "Ana")).await.unwrap();

    let err = service
        .create_user(new_user("a@x.com", "B"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UserAlreadyExists(_)));
    assert!(err.to_string().contains("a@x.com"));
    assert_eq!(service.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_user_by_id_never_persisted() {
    let db = test_database().await;
    let service = directory(&db);

    let result = service.get_user_by_id(12345).await;

    assert!(matches!(result, Err(AppError::UserNotFound)));
}

#[tokio::test]
async fn test_delete_user_then_get_is_not_found() {
    let db = test_database().await;
    let service = directory(&db);
    let dto = service.create_user(new_user("a@x.com", "Ana")).await.unwrap();

    service.delete_user(dto.id).await.unwrap();

    assert!(matches!(
        service.get_user_by_id(dto.id).await,
        Err(AppError::UserNotFound)
    ));
    assert!(matches!(
        service.delete_user(dto.id).await,
        Err(AppError::UserNotFound)
    ));
}

#[tokio::test]
async fn test_update_user_with_empty_patch_is_rejected_and_changes_nothing() {
    let db = test_database().await;
    let service = directory(&db);
    let before = service.create_user(new_user("a@x.com", "Ana")).await.unwrap();

    let result = service.update_user(before.id, UpdateUser::default()).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(service.get_user_by_id(before.id).await.unwrap(), before);
}

#[tokio::test]
async fn test_update_user_changes_only_name() {
    let db = test_database().await;
    let service = directory(&db);
    let before = service.create_user(new_user("a@x.com", "Ana")).await.unwrap();

    let patch = UpdateUser {
        name: Some("Bea".to_string()),
        ..UpdateUser::default()
    };
    let after = service.update_user(before.id, patch).await.unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.name, "Bea");
    assert_eq!(after.surname, before.surname);
    assert_eq!(after.email, "a@x.com");
    assert_eq!(after.password, before.password);
    assert_eq!(after.dni, before.dni);
    assert_eq!(service.get_user_by_id(before.id).await.unwrap(), after);
}

#[tokio::test]
async fn test_update_user_stores_empty_string() {
    let db = test_database().await;
    let service = directory(&db);
    let before = service.create_user(new_user("a@x.com", "Ana")).await.unwrap();

    let patch = UpdateUser {
        surname: Some(String::new()),
        ..UpdateUser::default()
    };
    let after = service.update_user(before.id, patch).await.unwrap();

    assert_eq!(after.surname, "");
    assert_eq!(after.name, before.name);
    assert_eq!(service.get_user_by_id(before.id).await.unwrap().surname, "");
}

#[tokio::test]
async fn test_update_user_unknown_id() {
    let db = test_database().await;
    let service = directory(&db);

    let patch = UpdateUser {
        name: Some("Bea".to_string()),
        ..UpdateUser::default()
    };

    assert!(matches!(
        service.update_user(77, patch).await,
        Err(AppError::UserNotFound)
    ));
}

#[tokio::test]
async fn test_update_user_does_not_recheck_email_uniqueness() {
    let db = test_database().await;
    let service = directory(&db);
    service.create_user(new_user("a@x.com", "Ana")).await.unwrap();
    let other = service.create_user(new_user("b@x.com", "Bea")).await.unwrap();

    let patch = UpdateUser {
        email: Some("a@x.com".to_string()),
        ..UpdateUser::default()
    };
    let updated = service.update_user(other.id, patch).await.unwrap();

    assert_eq!(updated.email, "a@x.com");
    let sharing: Vec<_> = service
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .filter(|u| u.email == "a@x.com")
        .collect();
    assert_eq!(sharing.len(), 2);
}

#[tokio::test]
async fn test_list_users_returns_everything_stored() {
    let db = test_database().await;
    let service = directory(&db);
    assert!(service.list_users().await.unwrap().is_empty());

    for (email, name) in [("a@x.com", "Ana"), ("b@x.com", "Bea"), ("c@x.com", "Cai")] {
        service.create_user(new_user(email, name)).await.unwrap();
    }

    let mut emails: Vec<_> = service
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.email)
        .collect();
    emails.sort();

    assert_eq!(emails, ["a@x.com", "b@x.com", "c@x.com"]);
}

use super::{create_test_service, seed_event};
use crate::constants::constants::{DEFAULT_CATEGORIES, EVENT_CREATED, PARTICIPANT_ADDED};
use crate::core::errors::AsadoError;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_create_event_trims_name() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let event = service.create_event("  Asado del domingo ").await.unwrap();

    assert_eq!(event.name, "Asado del domingo");
    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, EVENT_CREATED);
    assert_eq!(logs[0].event.as_deref(), Some("Asado del domingo"));
}

#[tokio::test]
async fn test_create_duplicate_event() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    service.create_event("domingo").await.unwrap();

    let result = service.create_event("domingo").await;
    assert_eq!(result, Err(AsadoError::EventAlreadyExists("domingo".to_string())));
}

#[tokio::test]
async fn test_create_event_rejects_blank_name() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    match service.create_event("   ").await {
        Err(AsadoError::InvalidInput(field, detail)) => {
            assert_eq!(field, "name");
            assert_eq!(detail.description, "name cannot be empty");
        }
        other => panic!("expected invalid input, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_events_counts_participants_and_expenses() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    seed_event(&service, "sabado", &["Ana", "Beto"]).await;
    seed_event(&service, "domingo", &["Carla"]).await;
    service
        .add_expense("sabado", "Ana", "Carne", dec!(120), "")
        .await
        .unwrap();

    let events = service.list_events().await.unwrap();
    let sabado = events.iter().find(|e| e.name == "sabado").unwrap();
    let domingo = events.iter().find(|e| e.name == "domingo").unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!((sabado.participant_count, sabado.expense_count), (2, 1));
    assert_eq!((domingo.participant_count, domingo.expense_count), (1, 0));
}

#[tokio::test]
async fn test_delete_event_removes_its_data() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    seed_event(&service, "domingo", &["Ana"]).await;
    service
        .add_expense("domingo", "Ana", "Vino", dec!(30), "")
        .await
        .unwrap();

    service.delete_event("domingo").await.unwrap();

    assert!(service.list_events().await.unwrap().is_empty());
    assert_eq!(
        service.list_expenses("domingo").await,
        Err(AsadoError::EventNotFound("domingo".to_string()))
    );
    assert_eq!(
        service.delete_event("domingo").await,
        Err(AsadoError::EventNotFound("domingo".to_string()))
    );
}

#[tokio::test]
async fn test_participants_keep_join_order() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    seed_event(&service, "domingo", &["Carla", "Ana", "Beto"]).await;

    let participants = service.list_participants("domingo").await.unwrap();
    assert_eq!(participants, vec!["Carla", "Ana", "Beto"]);

    let added = service
        .get_app_logs()
        .await
        .unwrap()
        .iter()
        .filter(|log| log.action == PARTICIPANT_ADDED)
        .count();
    assert_eq!(added, 3);
}

#[tokio::test]
async fn test_add_duplicate_participant() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    seed_event(&service, "domingo", &["Ana"]).await;

    let result = service.add_participant("domingo", " Ana ").await;
    assert_eq!(result, Err(AsadoError::ParticipantAlreadyExists("Ana".to_string())));
}

#[tokio::test]
async fn test_add_participant_to_missing_event() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let result = service.add_participant("nope", "Ana").await;
    assert_eq!(result, Err(AsadoError::EventNotFound("nope".to_string())));
}

#[tokio::test]
async fn test_remove_participant_drops_their_expenses() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    seed_event(&service, "domingo", &["Ana", "Beto"]).await;
    service
        .add_expense("domingo", "Ana", "Carne", dec!(100), "")
        .await
        .unwrap();
    service
        .add_expense("domingo", "Beto", "Pan", dec!(10), "")
        .await
        .unwrap();

    service.remove_participant("domingo", "Ana").await.unwrap();

    assert_eq!(service.list_participants("domingo").await.unwrap(), vec!["Beto"]);
    let expenses = service.list_expenses("domingo").await.unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].participant, "Beto");

    assert_eq!(
        service.remove_participant("domingo", "Ana").await,
        Err(AsadoError::ParticipantNotFound("Ana".to_string()))
    );
}

#[tokio::test]
async fn test_categories_include_defaults_sorted() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let categories = service.list_categories().await.unwrap();

    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
    assert!(categories.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(categories.iter().any(|c| c == "Chimichurri"));
}

#[tokio::test]
async fn test_custom_category_lifecycle() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    assert_eq!(service.add_custom_category(" Provoleta ").await.unwrap(), "Provoleta");
    assert!(service.list_categories().await.unwrap().contains(&"Provoleta".to_string()));
    assert_eq!(
        service.add_custom_category("Provoleta").await,
        Err(AsadoError::CategoryAlreadyExists("Provoleta".to_string()))
    );
    assert_eq!(
        service.add_custom_category("Carne").await,
        Err(AsadoError::CategoryAlreadyExists("Carne".to_string()))
    );

    service.remove_custom_category("Provoleta").await.unwrap();
    assert!(!service.list_categories().await.unwrap().contains(&"Provoleta".to_string()));
}

#[tokio::test]
async fn test_default_category_cannot_be_removed() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    assert_eq!(
        service.remove_custom_category("Carne").await,
        Err(AsadoError::CategoryNotFound("Carne".to_string()))
    );
}

#[tokio::test]
async fn test_reset_all_clears_events_and_custom_categories() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    seed_event(&service, "domingo", &["Ana"]).await;
    service.add_custom_category("Provoleta").await.unwrap();

    service.reset_all().await.unwrap();

    assert!(service.list_events().await.unwrap().is_empty());
    assert_eq!(service.list_categories().await.unwrap().len(), DEFAULT_CATEGORIES.len());
    // Logs survive a reset
    assert!(!service.get_app_logs().await.unwrap().is_empty());
}

//! Chat gateway integration tests: full update-to-reply flows

mod common;

use equiptrack_server::{
    bot::{ChatUpdate, Gateway},
    models::enums::{EquipmentStatus, Location},
    repository::Repository,
    services::Services,
};

fn command(chat_id: i64, text: &str) -> ChatUpdate {
    ChatUpdate {
        chat_id,
        username: None,
        text: Some(text.to_string()),
        callback_data: None,
    }
}

fn callback(chat_id: i64, data: &str) -> ChatUpdate {
    ChatUpdate {
        chat_id,
        username: None,
        text: None,
        callback_data: Some(data.to_string()),
    }
}

#[tokio::test]
#[ignore] // Needs DATABASE_URL pointing at a running Postgres
async fn anonymous_listing_shows_restricted_cards() {
    let pool = common::test_pool().await;
    let gateway = Gateway::new(Services::new(Repository::new(pool.clone())));

    let id = common::insert_equipment(
        &pool,
        "Heat gun",
        Location::RepairWorkshop,
        EquipmentStatus::Available,
        None,
    )
    .await;

    let replies = gateway
        .handle(&command(-common::unique_telegram_id(), "/equipment"))
        .await
        .expect("handle failed");

    assert_eq!(replies[0].text, "Here is the available equipment");
    let card = replies
        .iter()
        .find(|reply| reply.text.contains("Heat gun"))
        .expect("no card for the inserted unit");
    assert!(!card.text.contains("Location"));
    assert!(!card.text.contains("Status"));
    assert!(card.keyboard.is_empty());

    common::delete_equipment(&pool, id).await;
}

#[tokio::test]
#[ignore]
async fn registered_listing_shows_full_cards_with_buttons() {
    let pool = common::test_pool().await;
    let gateway = Gateway::new(Services::new(Repository::new(pool.clone())));

    let telegram_id = common::unique_telegram_id();
    let employee_id = common::insert_employee(&pool, telegram_id).await;
    let id = common::insert_equipment(
        &pool,
        "Drill press",
        Location::ProductionZone,
        EquipmentStatus::Available,
        Some(employee_id),
    )
    .await;

    let replies = gateway
        .handle(&command(telegram_id, "/equipment"))
        .await
        .expect("handle failed");

    let card = replies
        .iter()
        .find(|reply| reply.text.contains("Drill press"))
        .expect("no card for the inserted unit");
    assert!(card.text.contains("Location: Production Zone"));
    assert!(card.text.contains("Status: Available"));
    assert!(card.text.contains("Test Employee"));
    let data: Vec<_> = card.keyboard[0].iter().map(|b| b.data.clone()).collect();
    assert_eq!(data, [format!("move_{}", id), format!("status_{}", id)]);

    common::delete_equipment(&pool, id).await;
    common::delete_employee(&pool, employee_id).await;
}

#[tokio::test]
#[ignore]
async fn move_flow_prompts_then_relocates() {
    let pool = common::test_pool().await;
    let gateway = Gateway::new(Services::new(Repository::new(pool.clone())));
    let repository = Repository::new(pool.clone());

    let id = common::insert_equipment(
        &pool,
        "Air compressor",
        Location::Room3333,
        EquipmentStatus::Available,
        None,
    )
    .await;

    let replies = gateway
        .handle(&callback(1, &format!("move_{}", id)))
        .await
        .expect("prompt failed");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].keyboard.len(), 2);

    let replies = gateway
        .handle(&callback(1, &format!("move_to_{}_Co-working Zone", id)))
        .await
        .expect("confirm failed");
    assert_eq!(replies[0].text, "Equipment moved to Co-working Zone.");

    let equipment = repository.equipment.get_by_id(id).await.expect("get failed");
    assert_eq!(equipment.location, Location::CoWorkingZone);

    common::delete_equipment(&pool, id).await;
}

#[tokio::test]
#[ignore]
async fn invalid_status_is_rejected_without_touching_storage() {
    let pool = common::test_pool().await;
    let gateway = Gateway::new(Services::new(Repository::new(pool.clone())));
    let repository = Repository::new(pool.clone());

    let id = common::insert_equipment(
        &pool,
        "Band saw",
        Location::ProductionZone,
        EquipmentStatus::Available,
        None,
    )
    .await;

    let replies = gateway
        .handle(&callback(1, &format!("set_status_{}_Broken", id)))
        .await
        .expect("handle failed");
    assert!(replies[0].text.starts_with("Sorry"));

    let equipment = repository.equipment.get_by_id(id).await.expect("get failed");
    assert_eq!(equipment.status, EquipmentStatus::Available);

    common::delete_equipment(&pool, id).await;
}

#[tokio::test]
#[ignore]
async fn missing_equipment_becomes_a_user_visible_reply() {
    let pool = common::test_pool().await;
    let gateway = Gateway::new(Services::new(Repository::new(pool.clone())));
    let missing = common::missing_equipment_id(&pool).await;

    let replies = gateway
        .handle(&callback(1, &format!("move_to_{}_Inner Courtyard", missing)))
        .await
        .expect("handle failed");
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.starts_with("Sorry"));
}

#[tokio::test]
#[ignore]
async fn movement_log_is_for_registered_viewers_only() {
    let pool = common::test_pool().await;
    let gateway = Gateway::new(Services::new(Repository::new(pool.clone())));

    let replies = gateway
        .handle(&command(-common::unique_telegram_id(), "/movements"))
        .await
        .expect("handle failed");
    assert_eq!(
        replies[0].text,
        "This command is available to registered employees only."
    );
}

mod common;

use assert_matches::assert_matches;
use sea_orm::EntityTrait;
use std::sync::Arc;
use supplier_catalog::{
    commands::{suppliers::CreateSupplierCommand, suppliers::DeleteSupplierCommand, Command},
    entities::supplier,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[tokio::test]
async fn writes_publish_events() {
    let db = Arc::new(common::migrated_pool().await);
    let (sender, mut rx) = EventSender::channel(8);
    let sender = Arc::new(sender);

    let created = CreateSupplierCommand::new("Acme")
        .execute(db.clone(), sender.clone())
        .await
        .unwrap();
    assert_eq!(rx.recv().await, Some(Event::SupplierCreated(created.id)));

    DeleteSupplierCommand { id: created.id }
        .execute(db.clone(), sender.clone())
        .await
        .unwrap();
    assert_eq!(
        rx.recv().await,
        Some(Event::SupplierDeleted {
            supplier_id: created.id,
            parts_removed: 0,
            price_breaks_removed: 0,
        })
    );
}

#[tokio::test]
async fn failed_delivery_keeps_the_committed_write() {
    let db = Arc::new(common::migrated_pool().await);
    let (sender, rx) = EventSender::channel(1);
    drop(rx);

    let err = CreateSupplierCommand::new("Acme")
        .execute(db.clone(), Arc::new(sender))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::EventError(_));

    let stored = supplier::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Acme");
}

mod common;

use assert_matches::assert_matches;
use common::TestApp;
use rust_decimal_macros::dec;
use supplier_catalog::{
    commands::price_breaks::{
        CreatePriceBreakCommand, DeletePriceBreakCommand, UpdatePriceBreakCommand,
    },
    errors::{ServiceError, ValidationKind},
};
use uuid::Uuid;

async fn abc123(app: &TestApp) -> Uuid {
    let acme = app.supplier("Acme").await;
    let widget = app.part("Widget").await;
    app.supplier_part(acme.id, widget.id, "ABC123").await.id
}

#[tokio::test]
async fn price_breaks_are_listed_by_quantity() {
    let app = TestApp::new().await;
    let part_id = abc123(&app).await;

    app.price_break(part_id, 1000, dec!(0.25)).await;
    app.price_break(part_id, 1, dec!(1.5)).await;
    app.price_break(part_id, 100, dec!(0.5)).await;

    let quantities: Vec<i32> = app
        .services
        .price_breaks
        .price_breaks_for(&part_id)
        .await
        .unwrap()
        .into_iter()
        .map(|pb| pb.quantity)
        .collect();
    assert_eq!(quantities, vec![1, 100, 1000]);
}

#[tokio::test]
async fn duplicate_quantities_are_kept() {
    let app = TestApp::new().await;
    let part_id = abc123(&app).await;

    app.price_break(part_id, 10, dec!(2)).await;
    app.price_break(part_id, 10, dec!(1.75)).await;

    let breaks = app.services.price_breaks.price_breaks_for(&part_id).await.unwrap();
    assert_eq!(breaks.len(), 2);
}

#[tokio::test]
async fn describe_renders_cost_at_three_places() {
    let app = TestApp::new().await;
    let part_id = abc123(&app).await;

    let plain = app.price_break(part_id, 10, dec!(12.5)).await;
    let priced = app
        .services
        .price_breaks
        .create_price_break(
            CreatePriceBreakCommand::new(part_id, 250, dec!(0.125)).with_currency("USD"),
        )
        .await
        .unwrap();

    let service = &app.services.price_breaks;
    assert_eq!(
        service.describe_price_break(&plain.id).await.unwrap(),
        "ABC123 - 12.500 @ 10"
    );
    assert_eq!(
        service.describe_price_break(&priced.id).await.unwrap(),
        "ABC123 - 0.125USD @ 250"
    );
}

#[tokio::test]
async fn cost_precision_is_enforced() {
    let app = TestApp::new().await;
    let part_id = abc123(&app).await;

    for cost in [dec!(12.5000), dec!(1.0001), dec!(12345678.5)] {
        let err = app
            .services
            .price_breaks
            .create_price_break(CreatePriceBreakCommand::new(part_id, 1, cost))
            .await
            .unwrap_err();
        assert_eq!(
            err.validation_kinds(),
            vec![("cost", ValidationKind::PrecisionExceeded)],
            "cost {} should be rejected",
            cost
        );
    }

    app.price_break(part_id, 1, dec!(9999999.875)).await;
}

#[tokio::test]
async fn missing_supplier_part_is_not_found() {
    let app = TestApp::new().await;

    let err = app
        .services
        .price_breaks
        .create_price_break(CreatePriceBreakCommand::new(Uuid::new_v4(), 1, dec!(1)))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

#[tokio::test]
async fn update_and_delete() {
    let app = TestApp::new().await;
    let part_id = abc123(&app).await;
    let pb = app.price_break(part_id, 10, dec!(2)).await;

    let mut command = UpdatePriceBreakCommand::from_model(&pb);
    command.quantity = 25;
    command.cost = dec!(1.875);
    command.currency = "EUR".into();
    let updated = app
        .services
        .price_breaks
        .update_price_break(command)
        .await
        .unwrap();
    assert_eq!(updated.quantity, 25);
    assert_eq!(updated.supplier_part_id, part_id);
    assert_eq!(
        app.services
            .price_breaks
            .describe_price_break(&pb.id)
            .await
            .unwrap(),
        "ABC123 - 1.875EUR @ 25"
    );

    let mut command = UpdatePriceBreakCommand::from_model(&updated);
    command.currency = "C".repeat(11);
    let err = app
        .services
        .price_breaks
        .update_price_break(command)
        .await
        .unwrap_err();
    assert_eq!(
        err.validation_kinds(),
        vec![("currency", ValidationKind::TooLong)]
    );

    app.services
        .price_breaks
        .delete_price_break(DeletePriceBreakCommand { id: pb.id })
        .await
        .unwrap();
    assert!(app
        .services
        .price_breaks
        .get_price_break(&pb.id)
        .await
        .unwrap()
        .is_none());

    let err = app
        .services
        .price_breaks
        .delete_price_break(DeletePriceBreakCommand { id: pb.id })
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

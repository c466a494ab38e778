mod common;

use assert_matches::assert_matches;
use common::TestApp;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;
use supplier_catalog::{
    commands::{
        supplier_parts::DeleteSupplierPartCommand, suppliers::DeleteSupplierCommand,
        CascadeSummary,
    },
    entities::{supplier, supplier_part, supplier_price_break},
    errors::ServiceError,
};
use uuid::Uuid;

async fn count_rows(app: &TestApp) -> (usize, usize) {
    let parts = supplier_part::Entity::find()
        .all(app.db.as_ref())
        .await
        .unwrap()
        .len();
    let breaks = supplier_price_break::Entity::find()
        .all(app.db.as_ref())
        .await
        .unwrap()
        .len();
    (parts, breaks)
}

#[tokio::test]
async fn deleting_supplier_removes_parts_and_price_breaks() {
    let app = TestApp::new().await;
    let acme = app.supplier("Acme").await;
    let globex = app.supplier("Globex").await;
    let widget = app.part("Widget").await;
    let gadget = app.part("Gadget").await;

    let w = app.supplier_part(acme.id, widget.id, "W-1").await;
    let g = app.supplier_part(acme.id, gadget.id, "G-1").await;
    let kept = app.supplier_part(globex.id, widget.id, "W-1G").await;
    app.price_break(w.id, 1, dec!(1.25)).await;
    app.price_break(w.id, 100, dec!(1.125)).await;
    app.price_break(g.id, 10, dec!(3.5)).await;
    app.price_break(kept.id, 1, dec!(1.5)).await;

    let summary = app
        .services
        .suppliers
        .delete_supplier(DeleteSupplierCommand { id: acme.id })
        .await
        .unwrap();
    assert_eq!(
        summary,
        CascadeSummary {
            parts_removed: 2,
            price_breaks_removed: 3,
        }
    );

    assert!(app.services.suppliers.get_supplier(&acme.id).await.unwrap().is_none());
    assert_eq!(count_rows(&app).await, (1, 1));
    assert_eq!(
        app.services.price_breaks.price_breaks_for(&kept.id).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn deleting_supplier_part_removes_its_price_breaks() {
    let app = TestApp::new().await;
    let acme = app.supplier("Acme").await;
    let widget = app.part("Widget").await;
    let w = app.supplier_part(acme.id, widget.id, "W-1").await;
    app.price_break(w.id, 1, dec!(2)).await;
    app.price_break(w.id, 50, dec!(1.5)).await;

    let summary = app
        .services
        .supplier_parts
        .delete_supplier_part(DeleteSupplierPartCommand { id: w.id })
        .await
        .unwrap();
    assert_eq!(summary.parts_removed, 1);
    assert_eq!(summary.price_breaks_removed, 2);
    assert_eq!(count_rows(&app).await, (0, 0));

    // The supplier itself is untouched
    assert!(app.services.suppliers.get_supplier(&acme.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_part_removes_every_offering() {
    let app = TestApp::new().await;
    let acme = app.supplier("Acme").await;
    let globex = app.supplier("Globex").await;
    let widget = app.part("Widget").await;
    let a = app.supplier_part(acme.id, widget.id, "W-A").await;
    let b = app.supplier_part(globex.id, widget.id, "W-B").await;
    app.price_break(a.id, 1, dec!(4)).await;
    app.price_break(b.id, 1, dec!(3.75)).await;

    let summary = app.services.parts.delete_part(&widget.id).await.unwrap();
    assert_eq!(summary.parts_removed, 2);
    assert_eq!(summary.price_breaks_removed, 2);
    assert_eq!(count_rows(&app).await, (0, 0));
    assert!(app.services.parts.get_part(&widget.id).await.unwrap().is_none());
}

#[tokio::test]
async fn foreign_keys_cascade_without_the_service() {
    let app = TestApp::new().await;
    let acme = app.supplier("Acme").await;
    let widget = app.part("Widget").await;
    let w = app.supplier_part(acme.id, widget.id, "W-1").await;
    app.price_break(w.id, 1, dec!(2)).await;

    supplier::Entity::delete_by_id(acme.id)
        .exec(app.db.as_ref())
        .await
        .unwrap();

    assert_eq!(count_rows(&app).await, (0, 0));
}

#[tokio::test]
async fn deleting_missing_records_is_not_found() {
    let app = TestApp::new().await;

    let err = app
        .services
        .suppliers
        .delete_supplier(DeleteSupplierCommand { id: Uuid::new_v4() })
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));

    let err = app
        .services
        .supplier_parts
        .delete_supplier_part(DeleteSupplierPartCommand { id: Uuid::new_v4() })
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));

    let err = app.services.parts.delete_part(&Uuid::new_v4()).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

use async_trait::async_trait;
use sea_orm::{EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::{remove_supplier_parts, supplier_part_ids_where, CascadeSummary, Command},
    db::DbPool,
    entities::{supplier, supplier_part},
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Deletes a supplier together with its supplier parts and their price breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSupplierCommand {
    pub id: Uuid,
}

#[async_trait]
impl Command for DeleteSupplierCommand {
    type Result = CascadeSummary;

    #[instrument(skip(self, db_pool, event_sender), fields(supplier_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let txn = db_pool.begin().await?;

        if supplier::Entity::find_by_id(self.id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::not_found("Supplier", self.id));
        }

        let part_ids =
            supplier_part_ids_where(&txn, supplier_part::Column::SupplierId, self.id).await?;
        let summary = remove_supplier_parts(&txn, part_ids).await?;
        supplier::Entity::delete_by_id(self.id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            parts_removed = summary.parts_removed,
            price_breaks_removed = summary.price_breaks_removed,
            "Supplier deleted"
        );
        event_sender
            .send(Event::SupplierDeleted {
                supplier_id: self.id,
                parts_removed: summary.parts_removed,
                price_breaks_removed: summary.price_breaks_removed,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(summary)
    }
}

use async_trait::async_trait;
use sea_orm::{EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::{remove_supplier_parts, CascadeSummary, Command},
    db::DbPool,
    entities::supplier_part,
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Deletes a supplier part and its price breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSupplierPartCommand {
    pub id: Uuid,
}

#[async_trait]
impl Command for DeleteSupplierPartCommand {
    type Result = CascadeSummary;

    #[instrument(skip(self, db_pool, event_sender), fields(supplier_part_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let txn = db_pool.begin().await?;

        if supplier_part::Entity::find_by_id(self.id)
            .one(&txn)
            .await?
            .is_none()
        {
            txn.rollback().await?;
            return Err(ServiceError::not_found("Supplier part", self.id));
        }

        let summary = remove_supplier_parts(&txn, vec![self.id]).await?;
        txn.commit().await?;

        info!(
            price_breaks_removed = summary.price_breaks_removed,
            "Supplier part deleted"
        );
        event_sender
            .send(Event::SupplierPartDeleted {
                supplier_part_id: self.id,
                price_breaks_removed: summary.price_breaks_removed,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(summary)
    }
}

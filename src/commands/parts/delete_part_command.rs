use async_trait::async_trait;
use sea_orm::{EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::{remove_supplier_parts, supplier_part_ids_where, CascadeSummary, Command},
    db::DbPool,
    entities::{part, supplier_part},
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Deletes a part and every supplier offering of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePartCommand {
    pub id: Uuid,
}

#[async_trait]
impl Command for DeletePartCommand {
    type Result = CascadeSummary;

    #[instrument(skip(self, db_pool, event_sender), fields(part_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let txn = db_pool.begin().await?;

        if part::Entity::find_by_id(self.id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::not_found("Part", self.id));
        }

        let part_ids =
            supplier_part_ids_where(&txn, supplier_part::Column::PartId, self.id).await?;
        let summary = remove_supplier_parts(&txn, part_ids).await?;
        part::Entity::delete_by_id(self.id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            parts_removed = summary.parts_removed,
            price_breaks_removed = summary.price_breaks_removed,
            "Part deleted"
        );
        event_sender
            .send(Event::PartDeleted {
                part_id: self.id,
                parts_removed: summary.parts_removed,
                price_breaks_removed: summary.price_breaks_removed,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(summary)
    }
}

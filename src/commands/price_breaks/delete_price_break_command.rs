use async_trait::async_trait;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    db::DbPool,
    entities::supplier_price_break,
    errors::ServiceError,
    events::{Event, EventSender},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePriceBreakCommand {
    pub id: Uuid,
}

#[async_trait]
impl Command for DeletePriceBreakCommand {
    type Result = ();

    #[instrument(skip(self, db_pool, event_sender), fields(price_break_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let result = supplier_price_break::Entity::delete_by_id(self.id)
            .exec(db_pool.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Price break", self.id));
        }

        info!("Price break deleted");
        event_sender
            .send(Event::PriceBreakDeleted(self.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(())
    }
}

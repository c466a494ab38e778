use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    db::DbPool,
    entities::supplier_price_break,
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Replaces quantity, cost and currency of a price break.
///
/// The owning supplier part never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePriceBreakCommand {
    pub id: Uuid,
    pub quantity: i32,
    pub cost: Decimal,
    #[serde(default)]
    pub currency: String,
}

impl UpdatePriceBreakCommand {
    pub fn from_model(price_break: &supplier_price_break::Model) -> Self {
        Self {
            id: price_break.id,
            quantity: price_break.quantity,
            cost: price_break.cost,
            currency: price_break.currency.clone(),
        }
    }
}

#[async_trait]
impl Command for UpdatePriceBreakCommand {
    type Result = supplier_price_break::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(price_break_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let db = db_pool.as_ref();

        let existing = supplier_price_break::Entity::find_by_id(self.id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Price break", self.id))?;

        let candidate = supplier_price_break::Model {
            id: existing.id,
            supplier_part_id: existing.supplier_part_id,
            quantity: self.quantity,
            cost: self.cost,
            currency: self.currency.clone(),
        };
        candidate.validate()?;

        let mut active: supplier_price_break::ActiveModel = existing.into();
        active.quantity = Set(candidate.quantity);
        active.cost = Set(candidate.cost);
        active.currency = Set(candidate.currency);

        let updated = active.update(db).await.map_err(|e| {
            error!("Failed to update price break: {}", e);
            ServiceError::DatabaseError(e)
        })?;

        info!("Price break updated");
        event_sender
            .send(Event::PriceBreakUpdated(updated.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(updated)
    }
}

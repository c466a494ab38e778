use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    db::DbPool,
    entities::{supplier_part, supplier_price_break},
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Adds a quantity/cost tier to a supplier part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePriceBreakCommand {
    pub supplier_part_id: Uuid,
    pub quantity: i32,
    pub cost: Decimal,
    #[serde(default)]
    pub currency: String,
}

impl CreatePriceBreakCommand {
    pub fn new(supplier_part_id: Uuid, quantity: i32, cost: Decimal) -> Self {
        Self {
            supplier_part_id,
            quantity,
            cost,
            currency: String::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

#[async_trait]
impl Command for CreatePriceBreakCommand {
    type Result = supplier_price_break::Model;

    #[instrument(
        skip(self, db_pool, event_sender),
        fields(supplier_part_id = %self.supplier_part_id, quantity = self.quantity)
    )]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let candidate = supplier_price_break::Model {
            id: Uuid::new_v4(),
            supplier_part_id: self.supplier_part_id,
            quantity: self.quantity,
            cost: self.cost,
            currency: self.currency.clone(),
        };
        candidate.validate()?;

        let db = db_pool.as_ref();
        if supplier_part::Entity::find_by_id(self.supplier_part_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found(
                "Supplier part",
                self.supplier_part_id,
            ));
        }

        let saved = candidate.into_insert().insert(db).await.map_err(|e| {
            error!("Failed to create price break: {}", e);
            ServiceError::DatabaseError(e)
        })?;

        info!(price_break_id = %saved.id, "Price break created");
        event_sender
            .send(Event::PriceBreakCreated {
                price_break_id: saved.id,
                supplier_part_id: saved.supplier_part_id,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(saved)
    }
}

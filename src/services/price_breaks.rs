use crate::{
    commands::price_breaks::{
        CreatePriceBreakCommand, DeletePriceBreakCommand, UpdatePriceBreakCommand,
    },
    commands::Command,
    db::DbPool,
    entities::{supplier_part, supplier_price_break},
    errors::ServiceError,
    events::EventSender,
};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Service for quantity-based pricing of supplier parts
#[derive(Clone)]
pub struct PriceBreakService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl PriceBreakService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_price_break(
        &self,
        command: CreatePriceBreakCommand,
    ) -> Result<supplier_price_break::Model, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_price_break(
        &self,
        command: UpdatePriceBreakCommand,
    ) -> Result<supplier_price_break::Model, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_price_break(
        &self,
        command: DeletePriceBreakCommand,
    ) -> Result<(), ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_price_break(
        &self,
        id: &Uuid,
    ) -> Result<Option<supplier_price_break::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(supplier_price_break::Entity::find_by_id(*id).one(db).await?)
    }

    /// Price breaks of one supplier part, smallest quantity first
    #[instrument(skip(self))]
    pub async fn price_breaks_for(
        &self,
        supplier_part_id: &Uuid,
    ) -> Result<Vec<supplier_price_break::Model>, ServiceError> {
        let db = &*self.db_pool;
        let breaks = supplier_price_break::Entity::find()
            .filter(supplier_price_break::Column::SupplierPartId.eq(*supplier_part_id))
            .order_by_asc(supplier_price_break::Column::Quantity)
            .order_by_asc(supplier_price_break::Column::Cost)
            .all(db)
            .await?;
        Ok(breaks)
    }

    /// Display text in the form `"<mpn> - <cost><currency> @ <quantity>"`
    #[instrument(skip(self))]
    pub async fn describe_price_break(&self, id: &Uuid) -> Result<String, ServiceError> {
        let db = &*self.db_pool;
        let price_break = supplier_price_break::Entity::find_by_id(*id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Price break", id))?;

        let part = price_break
            .find_related(supplier_part::Entity)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Supplier part", price_break.supplier_part_id)
            })?;

        Ok(price_break.label(&part).to_string())
    }
}

use crate::{
    commands::suppliers::{CreateSupplierCommand, DeleteSupplierCommand, UpdateSupplierCommand},
    commands::{CascadeSummary, Command},
    db::DbPool,
    entities::supplier,
    errors::ServiceError,
    events::EventSender,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Service for managing suppliers
#[derive(Clone)]
pub struct SupplierService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl SupplierService {
    /// Creates a new supplier service instance
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Creates a new supplier
    #[instrument(skip(self))]
    pub async fn create_supplier(
        &self,
        command: CreateSupplierCommand,
    ) -> Result<supplier::Model, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    /// Updates an existing supplier
    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        command: UpdateSupplierCommand,
    ) -> Result<supplier::Model, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    /// Deletes a supplier along with its supplier parts and their price breaks
    #[instrument(skip(self))]
    pub async fn delete_supplier(
        &self,
        command: DeleteSupplierCommand,
    ) -> Result<CascadeSummary, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    /// Gets a supplier by ID
    #[instrument(skip(self))]
    pub async fn get_supplier(
        &self,
        supplier_id: &Uuid,
    ) -> Result<Option<supplier::Model>, ServiceError> {
        let db = &*self.db_pool;
        let supplier = supplier::Entity::find_by_id(*supplier_id).one(db).await?;
        Ok(supplier)
    }

    /// Gets every supplier whose name matches exactly
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<supplier::Model>, ServiceError> {
        let db = &*self.db_pool;
        let suppliers = supplier::Entity::find()
            .filter(supplier::Column::Name.eq(name))
            .order_by_asc(supplier::Column::Id)
            .all(db)
            .await?;
        Ok(suppliers)
    }

    /// Lists suppliers ordered by name
    #[instrument(skip(self))]
    pub async fn list_suppliers(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<supplier::Model>, ServiceError> {
        let db = &*self.db_pool;
        let suppliers = supplier::Entity::find()
            .order_by_asc(supplier::Column::Name)
            .order_by_asc(supplier::Column::Id)
            .limit(Some(limit))
            .offset(offset)
            .all(db)
            .await?;
        Ok(suppliers)
    }
}

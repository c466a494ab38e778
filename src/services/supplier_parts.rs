use crate::{
    commands::supplier_parts::{
        CreateSupplierPartCommand, DeleteSupplierPartCommand, UpdateSupplierPartCommand,
    },
    commands::{CascadeSummary, Command},
    db::DbPool,
    entities::{supplier, supplier_part},
    errors::ServiceError,
    events::EventSender,
};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Service for managing which suppliers offer which parts
#[derive(Clone)]
pub struct SupplierPartService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl SupplierPartService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_supplier_part(
        &self,
        command: CreateSupplierPartCommand,
    ) -> Result<supplier_part::Model, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_supplier_part(
        &self,
        command: UpdateSupplierPartCommand,
    ) -> Result<supplier_part::Model, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_supplier_part(
        &self,
        command: DeleteSupplierPartCommand,
    ) -> Result<CascadeSummary, ServiceError> {
        command
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_supplier_part(
        &self,
        id: &Uuid,
    ) -> Result<Option<supplier_part::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(supplier_part::Entity::find_by_id(*id).one(db).await?)
    }

    /// Parts offered by one supplier, ordered by MPN
    #[instrument(skip(self))]
    pub async fn parts_for_supplier(
        &self,
        supplier_id: &Uuid,
    ) -> Result<Vec<supplier_part::Model>, ServiceError> {
        let db = &*self.db_pool;
        let parts = supplier_part::Entity::find()
            .filter(supplier_part::Column::SupplierId.eq(*supplier_id))
            .order_by_asc(supplier_part::Column::Mpn)
            .all(db)
            .await?;
        Ok(parts)
    }

    /// Every supplier offering of one part
    #[instrument(skip(self))]
    pub async fn suppliers_for_part(
        &self,
        part_id: &Uuid,
    ) -> Result<Vec<supplier_part::Model>, ServiceError> {
        let db = &*self.db_pool;
        let offerings = supplier_part::Entity::find()
            .filter(supplier_part::Column::PartId.eq(*part_id))
            .order_by_asc(supplier_part::Column::SupplierId)
            .all(db)
            .await?;
        Ok(offerings)
    }

    /// MPNs are not unique, so this can match several supplier parts.
    #[instrument(skip(self))]
    pub async fn find_by_mpn(
        &self,
        mpn: &str,
    ) -> Result<Vec<supplier_part::Model>, ServiceError> {
        let db = &*self.db_pool;
        let parts = supplier_part::Entity::find()
            .filter(supplier_part::Column::Mpn.eq(mpn))
            .order_by_asc(supplier_part::Column::SupplierId)
            .all(db)
            .await?;
        Ok(parts)
    }

    /// Display text in the form `"<mpn> - <supplier name>"`
    #[instrument(skip(self))]
    pub async fn describe_supplier_part(&self, id: &Uuid) -> Result<String, ServiceError> {
        let db = &*self.db_pool;
        let part = supplier_part::Entity::find_by_id(*id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier part", id))?;

        let supplier = part
            .find_related(supplier::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier", part.supplier_id))?;

        Ok(part.label(&supplier).to_string())
    }
}

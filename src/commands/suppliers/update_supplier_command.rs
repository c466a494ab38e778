use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    db::DbPool,
    entities::supplier,
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Replaces every editable field of an existing supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSupplierCommand {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub notes: String,
}

impl UpdateSupplierCommand {
    /// Starts from the current state of `supplier` so callers only touch what changes.
    pub fn from_model(supplier: &supplier::Model) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name.clone(),
            url: supplier.url.clone(),
            address: supplier.address.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            contact: supplier.contact.clone(),
            notes: supplier.notes.clone(),
        }
    }
}

#[async_trait]
impl Command for UpdateSupplierCommand {
    type Result = supplier::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(supplier_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let db = db_pool.as_ref();

        let existing = supplier::Entity::find_by_id(self.id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier", self.id))?;

        let candidate = supplier::Model {
            id: existing.id,
            name: self.name.clone(),
            url: self.url.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            contact: self.contact.clone(),
            notes: self.notes.clone(),
        };
        candidate.validate()?;

        let mut active: supplier::ActiveModel = existing.into();
        active.name = Set(candidate.name);
        active.url = Set(candidate.url);
        active.address = Set(candidate.address);
        active.phone = Set(candidate.phone);
        active.email = Set(candidate.email);
        active.contact = Set(candidate.contact);
        active.notes = Set(candidate.notes);

        let updated = active.update(db).await.map_err(|e| {
            error!("Failed to update supplier: {}", e);
            ServiceError::DatabaseError(e)
        })?;

        info!("Supplier updated");
        event_sender
            .send(Event::SupplierUpdated(updated.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(updated)
    }
}

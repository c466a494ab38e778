use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use super::ensure_references_exist;
use crate::{
    commands::Command,
    db::DbPool,
    entities::supplier_part,
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Replaces every field of a supplier part, including which supplier and part it links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSupplierPartCommand {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub part_id: Uuid,
    pub mpn: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateSupplierPartCommand {
    pub fn from_model(supplier_part: &supplier_part::Model) -> Self {
        Self {
            id: supplier_part.id,
            supplier_id: supplier_part.supplier_id,
            part_id: supplier_part.part_id,
            mpn: supplier_part.mpn.clone(),
            url: supplier_part.url.clone(),
            description: supplier_part.description.clone(),
        }
    }
}

#[async_trait]
impl Command for UpdateSupplierPartCommand {
    type Result = supplier_part::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(supplier_part_id = %self.id))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let db = db_pool.as_ref();

        let existing = supplier_part::Entity::find_by_id(self.id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier part", self.id))?;

        let candidate = supplier_part::Model {
            id: existing.id,
            supplier_id: self.supplier_id,
            part_id: self.part_id,
            mpn: self.mpn.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
        };
        candidate.validate()?;

        if candidate.supplier_id != existing.supplier_id || candidate.part_id != existing.part_id {
            ensure_references_exist(db, candidate.supplier_id, candidate.part_id).await?;
        }

        let mut active: supplier_part::ActiveModel = existing.into();
        active.supplier_id = Set(candidate.supplier_id);
        active.part_id = Set(candidate.part_id);
        active.mpn = Set(candidate.mpn);
        active.url = Set(candidate.url);
        active.description = Set(candidate.description);

        let updated = active.update(db).await.map_err(|e| {
            error!("Failed to update supplier part: {}", e);
            ServiceError::DatabaseError(e)
        })?;

        info!("Supplier part updated");
        event_sender
            .send(Event::SupplierPartUpdated(updated.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(updated)
    }
}

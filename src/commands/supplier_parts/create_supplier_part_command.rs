use async_trait::async_trait;
use sea_orm::ActiveModelTrait;
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

/// Offers an existing part through an existing supplier under the given MPN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSupplierPartCommand {
    pub supplier_id: Uuid,
    pub part_id: Uuid,
    pub mpn: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl CreateSupplierPartCommand {
    pub fn new(supplier_id: Uuid, part_id: Uuid, mpn: impl Into<String>) -> Self {
        Self {
            supplier_id,
            part_id,
            mpn: mpn.into(),
            url: String::new(),
            description: String::new(),
        }
    }
}

#[async_trait]
impl Command for CreateSupplierPartCommand {
    type Result = supplier_part::Model;

    #[instrument(
        skip(self, db_pool, event_sender),
        fields(supplier_id = %self.supplier_id, part_id = %self.part_id, mpn = %self.mpn)
    )]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let candidate = supplier_part::Model {
            id: Uuid::new_v4(),
            supplier_id: self.supplier_id,
            part_id: self.part_id,
            mpn: self.mpn.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
        };
        candidate.validate()?;

        let db = db_pool.as_ref();
        ensure_references_exist(db, self.supplier_id, self.part_id).await?;

        let saved = candidate.into_insert().insert(db).await.map_err(|e| {
            error!("Failed to create supplier part: {}", e);
            ServiceError::DatabaseError(e)
        })?;

        info!(supplier_part_id = %saved.id, "Supplier part created");
        event_sender
            .send(Event::SupplierPartCreated {
                supplier_part_id: saved.id,
                supplier_id: saved.supplier_id,
                part_id: saved.part_id,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(saved)
    }
}

use async_trait::async_trait;
use sea_orm::ActiveModelTrait;
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

/// Registers a new supplier. Only `name` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSupplierCommand {
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

impl CreateSupplierCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn to_model(&self) -> supplier::Model {
        supplier::Model {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            url: self.url.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            contact: self.contact.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[async_trait]
impl Command for CreateSupplierCommand {
    type Result = supplier::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(name = %self.name))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let candidate = self.to_model();
        candidate.validate()?;

        let saved = candidate
            .into_insert()
            .insert(db_pool.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to create supplier: {}", e);
                ServiceError::DatabaseError(e)
            })?;

        info!(supplier_id = %saved.id, "Supplier created");
        event_sender
            .send(Event::SupplierCreated(saved.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(saved)
    }
}

use crate::{
    commands::parts::{DeletePartCommand, RegisterPartCommand},
    commands::{CascadeSummary, Command},
    db::DbPool,
    entities::part,
    errors::ServiceError,
    events::EventSender,
};
use sea_orm::EntityTrait;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Maintains the part identities that supplier parts point at.
#[derive(Clone)]
pub struct PartService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl PartService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn register_part(&self, name: &str) -> Result<part::Model, ServiceError> {
        RegisterPartCommand {
            name: name.to_string(),
        }
        .execute(self.db_pool.clone(), self.event_sender.clone())
        .await
    }

    /// Deletes the part with every supplier part and price break that hangs off it
    #[instrument(skip(self))]
    pub async fn delete_part(&self, id: &Uuid) -> Result<CascadeSummary, ServiceError> {
        DeletePartCommand { id: *id }
            .execute(self.db_pool.clone(), self.event_sender.clone())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_part(&self, id: &Uuid) -> Result<Option<part::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(part::Entity::find_by_id(*id).one(db).await?)
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    db::DbPool,
    entities::part,
    errors::ServiceError,
    events::{Event, EventSender},
};

/// Records a part identity that supplier parts can reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPartCommand {
    pub name: String,
}

#[async_trait]
impl Command for RegisterPartCommand {
    type Result = part::Model;

    #[instrument(skip(self, db_pool, event_sender), fields(name = %self.name))]
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError> {
        let candidate = part::Model {
            id: Uuid::new_v4(),
            name: self.name.clone(),
        };
        candidate.validate()?;

        let saved = part::ActiveModel {
            id: Set(candidate.id),
            name: Set(candidate.name),
        }
        .insert(db_pool.as_ref())
        .await?;

        info!(part_id = %saved.id, "Part registered");
        event_sender
            .send(Event::PartRegistered(saved.id))
            .await
            .map_err(ServiceError::EventError)?;

        Ok(saved)
    }
}

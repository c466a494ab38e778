use crate::{
    db::DbPool,
    entities::{supplier_part, supplier_price_break},
    errors::ServiceError,
    events::EventSender,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod parts;
pub mod price_breaks;
pub mod supplier_parts;
pub mod suppliers;

/// Command trait for implementing the Command Pattern
///
/// This trait allows for encapsulating all the logic needed to execute a business operation
/// into a single object that can be validated, executed, and produce events.
#[async_trait]
pub trait Command: Send + Sync {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command with the given dependencies
    ///
    /// # Arguments
    /// * `db_pool` - Database connection pool for persistence operations
    /// * `event_sender` - Channel to publish domain events
    ///
    /// # Returns
    /// * `Result<Self::Result, ServiceError>` - The result of command execution or an error
    async fn execute(
        &self,
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
    ) -> Result<Self::Result, ServiceError>;
}

/// Dependent rows removed alongside a deleted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeSummary {
    pub parts_removed: u64,
    pub price_breaks_removed: u64,
}

/// Deletes the given supplier parts and every price break attached to them.
///
/// Runs on whatever connection it is handed; callers pass an open
/// transaction so the parent delete commits or rolls back with it.
pub(crate) async fn remove_supplier_parts<C: ConnectionTrait>(
    conn: &C,
    supplier_part_ids: Vec<Uuid>,
) -> Result<CascadeSummary, DbErr> {
    if supplier_part_ids.is_empty() {
        return Ok(CascadeSummary::default());
    }

    let price_breaks = supplier_price_break::Entity::delete_many()
        .filter(supplier_price_break::Column::SupplierPartId.is_in(supplier_part_ids.clone()))
        .exec(conn)
        .await?;

    let parts = supplier_part::Entity::delete_many()
        .filter(supplier_part::Column::Id.is_in(supplier_part_ids))
        .exec(conn)
        .await?;

    Ok(CascadeSummary {
        parts_removed: parts.rows_affected,
        price_breaks_removed: price_breaks.rows_affected,
    })
}

/// Ids of supplier parts matching `column = value`.
pub(crate) async fn supplier_part_ids_where<C: ConnectionTrait>(
    conn: &C,
    column: supplier_part::Column,
    value: Uuid,
) -> Result<Vec<Uuid>, DbErr> {
    let parts = supplier_part::Entity::find()
        .filter(column.eq(value))
        .all(conn)
        .await?;
    Ok(parts.into_iter().map(|p| p.id).collect())
}

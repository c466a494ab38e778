pub mod create_supplier_part_command;
pub mod delete_supplier_part_command;
pub mod update_supplier_part_command;

pub use create_supplier_part_command::CreateSupplierPartCommand;
pub use delete_supplier_part_command::DeleteSupplierPartCommand;
pub use update_supplier_part_command::UpdateSupplierPartCommand;

use sea_orm::{ConnectionTrait, EntityTrait};
use uuid::Uuid;

use crate::{
    entities::{part, supplier},
    errors::ServiceError,
};

/// Fails with `NotFound` unless both the supplier and the part exist.
pub(crate) async fn ensure_references_exist<C: ConnectionTrait>(
    conn: &C,
    supplier_id: Uuid,
    part_id: Uuid,
) -> Result<(), ServiceError> {
    if supplier::Entity::find_by_id(supplier_id)
        .one(conn)
        .await?
        .is_none()
    {
        return Err(ServiceError::not_found("Supplier", supplier_id));
    }
    if part::Entity::find_by_id(part_id).one(conn).await?.is_none() {
        return Err(ServiceError::not_found("Part", part_id));
    }
    Ok(())
}

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{Set, TryIntoModel};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::validation::{validate_optional_url, validate_required};

/// A part as offered by one supplier, identified by its manufacturer part number.
///
/// A part may be available from several suppliers, and the same MPN may
/// appear more than once for a supplier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "supplier_parts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub supplier_id: Uuid,

    pub part_id: Uuid,

    #[validate(
        custom = "validate_required",
        length(max = 100, message = "MPN must be at most 100 characters")
    )]
    pub mpn: String,

    #[validate(
        custom = "validate_optional_url",
        length(max = 200, message = "URL must be at most 200 characters")
    )]
    pub url: String,

    #[validate(length(max = 250, message = "Description must be at most 250 characters"))]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Supplier,
    #[sea_orm(
        belongs_to = "super::part::Entity",
        from = "Column::PartId",
        to = "super::part::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Part,
    #[sea_orm(has_many = "super::supplier_price_break::Entity")]
    PriceBreaks,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Part.def()
    }
}

impl Related<super::supplier_price_break::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceBreaks.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, insert: bool) -> Result<Self, DbErr> {
        let mut active_model = self;
        if insert && active_model.id.is_not_set() {
            active_model.id = Set(Uuid::new_v4());
        }

        if let Ok(model) = active_model.clone().try_into_model() {
            model
                .validate()
                .map_err(|e| DbErr::Custom(format!("supplier part rejected: {}", e)))?;
        }

        Ok(active_model)
    }
}

impl Model {
    /// Builds a supplier part linking `supplier_id` and `part_id`.
    ///
    /// Existence of the referenced rows is checked at write time, not here.
    pub fn new(
        supplier_id: Uuid,
        part_id: Uuid,
        mpn: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let supplier_part = Self {
            id: Uuid::new_v4(),
            supplier_id,
            part_id,
            mpn: mpn.into(),
            url: String::new(),
            description: String::new(),
        };

        supplier_part.validate()?;
        Ok(supplier_part)
    }

    pub fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            supplier_id: Set(self.supplier_id),
            part_id: Set(self.part_id),
            mpn: Set(self.mpn),
            url: Set(self.url),
            description: Set(self.description),
        }
    }

    /// Display text in the form `"<mpn> - <supplier name>"`.
    pub fn label<'a>(&'a self, supplier: &'a super::supplier::Model) -> SupplierPartLabel<'a> {
        SupplierPartLabel {
            mpn: &self.mpn,
            supplier_name: &supplier.name,
        }
    }
}

/// Borrowed display text for a supplier part together with its supplier.
#[derive(Debug, Clone, Copy)]
pub struct SupplierPartLabel<'a> {
    mpn: &'a str,
    supplier_name: &'a str,
}

impl fmt::Display for SupplierPartLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.mpn, self.supplier_name)
    }
}

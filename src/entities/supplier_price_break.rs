use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{Set, TryIntoModel};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::validation::{validate_cost, COST_DECIMAL_PLACES};

/// Unit cost of a supplier part when ordering at least `quantity` units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "supplier_price_breaks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub supplier_part_id: Uuid,

    pub quantity: i32,

    #[sea_orm(column_type = "Decimal(Some((10, 3)))")]
    #[validate(custom = "validate_cost")]
    pub cost: Decimal,

    #[validate(length(max = 10, message = "Currency must be at most 10 characters"))]
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_part::Entity",
        from = "Column::SupplierPartId",
        to = "super::supplier_part::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SupplierPart,
}

impl Related<super::supplier_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierPart.def()
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
                .map_err(|e| DbErr::Custom(format!("price break rejected: {}", e)))?;
        }

        Ok(active_model)
    }
}

impl Model {
    /// Builds a price break with no currency.
    pub fn new(
        supplier_part_id: Uuid,
        quantity: i32,
        cost: Decimal,
    ) -> Result<Self, ValidationErrors> {
        let price_break = Self {
            id: Uuid::new_v4(),
            supplier_part_id,
            quantity,
            cost,
            currency: String::new(),
        };

        price_break.validate()?;
        Ok(price_break)
    }

    pub fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            supplier_part_id: Set(self.supplier_part_id),
            quantity: Set(self.quantity),
            cost: Set(self.cost),
            currency: Set(self.currency),
        }
    }

    /// Display text in the form `"<mpn> - <cost><currency> @ <quantity>"`.
    pub fn label<'a>(&'a self, part: &'a super::supplier_part::Model) -> PriceBreakLabel<'a> {
        PriceBreakLabel {
            price_break: self,
            mpn: &part.mpn,
        }
    }
}

/// Borrowed display text for a price break together with its supplier part.
#[derive(Debug, Clone, Copy)]
pub struct PriceBreakLabel<'a> {
    price_break: &'a Model,
    mpn: &'a str,
}

impl fmt::Display for PriceBreakLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cost always renders at column scale, whatever scale the backend returned.
        let cost = self.price_break.cost.round_dp(COST_DECIMAL_PLACES);
        write!(
            f,
            "{} - {:.3}{} @ {}",
            self.mpn, cost, self.price_break.currency, self.price_break.quantity
        )
    }
}

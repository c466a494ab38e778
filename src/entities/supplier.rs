use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{Set, TryIntoModel};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::validation::{validate_optional_email, validate_optional_url, validate_required};

/// A manufacturer or supplier of parts.
///
/// Only `name` is required; every other field stores an empty string when
/// unset.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[validate(
        custom = "validate_required",
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[validate(
        custom = "validate_optional_url",
        length(max = 200, message = "URL must be at most 200 characters")
    )]
    pub url: String,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: String,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: String,

    #[validate(
        custom = "validate_optional_email",
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[validate(length(max = 100, message = "Contact must be at most 100 characters"))]
    pub contact: String,

    #[sea_orm(column_type = "Text")]
    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supplier_part::Entity")]
    SupplierParts,
}

impl Related<super::supplier_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierParts.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, insert: bool) -> Result<Self, DbErr> {
        let mut active_model = self;
        if insert && active_model.id.is_not_set() {
            active_model.id = Set(Uuid::new_v4());
        }

        // Partially populated updates are checked by the command that issued them.
        if let Ok(model) = active_model.clone().try_into_model() {
            model
                .validate()
                .map_err(|e| DbErr::Custom(format!("supplier rejected: {}", e)))?;
        }

        Ok(active_model)
    }
}

impl Model {
    /// Builds a supplier with only a name; all other fields start empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationErrors> {
        let supplier = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            url: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            contact: String::new(),
            notes: String::new(),
        };

        supplier.validate()?;
        Ok(supplier)
    }

    /// Active model with every column marked for insertion.
    pub fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            url: Set(self.url),
            address: Set(self.address),
            phone: Set(self.phone),
            email: Set(self.email),
            contact: Set(self.contact),
            notes: Set(self.notes),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{validation_kinds, ValidationKind};
    use rstest::rstest;

    #[test]
    fn name_only_supplier_has_empty_optionals() {
        let supplier = Model::new("Acme").expect("valid supplier");
        assert_eq!(supplier.name, "Acme");
        assert!(supplier.url.is_empty());
        assert!(supplier.address.is_empty());
        assert!(supplier.phone.is_empty());
        assert!(supplier.email.is_empty());
        assert!(supplier.contact.is_empty());
        assert!(supplier.notes.is_empty());
    }

    #[test]
    fn displays_as_name() {
        let supplier = Model::new("Digi-Key").unwrap();
        assert_eq!(supplier.to_string(), "Digi-Key");
    }

    #[test]
    fn blank_name_is_missing() {
        let errors = Model::new("  ").unwrap_err();
        assert_eq!(
            validation_kinds(&errors),
            vec![("name", ValidationKind::Missing)]
        );
    }

    #[test]
    fn long_name_is_rejected() {
        let errors = Model::new("n".repeat(101)).unwrap_err();
        assert_eq!(
            validation_kinds(&errors),
            vec![("name", ValidationKind::TooLong)]
        );
    }

    #[rstest]
    #[case("address", 201)]
    #[case("phone", 51)]
    #[case("contact", 101)]
    #[case("notes", 501)]
    fn optional_text_limits(#[case] field: &'static str, #[case] len: usize) {
        let mut supplier = Model::new("Acme").unwrap();
        let value = "x".repeat(len);
        match field {
            "address" => supplier.address = value,
            "phone" => supplier.phone = value,
            "contact" => supplier.contact = value,
            "notes" => supplier.notes = value,
            _ => unreachable!(),
        }

        let errors = supplier.validate().unwrap_err();
        assert_eq!(validation_kinds(&errors), vec![(field, ValidationKind::TooLong)]);
    }

    #[test]
    fn limits_are_inclusive() {
        let mut supplier = Model::new("n".repeat(100)).unwrap();
        supplier.address = "a".repeat(200);
        supplier.phone = "1".repeat(50);
        supplier.contact = "c".repeat(100);
        supplier.notes = "n".repeat(500);
        assert!(supplier.validate().is_ok());
    }

    #[test]
    fn url_and_email_formats() {
        let mut supplier = Model::new("Acme").unwrap();
        supplier.url = "not a url".into();
        supplier.email = "nobody".into();

        let mut kinds = validation_kinds(&supplier.validate().unwrap_err());
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                ("email", ValidationKind::InvalidFormat),
                ("url", ValidationKind::InvalidFormat),
            ]
        );

        supplier.url = "https://acme.example".into();
        supplier.email = "orders@acme.example".into();
        assert!(supplier.validate().is_ok());
    }

    #[rstest]
    #[case(200, true)]
    #[case(201, false)]
    fn url_length_limit(#[case] len: usize, #[case] accepted: bool) {
        let mut supplier = Model::new("Acme").unwrap();
        let base = "https://example.com/";
        supplier.url = format!("{}{}", base, "a".repeat(len - base.len()));
        assert_eq!(supplier.url.len(), len);

        match supplier.validate() {
            Ok(()) => assert!(accepted),
            Err(errors) => {
                assert!(!accepted);
                assert_eq!(validation_kinds(&errors), vec![("url", ValidationKind::TooLong)]);
            }
        }
    }

    #[test]
    fn email_longer_than_254_is_rejected() {
        let mut supplier = Model::new("Acme").unwrap();
        let domain = format!("{}.com", vec!["d".repeat(60); 4].join("."));
        supplier.email = format!("{}@{}", "u".repeat(64), domain);
        assert!(supplier.email.len() > 254);

        let kinds = validation_kinds(&supplier.validate().unwrap_err());
        assert!(kinds.contains(&("email", ValidationKind::TooLong)));
    }
}

pub mod part;
pub mod supplier;
pub mod supplier_part;
pub mod supplier_price_break;
pub mod validation;

pub use part::Entity as Part;
pub use supplier::Entity as Supplier;
pub use supplier_part::Entity as SupplierPart;
pub use supplier_price_break::Entity as SupplierPriceBreak;

// Catalog services
pub mod price_breaks;
pub mod supplier_parts;
pub mod suppliers;

// External part stand-in
pub mod parts;

// Service factory for dependency injection
pub mod factory;

pub use factory::{ServiceContainer, ServiceFactory};

//! Supplier catalog library
//!
//! Suppliers, the parts they offer, and quantity price breaks for those
//! parts, persisted through SeaORM.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod migrator;
pub mod services;

pub use commands::{CascadeSummary, Command};
pub use errors::{ServiceError, ValidationKind};
pub use events::{Event, EventSender};
pub use services::{ServiceContainer, ServiceFactory};

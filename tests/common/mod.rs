#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal::Decimal;
use supplier_catalog::{
    commands::{
        price_breaks::CreatePriceBreakCommand, supplier_parts::CreateSupplierPartCommand,
        suppliers::CreateSupplierCommand,
    },
    db::{self, DbConfig, DbPool},
    entities::{part, supplier, supplier_part, supplier_price_break},
    events::{self, EventSender},
    services::{ServiceContainer, ServiceFactory},
};
use uuid::Uuid;

/// Services backed by a migrated in-memory SQLite database.
pub struct TestApp {
    pub db: Arc<DbPool>,
    pub services: ServiceContainer,
    _event_task: tokio::task::JoinHandle<u64>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db = Arc::new(migrated_pool().await);

        let (event_sender, event_rx) = EventSender::channel(256);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let factory = ServiceFactory::new(db.clone(), event_sender);
        let services = ServiceContainer::new(&factory);

        Self {
            db,
            services,
            _event_task: event_task,
        }
    }

    pub async fn part(&self, name: &str) -> part::Model {
        self.services
            .parts
            .register_part(name)
            .await
            .expect("register part")
    }

    pub async fn supplier(&self, name: &str) -> supplier::Model {
        self.services
            .suppliers
            .create_supplier(CreateSupplierCommand::new(name))
            .await
            .expect("create supplier")
    }

    pub async fn supplier_part(
        &self,
        supplier_id: Uuid,
        part_id: Uuid,
        mpn: &str,
    ) -> supplier_part::Model {
        self.services
            .supplier_parts
            .create_supplier_part(CreateSupplierPartCommand::new(supplier_id, part_id, mpn))
            .await
            .expect("create supplier part")
    }

    pub async fn price_break(
        &self,
        supplier_part_id: Uuid,
        quantity: i32,
        cost: Decimal,
    ) -> supplier_price_break::Model {
        self.services
            .price_breaks
            .create_price_break(CreatePriceBreakCommand::new(supplier_part_id, quantity, cost))
            .await
            .expect("create price break")
    }
}

pub async fn migrated_pool() -> DbPool {
    let pool = db::establish_connection_with_config(&DbConfig::in_memory())
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations in tests");
    pool
}

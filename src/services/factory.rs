use std::sync::Arc;

use crate::{
    db::DbPool,
    events::EventSender,
    services::{
        parts::PartService, price_breaks::PriceBreakService,
        supplier_parts::SupplierPartService, suppliers::SupplierService,
    },
};

/// Factory for creating service instances with shared dependencies
pub struct ServiceFactory {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl ServiceFactory {
    /// Creates a new service factory with the given dependencies
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender: Arc::new(event_sender),
        }
    }

    pub fn supplier_service(&self) -> SupplierService {
        SupplierService::new(self.db_pool.clone(), self.event_sender.clone())
    }

    pub fn supplier_part_service(&self) -> SupplierPartService {
        SupplierPartService::new(self.db_pool.clone(), self.event_sender.clone())
    }

    pub fn price_break_service(&self) -> PriceBreakService {
        PriceBreakService::new(self.db_pool.clone(), self.event_sender.clone())
    }

    pub fn part_service(&self) -> PartService {
        PartService::new(self.db_pool.clone(), self.event_sender.clone())
    }

    /// Gets a reference to the database pool
    pub fn db_pool(&self) -> &Arc<DbPool> {
        &self.db_pool
    }

    /// Gets a reference to the event sender
    pub fn event_sender(&self) -> &EventSender {
        &self.event_sender
    }
}

/// Service container holding all service instances
#[derive(Clone)]
pub struct ServiceContainer {
    pub suppliers: Arc<SupplierService>,
    pub supplier_parts: Arc<SupplierPartService>,
    pub price_breaks: Arc<PriceBreakService>,
    pub parts: Arc<PartService>,
}

impl ServiceContainer {
    /// Creates a new service container with all services initialized
    pub fn new(factory: &ServiceFactory) -> Self {
        Self {
            suppliers: Arc::new(factory.supplier_service()),
            supplier_parts: Arc::new(factory.supplier_part_service()),
            price_breaks: Arc::new(factory.price_break_service()),
            parts: Arc::new(factory.part_service()),
        }
    }
}

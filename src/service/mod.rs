//! Service layer: business logic orchestration.
//!
//! [`AccountService`] sequences the chain client and the snapshot store
//! for the ingestion and listing endpoints.

pub mod account_service;

pub use account_service::AccountService;

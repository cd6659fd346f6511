//! # tron-accounts-gateway
//!
//! REST gateway that records TRON account resource snapshots.
//!
//! `POST /api/v1/create_account_info` validates an address, reads its
//! energy, balance and bandwidth from a TRON full node (two concurrent
//! calls), and appends one snapshot row. `GET /api/v1/get_accounts_info`
//! pages over addresses and returns each one's latest snapshot.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AccountService (service/)
//!     │       ├── address validation + normalization (domain/)
//!     │       └── ChainClient → TRON HTTP API (chain/)
//!     │
//!     └── SnapshotStore (persistence/)
//!             ├── PostgreSQL
//!             └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

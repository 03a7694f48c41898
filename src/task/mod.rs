//! Task management for Taskboard.
//!
//! Tasks are created for an owning user, fetched by identifier (a missing
//! identifier surfaces as [`services::TaskServiceError::NotFound`]), listed
//! through a [`domain::TaskFilter`], moved between statuses and deleted. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

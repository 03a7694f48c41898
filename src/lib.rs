//! Taskboard: user-owned task records behind a narrow storage port.
//!
//! This crate provides the service layer that sits between a transport
//! (for example an HTTP controller) and task persistence.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task entity, identifiers and input descriptors
//! - **Ports**: The `TaskRepository` trait every storage backend implements
//! - **Adapters**: In-memory and `PostgreSQL` repository implementations
//!
//! # Modules
//!
//! - [`task`]: Task lookup, creation, listing, status updates and deletion
//! - [`config`]: Database configuration and connection pool setup

pub mod config;
pub mod task;

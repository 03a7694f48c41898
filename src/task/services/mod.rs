//! Application services for task orchestration.

mod task_service;

pub use task_service::{TaskService, TaskServiceError, TaskServiceResult};

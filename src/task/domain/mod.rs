//! Domain model for user-owned tasks.
//!
//! The domain holds the task entity, its identifiers and the input
//! descriptors used by the service layer. Nothing here touches storage.

mod error;
mod ids;
mod request;
mod task;

pub use error::{ParseIdError, ParseTaskStatusError};
pub use ids::{TaskId, UserId};
pub use request::{CreateTaskRequest, TaskFilter};
pub use task::{PersistedTaskData, Task, TaskStatus};

//! Service layer for task lookup, creation and housekeeping.

use crate::task::{
    domain::{CreateTaskRequest, Task, TaskFilter, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("Task with ID:{0} not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Each operation issues exactly one repository call.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        debug!(task_id = %id, "looking up task");
        let Some(task) = self.repository.find_by_id(id).await? else {
            debug!(task_id = %id, "task not found");
            return Err(TaskServiceError::NotFound(id));
        };
        Ok(task)
    }

    /// Creates a task and returns the stored record as the repository
    /// reports it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let task = self.repository.create(&request).await?;
        debug!(task_id = %task.id(), owner = %task.owner(), "created task");
        Ok(task)
    }

    /// Lists tasks matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the query fails.
    pub async fn get_tasks(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list(filter).await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Moves a task to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or [`TaskServiceError::Repository`] when the update fails.
    pub async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskServiceResult<Task> {
        debug!(task_id = %id, %status, "updating task status");
        self.repository
            .update_status(id, status)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task was removed, or
    /// [`TaskServiceError::Repository`] when the delete fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        debug!(task_id = %id, "deleting task");
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(TaskServiceError::NotFound(id))
        }
    }
}

//! Input descriptors for task creation and listing.

use super::{Task, TaskStatus, UserId};
use serde::{Deserialize, Serialize};

/// Fields required to create a task.
///
/// Carries no validation; any input checks belong to the caller's boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    owner: UserId,
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request for a task owned by `owner`.
    #[must_use]
    pub fn new(owner: UserId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            owner,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Optional criteria for listing tasks.
///
/// Unset fields do not constrain the result, so the default filter matches
/// every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    search: Option<String>,
    owner: Option<UserId>,
}

impl TaskFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to tasks in `status`.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to tasks whose title or description contains
    /// `search`, ignoring ASCII case.
    ///
    /// Only ASCII letters are folded by [`Self::matches`]. The `PostgreSQL`
    /// adapter uses `ILIKE`, whose handling of non-ASCII case follows the
    /// database collation, so such searches may differ between adapters.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts results to tasks owned by `owner`.
    #[must_use]
    pub const fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Returns the status criterion, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the search text, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the owner criterion, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns `true` when `task` satisfies every criterion set on the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_matches = self.status.is_none_or(|status| task.status() == status);
        let owner_matches = self.owner.is_none_or(|owner| task.owner() == owner);
        let search_matches = self.search.as_deref().is_none_or(|search| {
            let needle = search.to_ascii_lowercase();
            task.title().to_ascii_lowercase().contains(&needle)
                || task.description().to_ascii_lowercase().contains(&needle)
        });
        status_matches && owner_matches && search_matches
    }
}

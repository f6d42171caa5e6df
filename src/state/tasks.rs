//! Publish-task list state for the dashboard and posts pages.
//!
//! DESIGN
//! ======
//! Separating list state from page rendering keeps the status filter and
//! the debounced search text composable: both narrow the same loaded list
//! through one pure projection.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{TaskStats, TaskSummary};

/// Status filter tabs on the posts page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Scheduled,
    Processing,
    Completed,
    Failed,
    Cancelled,
}

impl StatusFilter {
    /// All filters in display order.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::Pending,
        Self::Scheduled,
        Self::Processing,
        Self::Completed,
        Self::Failed,
        Self::Cancelled,
    ];

    /// Query value sent to the API; `None` means no filter.
    pub fn as_query(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Pending => Some("pending"),
            Self::Scheduled => Some("scheduled"),
            Self::Processing => Some("processing"),
            Self::Completed => Some("completed"),
            Self::Failed => Some("failed"),
            Self::Cancelled => Some("cancelled"),
        }
    }

    /// Localized tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Pending => "Ожидают",
            Self::Scheduled => "Запланированы",
            Self::Processing => "Публикуются",
            Self::Completed => "Опубликованы",
            Self::Failed => "Ошибки",
            Self::Cancelled => "Отменены",
        }
    }

    /// True when `status` passes this filter.
    fn matches(self, status: &str) -> bool {
        self.as_query().is_none_or(|wanted| wanted == status)
    }
}

/// Shared task list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<TaskSummary>,
    pub stats: Option<TaskStats>,
    pub loading: bool,
    pub error: Option<String>,
    pub status_filter: StatusFilter,
    pub search: String,
}

impl TasksState {
    /// Tasks passing the current status filter and search text.
    ///
    /// The search matches case-insensitively against the post text and the
    /// channel id, so debounced search-box input narrows the list without
    /// refetching.
    pub fn visible_tasks(&self) -> Vec<&TaskSummary> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|task| self.status_filter.matches(&task.status))
            .filter(|task| {
                needle.is_empty()
                    || task.text.to_lowercase().contains(&needle)
                    || task.channel_id.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

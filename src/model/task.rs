use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Uid;

/// Task urgency shown on the board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: &'static [Priority] = &[Priority::Urgent, Priority::Medium, Priority::Low];

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Urgent" => Some(Priority::Urgent),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        self.display_name()
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    TechnicalTask,
    UserStory,
}

impl Category {
    pub const ALL: &'static [Category] = &[Category::TechnicalTask, Category::UserStory];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::TechnicalTask => "Technical Task",
            Category::UserStory => "User Story",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "TechnicalTask" => Some(Category::TechnicalTask),
            "UserStory" => Some(Category::UserStory),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::TechnicalTask => "TechnicalTask",
            Category::UserStory => "UserStory",
        }
    }
}

/// Board column a task lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    AwaitFeedback,
    Done,
}

impl TaskStatus {
    /// Columns in board order.
    pub const ALL: &'static [TaskStatus] = &[
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::AwaitFeedback,
        TaskStatus::Done,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::AwaitFeedback => "Await feedback",
            TaskStatus::Done => "Done",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ToDo" => Some(TaskStatus::ToDo),
            "InProgress" => Some(TaskStatus::InProgress),
            "AwaitFeedback" => Some(TaskStatus::AwaitFeedback),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "ToDo",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::AwaitFeedback => "AwaitFeedback",
            TaskStatus::Done => "Done",
        }
    }
}

/// A checklist item on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub name: String,
    pub done: bool,
}

impl Subtask {
    pub fn create(name: String) -> Self {
        Self { name, done: false }
    }
}

/// A board task. `assigned` holds uids of contacts/users working on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub status: TaskStatus,
    pub assigned: Vec<Uid>,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn create(title: String) -> Self {
        Self {
            id: Uid::generate(),
            title,
            description: None,
            due_date: None,
            priority: Some(Priority::Medium),
            category: None,
            status: TaskStatus::ToDo,
            assigned: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    /// Completed/total subtask counts for the board card progress bar.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.done).count();
        (done, self.subtasks.len())
    }
}

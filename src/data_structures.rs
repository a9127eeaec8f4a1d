// src/data_structures.rs

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    description: String,
    completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// There is no way back to pending once a task is completed.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => f.write_str("Pending"),
            TaskStatus::Completed => f.write_str("Completed"),
        }
    }
}

// src/task_store.rs

use tracing::debug;

use crate::data_structures::Task;
use crate::error::StoreError;

/// Ordered, in-memory list of tasks. Insertion order is display order.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pending task and returns its position.
    ///
    /// Input is not validated here; the form rejects empty fields first.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> usize {
        self.tasks.push(Task::new(title, description));
        let index = self.tasks.len() - 1;
        debug!(index, len = self.tasks.len(), "task added");
        index
    }

    /// Removes the task at `index`; later positions shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Task, StoreError> {
        self.check_index(index)?;
        let task = self.tasks.remove(index);
        debug!(index, len = self.tasks.len(), "task removed");
        Ok(task)
    }

    pub fn mark_completed_at(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.tasks[index].mark_completed();
        debug!(index, "task marked completed");
        Ok(())
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }
}

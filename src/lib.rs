// src/lib.rs

pub mod cli;
pub mod data_structures;
pub mod error;
pub mod task_store;
pub mod ui;

pub use data_structures::{Task, TaskStatus};
pub use error::{InputError, StoreError};
pub use task_store::TaskStore;
pub use ui::{Message, QuickTaskTracker};

// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task index {index} out of range (len={len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Missing input or selection. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter both title and description.")]
    MissingFields,

    #[error("Please select a task to remove.")]
    NoSelectionToRemove,

    #[error("Please select a task to mark as completed.")]
    NoSelectionToComplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_render_user_messages() {
        assert_eq!(
            InputError::MissingFields.to_string(),
            "Please enter both title and description."
        );
        assert_eq!(
            InputError::NoSelectionToRemove.to_string(),
            "Please select a task to remove."
        );
        assert_eq!(
            InputError::NoSelectionToComplete.to_string(),
            "Please select a task to mark as completed."
        );
    }

    #[test]
    fn store_error_mentions_index_and_len() {
        let err = StoreError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "task index 3 out of range (len=1)");
    }
}

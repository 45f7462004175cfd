//! Todo Editor
//!
//! Form state of the add/edit form above the list.

use crate::error::ValidationError;
use crate::model::{TodoId, TodoItem, TodoPatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEditor {
    pub title: String,
    pub description: String,
    /// Item being edited; `None` means the form adds a new todo
    pub editing: Option<TodoId>,
}

impl TodoEditor {
    pub fn begin_edit(&mut self, item: &TodoItem) {
        self.title = item.title.clone();
        self.description = item.description.clone().unwrap_or_default();
        self.editing = Some(item.id.clone());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Drops edit mode if `id` was the item being edited (e.g. it was deleted).
    pub fn forget(&mut self, id: &TodoId) {
        if self.editing.as_ref() == Some(id) {
            self.clear();
        }
    }

    pub fn patch(&self) -> Result<TodoPatch, ValidationError> {
        TodoPatch::new(&self.title, &self.description)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Todo"
        } else {
            "Add Todo"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_edit_and_clear() {
        let mut editor = TodoEditor::default();
        assert_eq!(editor.submit_label(), "Add Todo");

        editor.begin_edit(&TodoItem::new(4u64, "Read", Some("chapter 2")));
        assert_eq!(editor.editing, Some(TodoId::from(4u64)));
        assert_eq!(editor.description, "chapter 2");
        assert_eq!(editor.submit_label(), "Update Todo");

        editor.clear();
        assert_eq!(editor, TodoEditor::default());
    }

    #[test]
    fn test_forget_only_matching_item() {
        let mut editor = TodoEditor::default();
        editor.begin_edit(&TodoItem::new(4u64, "Read", None));

        editor.forget(&TodoId::from(5u64));
        assert!(editor.is_editing());

        editor.forget(&TodoId::from(4u64));
        assert!(!editor.is_editing());
        assert!(editor.title.is_empty());
    }

    #[test]
    fn test_patch_validation() {
        let editor = TodoEditor::default();
        assert_eq!(editor.patch(), Err(ValidationError::Required("Title")));
    }
}

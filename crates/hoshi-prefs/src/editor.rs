//! Picker and text sub-editors.
//!
//! Choice and text fields are not edited in place: the presentation layer opens
//! a sub-editor described by an [`EditorRequest`] and reports back with an
//! [`EditorResponse`]. The field id travels with both, so a single response
//! handler can serve every field of a screen.

use crate::edit::EditInput;

/// Which value a text editor edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget<F> {
    /// The value of a positive number field.
    Value(F),
    /// A new entry appended to a number list.
    NewEntry(F),
    /// An existing entry of a number list.
    Entry {
        /// The number list field.
        field: F,
        /// Position of the entry.
        index: usize,
    },
}

impl<F: Copy> TextTarget<F> {
    /// Returns the field being edited.
    #[must_use]
    pub fn field(self) -> F {
        match self {
            Self::Value(field) | Self::NewEntry(field) | Self::Entry { field, .. } => field,
        }
    }

    pub(crate) fn into_input(self, text: String) -> EditInput {
        match self {
            Self::Value(_) => EditInput::Text(text),
            Self::NewEntry(_) => EditInput::AddNumber(text),
            Self::Entry { index, .. } => EditInput::ReplaceNumber { index, text },
        }
    }
}

/// A sub-editor the presentation layer should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRequest<F> {
    /// Pick one entry of a list.
    Picker {
        /// The field being edited.
        field: F,
        /// Editor title.
        title: &'static str,
        /// Entries in display order.
        labels: Vec<String>,
        /// Entry matching the current value, if any.
        selected: Option<usize>,
    },
    /// Enter free-form text.
    Text {
        /// The value being edited.
        target: TextTarget<F>,
        /// Editor title.
        title: &'static str,
        /// Initial text.
        text: String,
    },
}

/// How the user closed a sub-editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorResponse<F> {
    /// An entry was picked.
    Picked {
        /// The field the picker was opened for.
        field: F,
        /// Index of the picked entry.
        index: usize,
    },
    /// Text was confirmed.
    Entered {
        /// The value the editor was opened for.
        target: TextTarget<F>,
        /// Confirmed text.
        text: String,
    },
    /// The editor was dismissed; its transient input is discarded.
    Cancelled,
}

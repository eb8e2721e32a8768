//! User edits and their outcomes.

use crate::{field::ValueKind, screen::GroupIndex};

/// A committed user input aimed at one field.
#[derive(Debug, Clone, PartialEq)]
pub enum EditInput {
    /// New switch state.
    Toggle(bool),
    /// New stepper value.
    Step(i64),
    /// New slider position, in control units.
    Slide(f64),
    /// Index of the picked entry.
    Pick(usize),
    /// Text entered for a positive number field.
    Text(String),
    /// Text entered for a new entry of a number list.
    AddNumber(String),
    /// Text entered for an existing entry of a number list.
    ReplaceNumber {
        /// Position of the entry in the list.
        index: usize,
        /// Entered text.
        text: String,
    },
    /// Removes an entry of a number list.
    RemoveNumber(usize),
}

impl EditInput {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::Step(_) => "step",
            Self::Slide(_) => "slide",
            Self::Pick(_) => "pick",
            Self::Text(_) => "text",
            Self::AddNumber(_) => "add number",
            Self::ReplaceNumber { .. } => "replace number",
            Self::RemoveNumber(_) => "remove number",
        }
    }
}

/// Rows the presentation layer has to redraw after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh<F> {
    /// The row of a single field.
    Row(F),
    /// Every row of a group.
    Group(GroupIndex),
    /// The whole screen.
    Screen,
}

/// Result of an accepted edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EditOutcome<F> {
    /// The model was written; the given rows are stale.
    Applied(Refresh<F>),
    /// Nothing was written and nothing was notified.
    Unchanged,
}

impl<F> EditOutcome<F> {
    /// Returns the rows to redraw, if any.
    #[must_use]
    pub fn refresh(&self) -> Option<&Refresh<F>> {
        match self {
            Self::Applied(refresh) => Some(refresh),
            Self::Unchanged => None,
        }
    }
}

/// Reasons an edit is refused.
///
/// A refused edit leaves the model untouched and notifies nobody. Text editors
/// stay open so the user can correct the input.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum EditError {
    /// The text is not a base-10 integer.
    #[display("\"{input}\" is not a number")]
    NotANumber {
        /// The rejected text, trimmed.
        input: String,
    },
    /// The number is zero or negative.
    #[display("{value} is not a positive number")]
    NotPositive {
        /// The parsed value.
        value: i64,
    },
    /// The number does not fit the stored integer type.
    #[display("{value} is too large")]
    TooLarge {
        /// The parsed value.
        value: i64,
    },
    /// A stepper value outside its declared range.
    #[display("{value} is outside {min}..={max}")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// A slider position outside its track.
    #[display("{position} is outside {min}..={max}")]
    PositionOutOfRange {
        /// The rejected position.
        position: f64,
        /// Lowest position.
        min: f64,
        /// Highest position.
        max: f64,
    },
    /// A picker index past the end of its list.
    #[display("choice {index} is out of range for {len} choices")]
    ChoiceOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of choices.
        len: usize,
    },
    /// A number list index past the end of the list.
    #[display("entry {index} is out of range for {len} entries")]
    EntryOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of entries.
        len: usize,
    },
    /// The row is currently read-only.
    #[display("field is read-only")]
    ReadOnly,
    /// The row is currently hidden.
    #[display("field is hidden")]
    Hidden,
    /// The screen declares no such field.
    #[display("field is not part of this screen")]
    UnknownField,
    /// The screen has no such group.
    #[display("group is not part of this screen")]
    UnknownGroup,
    /// The input does not fit the field's value kind.
    #[display("{input} input does not apply to a {kind} field")]
    KindMismatch {
        /// Name of the input variant.
        input: &'static str,
        /// Value kind of the field.
        kind: ValueKind,
    },
    /// The field is edited in place, not through a sub-editor.
    #[display("a {kind} field has no editor")]
    NoEditor {
        /// Value kind of the field.
        kind: ValueKind,
    },
}

/// Parses text entered for a positive number.
pub(crate) fn parse_positive(text: &str) -> Result<u32, EditError> {
    let text = text.trim();
    let value = text.parse::<i64>().map_err(|_| EditError::NotANumber {
        input: text.to_owned(),
    })?;
    if value <= 0 {
        return Err(EditError::NotPositive { value });
    }
    u32::try_from(value).map_err(|_| EditError::TooLarge { value })
}

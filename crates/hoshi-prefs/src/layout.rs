//! Rendered screen layouts.
//!
//! A [`Layout`] is rebuilt from the model on every render and never cached, so
//! row counts and values always reflect the model's current state.

use serde::Serialize;

use crate::screen::GroupIndex;

/// Control parameters of a row, by value kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// On/off switch.
    Switch {
        /// Current state.
        on: bool,
    },
    /// Integer stepper.
    Stepper {
        /// Current value.
        value: i64,
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Float slider, in control units.
    Slider {
        /// Current position.
        value: f64,
        /// Lowest position.
        min: f64,
        /// Highest position.
        max: f64,
        /// Distance between adjacent positions, zero when continuous.
        step: f64,
        /// Control units per stored unit of the model.
        scale: f64,
    },
    /// Picker over a fixed list.
    Picker {
        /// Entries in display order.
        labels: Vec<String>,
        /// Entry matching the current value, or none.
        selected: Option<usize>,
    },
    /// Free-form text.
    Text {
        /// Current value.
        value: String,
    },
    /// Ordered list of numbers.
    NumberList {
        /// Current entries.
        values: Vec<u32>,
    },
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<F> {
    /// Field the row edits.
    #[serde(skip)]
    pub field: F,
    /// Stable identifier of the field.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// `false` when the control must not accept input.
    pub enabled: bool,
    /// Control parameters.
    pub control: Control,
}

/// One rendered group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct GroupLayout<F> {
    /// Section header.
    pub header: Option<&'static str>,
    /// Section footer.
    pub footer: Option<&'static str>,
    /// Visible rows; empty while the group is hidden.
    pub rows: Vec<Row<F>>,
}

/// A rendered screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Layout<F> {
    /// Screen title.
    pub title: &'static str,
    /// Groups in declaration order.
    pub groups: Vec<GroupLayout<F>>,
}

impl<F: PartialEq> Layout<F> {
    /// Returns the rendered row of `field`, if visible.
    #[must_use]
    pub fn row(&self, field: F) -> Option<&Row<F>> {
        self.rows().find(|row| row.field == field)
    }

    /// Returns the rendered group at `index`.
    #[must_use]
    pub fn group(&self, index: GroupIndex) -> Option<&GroupLayout<F>> {
        self.groups.get(index.get())
    }

    /// Iterates over all visible rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Row<F>> {
        self.groups.iter().flat_map(|group| group.rows.iter())
    }
}

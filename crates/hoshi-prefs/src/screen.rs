//! Screens and their groups.

use serde::Serialize;

use crate::{
    field::{FieldKey, PrefField, Predicate},
    layout::{GroupLayout, Layout},
};

/// Position of a group within its screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupIndex(usize);

impl GroupIndex {
    /// Creates a group index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the group.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A named section of a screen.
#[derive(Debug)]
pub struct Group<M, F> {
    header: Option<&'static str>,
    footer: Option<&'static str>,
    visible_when: Option<Predicate<M>>,
    fields: Vec<PrefField<M, F>>,
}

impl<M, F> Default for Group<M, F> {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
            visible_when: None,
            fields: Vec::new(),
        }
    }
}

impl<M, F> Group<M, F>
where
    F: FieldKey,
{
    /// Creates an empty group without header or footer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header text.
    #[must_use]
    pub fn header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn footer(mut self, footer: &'static str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Renders the group with zero rows whenever `predicate` is false.
    #[must_use]
    pub fn visible_when(mut self, predicate: Predicate<M>) -> Self {
        self.visible_when = Some(predicate);
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: PrefField<M, F>) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[PrefField<M, F>] {
        &self.fields
    }

    /// Returns `true` if the group has rows in the current model state.
    #[must_use]
    pub fn is_visible(&self, model: &M) -> bool {
        self.visible_when.is_none_or(|predicate| predicate(model))
    }

    fn render(&self, model: &M) -> GroupLayout<F> {
        let rows = if self.is_visible(model) {
            self.fields
                .iter()
                .filter(|field| field.is_visible(model))
                .map(|field| field.row(model))
                .collect()
        } else {
            Vec::new()
        };
        GroupLayout {
            header: self.header,
            footer: self.footer,
            rows,
        }
    }
}

/// An ordered, grouped collection of preference fields.
#[derive(Debug)]
pub struct PrefScreen<M, F> {
    title: &'static str,
    groups: Vec<Group<M, F>>,
}

impl<M, F> PrefScreen<M, F>
where
    F: FieldKey,
{
    /// Creates a screen without groups.
    #[must_use]
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            groups: Vec::new(),
        }
    }

    /// Appends a group.
    #[must_use]
    pub fn group(mut self, group: Group<M, F>) -> Self {
        self.groups.push(group);
        self
    }

    /// Returns the screen title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[Group<M, F>] {
        &self.groups
    }

    /// Iterates over every declared field, visible or not.
    pub fn fields(&self) -> impl Iterator<Item = &PrefField<M, F>> {
        self.groups.iter().flat_map(|group| group.fields.iter())
    }

    /// Finds the group and declaration of `key`.
    #[must_use]
    pub fn locate(&self, key: F) -> Option<(GroupIndex, &Group<M, F>, &PrefField<M, F>)> {
        self.groups.iter().enumerate().find_map(|(index, group)| {
            group
                .fields
                .iter()
                .find(|field| field.key() == key)
                .map(|field| (GroupIndex::new(index), group, field))
        })
    }

    /// Renders the screen against the current state of `model`.
    ///
    /// This is a pure function of the model: visibility, row counts, enabled
    /// flags and values are all recomputed.
    #[must_use]
    pub fn render(&self, model: &M) -> Layout<F> {
        log::trace!("rendering {:?}", self.title);
        Layout {
            title: self.title,
            groups: self.groups.iter().map(|group| group.render(model)).collect(),
        }
    }
}

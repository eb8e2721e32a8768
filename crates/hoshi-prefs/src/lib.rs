//! Preference binding for settings screens.
//!
//! This crate binds declarative lists of typed preference fields to a backing
//! model the caller owns. A screen never caches values: every render reads the
//! model through the field getters, and every committed edit writes through the
//! field setters immediately.
//!
//! # Overview
//!
//! 1. **Declaration** - What a screen contains
//!    - [`field`]: [`PrefField`], one editable setting with its value kind,
//!      getter, setter and optional side effect.
//!    - [`screen`]: [`PrefScreen`] and [`Group`], the ordered sections of a
//!      screen.
//!
//! 2. **Rendering** - What the presentation layer draws
//!    - [`layout`]: [`Layout`], [`Row`] and [`Control`], recomputed from the
//!      model on every render.
//!
//! 3. **Editing** - How user input reaches the model
//!    - [`edit`]: [`EditInput`], [`EditOutcome`] and [`EditError`].
//!    - [`editor`]: requests and responses for picker and text sub-editors.
//!    - [`session`]: [`ScreenSession`], a screen bound to a borrowed model for
//!      as long as it is visible.
//!
//! # Examples
//!
//! ```
//! use hoshi_prefs::{EditInput, FieldKey, Group, PrefField, PrefScreen, ScreenSession};
//!
//! #[derive(Debug, Default)]
//! struct Display {
//!     coordinates: bool,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum DisplayField {
//!     Coordinates,
//! }
//!
//! impl FieldKey for DisplayField {
//!     fn id(self) -> &'static str {
//!         match self {
//!             Self::Coordinates => "coordinates",
//!         }
//!     }
//! }
//!
//! type Field = PrefField<Display, DisplayField>;
//!
//! let screen = PrefScreen::new("Display").group(Group::new().field(Field::toggle(
//!     DisplayField::Coordinates,
//!     "Coordinates",
//!     |m| m.coordinates,
//!     |m, on| m.coordinates = on,
//! )));
//!
//! let mut model = Display::default();
//! let mut session = ScreenSession::new(screen, &mut model);
//! session
//!     .handle_edit(DisplayField::Coordinates, EditInput::Toggle(true))
//!     .unwrap();
//! assert!(session.model().coordinates);
//! ```

pub mod edit;
pub mod editor;
pub mod field;
pub mod layout;
pub mod screen;
pub mod session;

pub use self::{
    edit::{EditError, EditInput, EditOutcome, Refresh},
    editor::{EditorRequest, EditorResponse, TextTarget},
    field::{Bucket, FieldKey, PrefField, RefreshScope, SliderRange, ValueKind},
    layout::{Control, GroupLayout, Layout, Row},
    screen::{Group, GroupIndex, PrefScreen},
    session::{ConfirmResult, ScreenDelegate, ScreenSession},
};

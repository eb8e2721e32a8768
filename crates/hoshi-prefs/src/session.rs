//! A screen bound to its backing model while it is visible.

use crate::{
    edit::{EditError, EditInput, EditOutcome, Refresh},
    editor::{EditorRequest, EditorResponse},
    field::{FieldKey, RefreshScope},
    layout::Layout,
    screen::{GroupIndex, PrefScreen},
};

/// Receives a notification after every committed change to a screen.
///
/// A parent screen uses this to refresh its own summary of the settings.
/// Closures implement the trait directly.
pub trait ScreenDelegate {
    /// Called once per committed edit or reset.
    fn did_change(&mut self);
}

impl<T> ScreenDelegate for T
where
    T: FnMut(),
{
    fn did_change(&mut self) {
        self();
    }
}

/// Answer of the destructive-action confirmation preceding a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ConfirmResult {
    /// The user agreed.
    Confirmed,
    /// The user backed out.
    Cancelled,
}

/// A [`PrefScreen`] bound to the model it edits.
///
/// The session is created when the user navigates to the screen and dropped
/// when they navigate away. It owns the declaration but only borrows the
/// model, and holds no state of its own between edits.
pub struct ScreenSession<'m, M, F> {
    screen: PrefScreen<M, F>,
    model: &'m mut M,
    delegate: Option<Box<dyn ScreenDelegate + 'm>>,
}

impl<'m, M, F> ScreenSession<'m, M, F>
where
    F: FieldKey,
{
    /// Binds `screen` to `model`.
    #[must_use]
    pub fn new(screen: PrefScreen<M, F>, model: &'m mut M) -> Self {
        Self {
            screen,
            model,
            delegate: None,
        }
    }

    /// Installs the delegate notified after each committed change.
    #[must_use]
    pub fn with_delegate(mut self, delegate: impl ScreenDelegate + 'm) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Returns the screen declaration.
    #[must_use]
    pub fn screen(&self) -> &PrefScreen<M, F> {
        &self.screen
    }

    /// Returns the backing model.
    #[must_use]
    pub fn model(&self) -> &M {
        self.model
    }

    /// Renders the screen against the current model state.
    #[must_use]
    pub fn render(&self) -> Layout<F> {
        self.screen.render(self.model)
    }

    /// Validates `input` and writes it to `field`.
    ///
    /// On success the setter runs, then the field's side effect, then the
    /// delegate is notified once. Inputs that leave the model as it was
    /// (re-picking the current entry, re-adding a listed number) return
    /// [`EditOutcome::Unchanged`] without notifying anyone.
    ///
    /// # Errors
    ///
    /// Returns an [`EditError`] when the field is unknown, hidden or
    /// read-only, or when the input does not validate. The model is left
    /// untouched.
    pub fn handle_edit(
        &mut self,
        field: F,
        input: EditInput,
    ) -> Result<EditOutcome<F>, EditError> {
        let (group_index, group, pref) = self
            .screen
            .locate(field)
            .ok_or(EditError::UnknownField)?;

        let result = if !group.is_visible(self.model) || !pref.is_visible(self.model) {
            Err(EditError::Hidden)
        } else if !pref.is_enabled(self.model) {
            Err(EditError::ReadOnly)
        } else {
            pref.apply(self.model, input)
        };

        let written = match result {
            Ok(written) => written,
            Err(err) => {
                log::warn!("rejected edit of {}: {err}", field.id());
                return Err(err);
            }
        };
        if !written {
            log::trace!("edit of {} left the model unchanged", field.id());
            return Ok(EditOutcome::Unchanged);
        }

        pref.run_side_effect();
        if let Some(delegate) = &mut self.delegate {
            delegate.did_change();
        }

        let refresh = match pref.refresh_scope() {
            RefreshScope::Row => Refresh::Row(field),
            RefreshScope::Group => Refresh::Group(group_index),
            RefreshScope::Screen => Refresh::Screen,
        };
        log::debug!("applied edit of {}, refresh {refresh:?}", field.id());
        Ok(EditOutcome::Applied(refresh))
    }

    /// Describes the sub-editor to open for `field`.
    ///
    /// # Errors
    ///
    /// Returns an [`EditError`] when the field is unknown, not interactive,
    /// or edited in place.
    pub fn begin_edit(&self, field: F) -> Result<EditorRequest<F>, EditError> {
        let (_, group, pref) = self
            .screen
            .locate(field)
            .ok_or(EditError::UnknownField)?;
        check_interactive(
            group.is_visible(self.model) && pref.is_visible(self.model),
            pref.is_enabled(self.model),
        )?;
        pref.editor_request(self.model)
    }

    /// Describes the text editor for entry `index` of a number list.
    ///
    /// # Errors
    ///
    /// Returns an [`EditError`] when the field is unknown, not interactive,
    /// not a number list, or has no such entry.
    pub fn begin_entry_edit(
        &self,
        field: F,
        index: usize,
    ) -> Result<EditorRequest<F>, EditError> {
        let (_, group, pref) = self
            .screen
            .locate(field)
            .ok_or(EditError::UnknownField)?;
        check_interactive(
            group.is_visible(self.model) && pref.is_visible(self.model),
            pref.is_enabled(self.model),
        )?;
        pref.entry_editor_request(self.model, index)
    }

    /// Applies the answer of a sub-editor.
    ///
    /// A cancelled editor writes nothing and returns
    /// [`EditOutcome::Unchanged`]. A confirmed one goes through
    /// [`handle_edit`](Self::handle_edit).
    ///
    /// # Errors
    ///
    /// Same as [`handle_edit`](Self::handle_edit). On a validation error the
    /// text editor should stay open for correction.
    pub fn finish_editor(
        &mut self,
        response: EditorResponse<F>,
    ) -> Result<EditOutcome<F>, EditError> {
        match response {
            EditorResponse::Picked { field, index } => {
                self.handle_edit(field, EditInput::Pick(index))
            }
            EditorResponse::Entered { target, text } => {
                self.handle_edit(target.field(), target.into_input(text))
            }
            EditorResponse::Cancelled => {
                log::trace!("editor cancelled");
                Ok(EditOutcome::Unchanged)
            }
        }
    }
}

fn check_interactive(visible: bool, enabled: bool) -> Result<(), EditError> {
    match (visible, enabled) {
        (false, _) => Err(EditError::Hidden),
        (true, false) => Err(EditError::ReadOnly),
        (true, true) => Ok(()),
    }
}

impl<M, F> ScreenSession<'_, M, F>
where
    M: Default,
    F: FieldKey,
{
    /// Resets every field of `group` to the value it has in `M::default()`.
    ///
    /// Read-only and hidden fields are reset too. The delegate is notified
    /// exactly once, however many values actually changed. A cancelled
    /// confirmation does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownGroup`] if the screen has no such group.
    pub fn reset_group(
        &mut self,
        group: GroupIndex,
        confirm: ConfirmResult,
    ) -> Result<EditOutcome<F>, EditError> {
        let fields = self
            .screen
            .groups()
            .get(group.get())
            .ok_or(EditError::UnknownGroup)?
            .fields();
        if confirm.is_cancelled() {
            return Ok(EditOutcome::Unchanged);
        }

        let defaults = M::default();
        for field in fields {
            field.reset(&defaults, self.model);
            field.run_side_effect();
        }
        if let Some(delegate) = &mut self.delegate {
            delegate.did_change();
        }
        log::debug!("reset {} field(s) of group {}", fields.len(), group.get());
        Ok(EditOutcome::Applied(Refresh::Group(group)))
    }

    /// Resets every field of the screen to the value it has in `M::default()`.
    ///
    /// Notifies the delegate exactly once. A cancelled confirmation does
    /// nothing.
    pub fn reset_all(&mut self, confirm: ConfirmResult) -> EditOutcome<F> {
        if confirm.is_cancelled() {
            return EditOutcome::Unchanged;
        }

        let defaults = M::default();
        for field in self.screen.fields() {
            field.reset(&defaults, self.model);
            field.run_side_effect();
        }
        if let Some(delegate) = &mut self.delegate {
            delegate.did_change();
        }
        log::debug!("reset all fields of {:?}", self.screen.title());
        EditOutcome::Applied(Refresh::Screen)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use proptest::prelude::*;

    use super::{ConfirmResult, ScreenSession};
    use crate::{
        edit::{EditError, EditInput, EditOutcome, Refresh},
        editor::{EditorRequest, EditorResponse, TextTarget},
        field::{Bucket, FieldKey, PrefField, RefreshScope},
        layout::Control,
        screen::{Group, GroupIndex, PrefScreen},
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        in_game: bool,
        is_human: bool,
        auto_select: bool,
        min_games: u32,
        message: u32,
        policy: Policy,
        blocked: Vec<u32>,
    }

    impl Default for Profile {
        fn default() -> Self {
            Self {
                in_game: false,
                is_human: false,
                auto_select: true,
                min_games: 950,
                message: 1,
                policy: Policy::Replace,
                blocked: Vec::new(),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Policy {
        Replace,
        Branch,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        IsHuman,
        AutoSelect,
        MinGames,
        Message,
        Policy,
        Blocked,
        Undeclared,
    }

    impl FieldKey for Key {
        fn id(self) -> &'static str {
            match self {
                Self::IsHuman => "is_human",
                Self::AutoSelect => "auto_select",
                Self::MinGames => "min_games",
                Self::Message => "message",
                Self::Policy => "policy",
                Self::Blocked => "blocked",
                Self::Undeclared => "undeclared",
            }
        }
    }

    type Field = PrefField<Profile, Key>;

    const MIN_GAMES: [Bucket; 7] = [
        Bucket::new(0, "0"),
        Bucket::new(9, "9"),
        Bucket::new(99, "99"),
        Bucket::new(450, "450"),
        Bucket::new(950, "950"),
        Bucket::new(1950, "1950"),
        Bucket::new(4950, "4950"),
    ];

    fn screen(recomputed: &Rc<Cell<usize>>) -> PrefScreen<Profile, Key> {
        let recomputed = Rc::clone(recomputed);
        PrefScreen::new("Profile")
            .group(
                Group::new().field(
                    Field::toggle(Key::IsHuman, "Human", |m| m.is_human, |m, on| m.is_human = on)
                        .enabled_when(|m| !m.in_game)
                        .on_change(move || recomputed.set(recomputed.get() + 1)),
                ),
            )
            .group(
                Group::new()
                    .header("Resign")
                    .field(
                        Field::toggle(
                            Key::AutoSelect,
                            "Auto-select",
                            |m| m.auto_select,
                            |m, on| m.auto_select = on,
                        )
                        .refreshes(RefreshScope::Group),
                    )
                    .field(
                        Field::buckets(
                            Key::MinGames,
                            "Minimum games",
                            &MIN_GAMES,
                            |m| m.min_games,
                            |m, games| m.min_games = games,
                        )
                        .enabled_when(|m| !m.auto_select),
                    ),
            )
            .group(
                Group::new()
                    .field(Field::positive_number(
                        Key::Message,
                        "Message",
                        |m| m.message,
                        |m, number| m.message = number,
                    ))
                    .field(Field::choice(
                        Key::Policy,
                        "Policy",
                        [(Policy::Replace, "Replace"), (Policy::Branch, "Branch")],
                        |m| m.policy,
                        |m, policy| m.policy = policy,
                    ))
                    .field(
                        Field::number_list(
                            Key::Blocked,
                            "Blocked",
                            |m| m.blocked.clone(),
                            |m, numbers| m.blocked = numbers,
                        )
                        .visible_when(|m| !m.is_human),
                    ),
            )
    }

    #[test]
    fn auto_select_disables_dependent_row_without_touching_value() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile {
            auto_select: false,
            min_games: 450,
            ..Profile::default()
        };
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile);

        let row = session.render().row(Key::MinGames).cloned().unwrap();
        assert!(row.enabled);

        let outcome = session
            .handle_edit(Key::AutoSelect, EditInput::Toggle(true))
            .unwrap();
        assert_eq!(outcome, EditOutcome::Applied(Refresh::Group(GroupIndex::new(1))));

        let layout = session.render();
        let row = layout.row(Key::MinGames).unwrap();
        assert!(!row.enabled);
        assert!(matches!(
            row.control,
            Control::Picker {
                selected: Some(3),
                ..
            }
        ));
        assert_eq!(session.model().min_games, 450);

        assert_eq!(
            session.handle_edit(Key::MinGames, EditInput::Pick(0)),
            Err(EditError::ReadOnly)
        );
        assert_eq!(session.model().min_games, 450);
    }

    #[test]
    fn delegate_fires_once_per_committed_edit() {
        let recomputed = Rc::new(Cell::new(0));
        let notified = Cell::new(0);
        let mut profile = Profile::default();
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile)
            .with_delegate(|| notified.set(notified.get() + 1));

        session
            .handle_edit(Key::IsHuman, EditInput::Toggle(true))
            .unwrap();
        assert_eq!(notified.get(), 1);
        assert_eq!(recomputed.get(), 1);

        // Re-picking the current entry is not a change.
        let outcome = session
            .handle_edit(Key::Policy, EditInput::Pick(0))
            .unwrap();
        assert!(outcome.is_unchanged());
        assert_eq!(notified.get(), 1);

        let outcome = session
            .handle_edit(Key::Policy, EditInput::Pick(1))
            .unwrap();
        assert_eq!(outcome, EditOutcome::Applied(Refresh::Row(Key::Policy)));
        assert_eq!(notified.get(), 2);

        assert!(session
            .handle_edit(Key::Message, EditInput::Text("-3".to_owned()))
            .is_err());
        assert_eq!(notified.get(), 2);
        drop(session);
        assert_eq!(profile.policy, Policy::Branch);
    }

    #[test]
    fn read_only_toggle_is_reported_and_not_written() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile {
            in_game: true,
            ..Profile::default()
        };
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile);

        assert!(!session.render().row(Key::IsHuman).unwrap().enabled);
        assert_eq!(
            session.handle_edit(Key::IsHuman, EditInput::Toggle(true)),
            Err(EditError::ReadOnly)
        );
        assert!(!session.model().is_human);
        assert_eq!(recomputed.get(), 0);
    }

    #[test]
    fn positive_number_text_validation() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile::default();
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile);

        for text in ["0", "-3", "abc"] {
            assert!(session
                .handle_edit(Key::Message, EditInput::Text(text.to_owned()))
                .is_err());
            assert_eq!(session.model().message, 1);
        }
        session
            .handle_edit(Key::Message, EditInput::Text("42".to_owned()))
            .unwrap();
        assert_eq!(session.model().message, 42);
        assert!(matches!(
            &session.render().row(Key::Message).unwrap().control,
            Control::Text { value } if value == "42"
        ));
    }

    #[test]
    fn editor_round_trip_routes_by_field() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile {
            auto_select: false,
            min_games: 500,
            ..Profile::default()
        };
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile);

        let request = session.begin_edit(Key::MinGames).unwrap();
        let EditorRequest::Picker {
            field,
            labels,
            selected,
            ..
        } = request
        else {
            panic!("expected a picker");
        };
        assert_eq!(field, Key::MinGames);
        assert_eq!(labels.len(), 7);
        assert_eq!(selected, None);

        let outcome = session
            .finish_editor(EditorResponse::Picked { field, index: 6 })
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(session.model().min_games, 4950);

        let outcome = session.finish_editor(EditorResponse::Cancelled).unwrap();
        assert!(outcome.is_unchanged());

        let request = session.begin_edit(Key::Message).unwrap();
        assert_eq!(
            request,
            EditorRequest::Text {
                target: TextTarget::Value(Key::Message),
                title: "Message",
                text: "1".to_owned(),
            }
        );
        assert_eq!(
            session.begin_edit(Key::AutoSelect),
            Err(EditError::NoEditor {
                kind: crate::field::ValueKind::Boolean
            })
        );
    }

    #[test]
    fn editors_do_not_open_on_read_only_or_hidden_rows() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile {
            is_human: true,
            blocked: vec![5],
            ..Profile::default()
        };
        let session = ScreenSession::new(screen(&recomputed), &mut profile);

        assert!(!session.render().row(Key::MinGames).unwrap().enabled);
        assert_eq!(session.begin_edit(Key::MinGames), Err(EditError::ReadOnly));

        assert!(session.render().row(Key::Blocked).is_none());
        assert_eq!(session.begin_edit(Key::Blocked), Err(EditError::Hidden));
        assert_eq!(
            session.begin_entry_edit(Key::Blocked, 0),
            Err(EditError::Hidden)
        );
    }

    #[test]
    fn entry_editor_opens_once_list_is_visible() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile {
            blocked: vec![5],
            ..Profile::default()
        };
        let session = ScreenSession::new(screen(&recomputed), &mut profile);

        assert_eq!(
            session.begin_entry_edit(Key::Blocked, 0),
            Ok(EditorRequest::Text {
                target: TextTarget::Entry {
                    field: Key::Blocked,
                    index: 0,
                },
                title: "Blocked",
                text: "5".to_owned(),
            })
        );
        assert_eq!(
            session.begin_entry_edit(Key::Blocked, 1),
            Err(EditError::EntryOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn unknown_field_is_an_error() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile::default();
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile);
        assert_eq!(
            session.handle_edit(Key::Undeclared, EditInput::Toggle(true)),
            Err(EditError::UnknownField)
        );
    }

    #[test]
    fn reset_group_notifies_once_even_without_changes() {
        let recomputed = Rc::new(Cell::new(0));
        let notified = Cell::new(0);
        let mut profile = Profile::default();
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile)
            .with_delegate(|| notified.set(notified.get() + 1));

        let outcome = session
            .reset_group(GroupIndex::new(1), ConfirmResult::Confirmed)
            .unwrap();
        assert_eq!(outcome, EditOutcome::Applied(Refresh::Group(GroupIndex::new(1))));
        assert_eq!(notified.get(), 1);

        session
            .handle_edit(Key::AutoSelect, EditInput::Toggle(false))
            .unwrap();
        session
            .handle_edit(Key::MinGames, EditInput::Pick(1))
            .unwrap();
        assert_eq!(notified.get(), 3);

        let outcome = session
            .reset_group(GroupIndex::new(1), ConfirmResult::Cancelled)
            .unwrap();
        assert!(outcome.is_unchanged());
        assert_eq!(session.model().min_games, 9);

        session
            .reset_group(GroupIndex::new(1), ConfirmResult::Confirmed)
            .unwrap();
        assert_eq!(notified.get(), 4);
        assert!(session.model().auto_select);
        assert_eq!(session.model().min_games, 950);

        assert_eq!(
            session.reset_group(GroupIndex::new(9), ConfirmResult::Confirmed),
            Err(EditError::UnknownGroup)
        );
    }

    #[test]
    fn reset_all_restores_defaults() {
        let recomputed = Rc::new(Cell::new(0));
        let mut profile = Profile {
            is_human: true,
            auto_select: false,
            min_games: 9,
            message: 77,
            policy: Policy::Branch,
            in_game: false,
            blocked: vec![3],
        };
        let mut session = ScreenSession::new(screen(&recomputed), &mut profile);
        assert_eq!(
            session.reset_all(ConfirmResult::Confirmed),
            EditOutcome::Applied(Refresh::Screen)
        );
        drop(session);
        assert_eq!(profile, Profile::default());
    }

    proptest! {
        #[test]
        fn bucket_selection_matches_membership(min_games in 0u32..6000) {
            let recomputed = Rc::new(Cell::new(0));
            let profile = Profile {
                auto_select: false,
                min_games,
                ..Profile::default()
            };
            let layout = screen(&recomputed).render(&profile);
            let Some(Control::Picker { selected, .. }) =
                layout.row(Key::MinGames).map(|row| &row.control)
            else {
                panic!("expected a picker");
            };
            let expected = MIN_GAMES.iter().position(|bucket| bucket.value == min_games);
            prop_assert_eq!(*selected, expected);
        }

        #[test]
        fn render_reflects_accepted_number(text in "-?[0-9]{1,6}") {
            let recomputed = Rc::new(Cell::new(0));
            let mut profile = Profile::default();
            let mut session = ScreenSession::new(screen(&recomputed), &mut profile);
            let before = session.model().message;

            let result = session.handle_edit(Key::Message, EditInput::Text(text.clone()));
            let layout = session.render();
            let Some(Control::Text { value }) = layout.row(Key::Message).map(|row| &row.control)
            else {
                panic!("expected a text row");
            };
            match text.parse::<i64>() {
                Ok(parsed) if parsed > 0 => {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(value, &parsed.to_string());
                }
                _ => {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(value, &before.to_string());
                }
            }
        }
    }
}

//! Board position settings.
//!
//! These decide what happens when the user plays a move while viewing an
//! earlier board position.

use hoshi_prefs::{FieldKey, Group, PrefField, PrefScreen, RefreshScope};

/// What happens to the moves after the viewed position when a new move is played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NewMoveInsertPolicy {
    /// The future moves are discarded.
    #[default]
    ReplaceFutureBoardPositions,
    /// The new move starts a new variation and the future moves are kept.
    RetainFutureBoardPositions,
}

/// Where a newly created variation is placed among its siblings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NewVariationInsertPosition {
    /// Before the variation currently being viewed.
    BeforeCurrentVariation,
    /// After the variation currently being viewed.
    #[default]
    AfterCurrentVariation,
    /// As the first variation.
    AtTop,
    /// As the last variation.
    AtBottom,
}

/// Board position settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPositionModel {
    /// Asks before future moves are discarded.
    pub discard_future_moves_alert: bool,
    /// Marks the intersection of the next move in the game record.
    pub mark_next_move: bool,
    /// What happens to future moves.
    pub new_move_insert_policy: NewMoveInsertPolicy,
    /// Where a new variation goes.
    pub new_variation_insert_position: NewVariationInsertPosition,
}

impl Default for BoardPositionModel {
    fn default() -> Self {
        Self {
            discard_future_moves_alert: true,
            mark_next_move: true,
            new_move_insert_policy: NewMoveInsertPolicy::default(),
            new_variation_insert_position: NewVariationInsertPosition::default(),
        }
    }
}

/// Fields of the board position screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPositionField {
    /// [`BoardPositionModel::discard_future_moves_alert`]
    DiscardFutureMovesAlert,
    /// [`BoardPositionModel::mark_next_move`]
    MarkNextMove,
    /// [`BoardPositionModel::new_move_insert_policy`]
    NewMoveInsertPolicy,
    /// [`BoardPositionModel::new_variation_insert_position`]
    NewVariationInsertPosition,
}

impl FieldKey for BoardPositionField {
    fn id(self) -> &'static str {
        match self {
            Self::DiscardFutureMovesAlert => "discard_future_moves_alert",
            Self::MarkNextMove => "mark_next_move",
            Self::NewMoveInsertPolicy => "new_move_insert_policy",
            Self::NewVariationInsertPosition => "new_variation_insert_position",
        }
    }
}

type Field = PrefField<BoardPositionModel, BoardPositionField>;

/// Builds the board position screen.
#[must_use]
pub fn screen() -> PrefScreen<BoardPositionModel, BoardPositionField> {
    PrefScreen::new("Board position")
        .group(
            Group::new()
                .header("Viewing")
                .field(Field::toggle(
                    BoardPositionField::MarkNextMove,
                    "Mark next move",
                    |m| m.mark_next_move,
                    |m, on| m.mark_next_move = on,
                ))
                .field(Field::toggle(
                    BoardPositionField::DiscardFutureMovesAlert,
                    "Warn before discarding moves",
                    |m| m.discard_future_moves_alert,
                    |m, on| m.discard_future_moves_alert = on,
                )),
        )
        .group(
            Group::new()
                .header("Playing a move in the past")
                .field(
                    Field::choice(
                        BoardPositionField::NewMoveInsertPolicy,
                        "Future moves",
                        [
                            (NewMoveInsertPolicy::ReplaceFutureBoardPositions, "Discard"),
                            (NewMoveInsertPolicy::RetainFutureBoardPositions, "Keep as variation"),
                        ],
                        |m| m.new_move_insert_policy,
                        |m, policy| m.new_move_insert_policy = policy,
                    )
                    .refreshes(RefreshScope::Group),
                )
                .field(
                    Field::choice(
                        BoardPositionField::NewVariationInsertPosition,
                        "New variation",
                        [
                            (NewVariationInsertPosition::BeforeCurrentVariation, "Before current"),
                            (NewVariationInsertPosition::AfterCurrentVariation, "After current"),
                            (NewVariationInsertPosition::AtTop, "First"),
                            (NewVariationInsertPosition::AtBottom, "Last"),
                        ],
                        |m| m.new_variation_insert_position,
                        |m, position| m.new_variation_insert_position = position,
                    )
                    .visible_when(|m| {
                        m.new_move_insert_policy == NewMoveInsertPolicy::RetainFutureBoardPositions
                    }),
                ),
        )
}

//! Scoring settings.

use hoshi_prefs::{FieldKey, Group, PrefField, PrefScreen};

/// How intersections with inconsistent territory are marked in scoring mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InconsistentTerritoryMarkupType {
    /// A small dot on the intersection.
    #[default]
    DotSymbol,
    /// The intersection is filled with a warning color.
    FillColor,
    /// The intersection is shown as neutral territory.
    Neutral,
}

/// Scoring settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringModel {
    /// Lets the GTP engine propose the dead stones when scoring starts.
    pub ask_gtp_engine_for_dead_stones: bool,
    /// Marking a stone dead marks its whole group, and the neighbouring groups
    /// that must be dead with it.
    pub mark_dead_stones_intelligently: bool,
    /// Markup of inconsistent territory.
    pub inconsistent_territory_markup_type: InconsistentTerritoryMarkupType,
    /// Enters scoring mode as soon as the game ends.
    pub score_when_game_ends: bool,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            ask_gtp_engine_for_dead_stones: true,
            mark_dead_stones_intelligently: true,
            inconsistent_territory_markup_type: InconsistentTerritoryMarkupType::default(),
            score_when_game_ends: true,
        }
    }
}

/// Fields of the scoring screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringField {
    /// [`ScoringModel::ask_gtp_engine_for_dead_stones`]
    AskGtpEngineForDeadStones,
    /// [`ScoringModel::mark_dead_stones_intelligently`]
    MarkDeadStonesIntelligently,
    /// [`ScoringModel::inconsistent_territory_markup_type`]
    InconsistentTerritoryMarkupType,
    /// [`ScoringModel::score_when_game_ends`]
    ScoreWhenGameEnds,
}

impl FieldKey for ScoringField {
    fn id(self) -> &'static str {
        match self {
            Self::AskGtpEngineForDeadStones => "ask_gtp_engine_for_dead_stones",
            Self::MarkDeadStonesIntelligently => "mark_dead_stones_intelligently",
            Self::InconsistentTerritoryMarkupType => "inconsistent_territory_markup_type",
            Self::ScoreWhenGameEnds => "score_when_game_ends",
        }
    }
}

type Field = PrefField<ScoringModel, ScoringField>;

/// Builds the scoring screen.
///
/// `recompute_score` runs after intelligent dead stone marking is switched.
#[must_use]
pub fn screen(recompute_score: impl Fn() + 'static) -> PrefScreen<ScoringModel, ScoringField> {
    PrefScreen::new("Scoring")
        .group(
            Group::new()
                .header("Scoring mode")
                .field(Field::toggle(
                    ScoringField::ScoreWhenGameEnds,
                    "Score when game ends",
                    |m| m.score_when_game_ends,
                    |m, on| m.score_when_game_ends = on,
                ))
                .field(Field::toggle(
                    ScoringField::AskGtpEngineForDeadStones,
                    "Find dead stones",
                    |m| m.ask_gtp_engine_for_dead_stones,
                    |m, on| m.ask_gtp_engine_for_dead_stones = on,
                ))
                .field(
                    Field::toggle(
                        ScoringField::MarkDeadStonesIntelligently,
                        "Mark dead stones intelligently",
                        |m| m.mark_dead_stones_intelligently,
                        |m, on| m.mark_dead_stones_intelligently = on,
                    )
                    .on_change(recompute_score),
                ),
        )
        .group(Group::new().header("Markup").field(Field::choice(
            ScoringField::InconsistentTerritoryMarkupType,
            "Inconsistent territory",
            [
                (InconsistentTerritoryMarkupType::DotSymbol, "Dot symbol"),
                (InconsistentTerritoryMarkupType::FillColor, "Fill color"),
                (InconsistentTerritoryMarkupType::Neutral, "Neutral"),
            ],
            |m| m.inconsistent_territory_markup_type,
            |m, markup| m.inconsistent_territory_markup_type = markup,
        )))
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use hoshi_prefs::{ConfirmResult, EditInput, ScreenSession};

    use super::{InconsistentTerritoryMarkupType, ScoringField, ScoringModel, screen};

    #[test]
    fn intelligent_marking_recomputes_score() {
        let recomputed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&recomputed);
        let mut model = ScoringModel::default();
        let mut session =
            ScreenSession::new(screen(move || counter.set(counter.get() + 1)), &mut model);

        session
            .handle_edit(ScoringField::MarkDeadStonesIntelligently, EditInput::Toggle(false))
            .unwrap();
        session
            .handle_edit(ScoringField::ScoreWhenGameEnds, EditInput::Toggle(false))
            .unwrap();
        assert_eq!(recomputed.get(), 1);

        session
            .handle_edit(ScoringField::InconsistentTerritoryMarkupType, EditInput::Pick(2))
            .unwrap();
        assert_eq!(
            session.model().inconsistent_territory_markup_type,
            InconsistentTerritoryMarkupType::Neutral
        );

        // Resets run side effects too.
        assert!(session.reset_all(ConfirmResult::Confirmed).is_applied());
        assert_eq!(recomputed.get(), 2);
        drop(session);
        assert_eq!(model, ScoringModel::default());
    }
}

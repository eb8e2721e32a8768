//! GTP engine profile settings.
//!
//! A profile bundles the resource limits and playing strength of the GTP
//! engine that plays for a computer player.

use hoshi_prefs::{Bucket, FieldKey, Group, GroupIndex, PrefField, PrefScreen, RefreshScope};

/// Named thresholds for the number of games played before the engine may resign.
pub const RESIGN_MIN_GAMES: [Bucket; 7] = [
    Bucket::new(0, "No minimum"),
    Bucket::new(9, "Very low"),
    Bucket::new(99, "Low"),
    Bucket::new(450, "Medium"),
    Bucket::new(950, "High"),
    Bucket::new(1950, "Very high"),
    Bucket::new(4950, "Maximum"),
];

/// Named limits for the number of playouts per move.
pub const MAX_GAMES: [Bucket; 6] = [
    Bucket::new(500, "500"),
    Bucket::new(1_000, "1,000"),
    Bucket::new(5_000, "5,000"),
    Bucket::new(10_000, "10,000"),
    Bucket::new(50_000, "50,000"),
    Bucket::new(u32::MAX, "Unlimited"),
];

/// The group holding the resign settings.
///
/// It offers its own "Reset to defaults".
pub const RESIGN_GROUP: GroupIndex = GroupIndex::new(3);

/// Resource limits and strength of a GTP engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtpEngineProfile {
    /// Memory the engine may use, in megabytes.
    pub max_memory_mb: u32,
    /// Search threads.
    pub threads: u32,
    /// Keeps searching while the opponent thinks.
    pub pondering: bool,
    /// Upper bound of a ponder search, in seconds.
    pub max_ponder_time_secs: u32,
    /// Keeps the search tree of the previous move.
    pub reuse_subtree: bool,
    /// Upper bound of a move search, in seconds.
    pub max_thinking_time_secs: u32,
    /// Upper bound of playouts per move.
    pub max_games: u32,
    /// Lets the engine pick the resign threshold from the board size.
    pub auto_select_resign_min_games: bool,
    /// Playouts required before the engine may resign.
    pub resign_min_games: u32,
}

impl Default for GtpEngineProfile {
    fn default() -> Self {
        Self {
            max_memory_mb: 256,
            threads: 1,
            pondering: false,
            max_ponder_time_secs: 300,
            reuse_subtree: true,
            max_thinking_time_secs: 10,
            max_games: u32::MAX,
            auto_select_resign_min_games: true,
            resign_min_games: 950,
        }
    }
}

/// Fields of the engine profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineProfileField {
    /// [`GtpEngineProfile::max_memory_mb`]
    MaxMemory,
    /// [`GtpEngineProfile::threads`]
    Threads,
    /// [`GtpEngineProfile::pondering`]
    Pondering,
    /// [`GtpEngineProfile::max_ponder_time_secs`]
    MaxPonderTime,
    /// [`GtpEngineProfile::reuse_subtree`]
    ReuseSubtree,
    /// [`GtpEngineProfile::max_thinking_time_secs`]
    MaxThinkingTime,
    /// [`GtpEngineProfile::max_games`]
    MaxGames,
    /// [`GtpEngineProfile::auto_select_resign_min_games`]
    AutoSelectResignMinGames,
    /// [`GtpEngineProfile::resign_min_games`]
    ResignMinGames,
}

impl FieldKey for EngineProfileField {
    fn id(self) -> &'static str {
        match self {
            Self::MaxMemory => "max_memory",
            Self::Threads => "threads",
            Self::Pondering => "pondering",
            Self::MaxPonderTime => "max_ponder_time",
            Self::ReuseSubtree => "reuse_subtree",
            Self::MaxThinkingTime => "max_thinking_time",
            Self::MaxGames => "max_games",
            Self::AutoSelectResignMinGames => "auto_select_resign_min_games",
            Self::ResignMinGames => "resign_min_games",
        }
    }
}

type Field = PrefField<GtpEngineProfile, EngineProfileField>;

/// Builds the engine profile screen.
#[must_use]
pub fn screen() -> PrefScreen<GtpEngineProfile, EngineProfileField> {
    PrefScreen::new("Engine profile")
        .group(
            Group::new()
                .header("Resources")
                .field(Field::stepper(
                    EngineProfileField::MaxMemory,
                    "Max memory (MB)",
                    16..=4096,
                    |m| m.max_memory_mb,
                    |m, megabytes| m.max_memory_mb = megabytes,
                ))
                .field(Field::stepper(
                    EngineProfileField::Threads,
                    "Threads",
                    1..=8,
                    |m| m.threads,
                    |m, threads| m.threads = threads,
                )),
        )
        .group(
            Group::new()
                .header("Pondering")
                .field(
                    Field::toggle(
                        EngineProfileField::Pondering,
                        "Pondering",
                        |m| m.pondering,
                        |m, on| m.pondering = on,
                    )
                    .refreshes(RefreshScope::Group),
                )
                .field(
                    Field::stepper(
                        EngineProfileField::MaxPonderTime,
                        "Max ponder time (s)",
                        10..=3600,
                        |m| m.max_ponder_time_secs,
                        |m, secs| m.max_ponder_time_secs = secs,
                    )
                    .enabled_when(|m| m.pondering),
                )
                .field(Field::toggle(
                    EngineProfileField::ReuseSubtree,
                    "Reuse subtree",
                    |m| m.reuse_subtree,
                    |m, on| m.reuse_subtree = on,
                )),
        )
        .group(
            Group::new()
                .header("Playing strength")
                .field(Field::stepper(
                    EngineProfileField::MaxThinkingTime,
                    "Max thinking time (s)",
                    1..=60,
                    |m| m.max_thinking_time_secs,
                    |m, secs| m.max_thinking_time_secs = secs,
                ))
                .field(Field::buckets(
                    EngineProfileField::MaxGames,
                    "Max games",
                    &MAX_GAMES,
                    |m| m.max_games,
                    |m, games| m.max_games = games,
                )),
        )
        .group(
            Group::new()
                .header("Resign behaviour")
                .footer(
                    "The engine only resigns after it has played at least this many games \
                     for the current move.",
                )
                .field(
                    Field::toggle(
                        EngineProfileField::AutoSelectResignMinGames,
                        "Auto-select",
                        |m| m.auto_select_resign_min_games,
                        |m, on| m.auto_select_resign_min_games = on,
                    )
                    .refreshes(RefreshScope::Group),
                )
                .field(
                    Field::buckets(
                        EngineProfileField::ResignMinGames,
                        "Minimum games",
                        &RESIGN_MIN_GAMES,
                        |m| m.resign_min_games,
                        |m, games| m.resign_min_games = games,
                    )
                    .enabled_when(|m| !m.auto_select_resign_min_games),
                ),
        )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use hoshi_prefs::{
        ConfirmResult, Control, EditError, EditInput, EditOutcome, Refresh, ScreenSession,
    };

    use super::{EngineProfileField, GtpEngineProfile, RESIGN_GROUP, screen};

    fn selected(
        session: &ScreenSession<'_, GtpEngineProfile, EngineProfileField>,
    ) -> Option<usize> {
        match &session
            .render()
            .row(EngineProfileField::ResignMinGames)
            .map(|row| row.control.clone())
        {
            Some(Control::Picker { selected, .. }) => *selected,
            other => panic!("expected a picker, got {other:?}"),
        }
    }

    #[test]
    fn resign_group_is_where_it_is_declared() {
        let screen = screen();
        let (group, _, _) = screen.locate(EngineProfileField::ResignMinGames).unwrap();
        assert_eq!(group, RESIGN_GROUP);
    }

    #[test]
    fn resign_min_games_preselects_matching_bucket_only() {
        let mut profile = GtpEngineProfile::default();
        let session = ScreenSession::new(screen(), &mut profile);
        assert_eq!(selected(&session), Some(4));
        drop(session);

        profile.resign_min_games = 500;
        let session = ScreenSession::new(screen(), &mut profile);
        assert_eq!(selected(&session), None);
    }

    #[test]
    fn auto_select_disables_resign_min_games() {
        let mut profile = GtpEngineProfile {
            auto_select_resign_min_games: false,
            resign_min_games: 450,
            ..GtpEngineProfile::default()
        };
        let mut session = ScreenSession::new(screen(), &mut profile);
        let row = session.render().row(EngineProfileField::ResignMinGames).cloned().unwrap();
        assert!(row.enabled);

        let outcome = session
            .handle_edit(EngineProfileField::AutoSelectResignMinGames, EditInput::Toggle(true))
            .unwrap();
        assert_eq!(outcome, EditOutcome::Applied(Refresh::Group(RESIGN_GROUP)));

        let row = session.render().row(EngineProfileField::ResignMinGames).cloned().unwrap();
        assert!(!row.enabled);
        assert_eq!(selected(&session), Some(3));
        assert_eq!(session.model().resign_min_games, 450);
    }

    #[test]
    fn ponder_time_follows_pondering() {
        let mut profile = GtpEngineProfile::default();
        let mut session = ScreenSession::new(screen(), &mut profile);

        assert_eq!(
            session.handle_edit(EngineProfileField::MaxPonderTime, EditInput::Step(60)),
            Err(EditError::ReadOnly)
        );
        session
            .handle_edit(EngineProfileField::Pondering, EditInput::Toggle(true))
            .unwrap();
        session
            .handle_edit(EngineProfileField::MaxPonderTime, EditInput::Step(60))
            .unwrap();
        assert_eq!(session.model().max_ponder_time_secs, 60);
    }

    #[test]
    fn resign_reset_leaves_other_groups_alone() {
        let notified = Cell::new(0);
        let mut profile = GtpEngineProfile {
            threads: 4,
            auto_select_resign_min_games: false,
            resign_min_games: 9,
            ..GtpEngineProfile::default()
        };
        let mut session = ScreenSession::new(screen(), &mut profile)
            .with_delegate(|| notified.set(notified.get() + 1));

        session
            .reset_group(RESIGN_GROUP, ConfirmResult::Confirmed)
            .unwrap();
        assert_eq!(notified.get(), 1);
        drop(session);

        assert_eq!(profile.threads, 4);
        assert!(profile.auto_select_resign_min_games);
        assert_eq!(profile.resign_min_games, 950);
    }
}

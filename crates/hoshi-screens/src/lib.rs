//! The settings screens of the Hoshi Go application.
//!
//! Each module pairs a backing model with the screen that edits it:
//!
//! - [`board_view`]: how the board is drawn.
//! - [`engine_profile`]: resources and playing strength of a GTP engine.
//! - [`sgf`]: how SGF files are checked when loaded.
//! - [`player`]: whether a player is human, and which engine profile it uses.
//! - [`board_position`]: what happens when a move is played in the past.
//! - [`scoring`]: how dead stones and territory are marked.
//!
//! The model's [`Default`] impl holds the application defaults. Resets restore
//! them.

use std::str::FromStr;

pub mod board_position;
pub mod board_view;
pub mod engine_profile;
pub mod player;
pub mod scoring;
pub mod sgf;

/// Every settings screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScreenKind {
    /// [`board_view`]
    #[display("board-view")]
    BoardView,
    /// [`engine_profile`]
    #[display("engine-profile")]
    EngineProfile,
    /// [`sgf`]
    #[display("sgf")]
    Sgf,
    /// [`player`]
    #[display("player")]
    Player,
    /// [`board_position`]
    #[display("board-position")]
    BoardPosition,
    /// [`scoring`]
    #[display("scoring")]
    Scoring,
}

impl ScreenKind {
    /// All screens, in menu order.
    pub const ALL: [Self; 6] = [
        Self::BoardView,
        Self::EngineProfile,
        Self::Sgf,
        Self::Player,
        Self::BoardPosition,
        Self::Scoring,
    ];

    /// Returns the command-line name of the screen.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BoardView => "board-view",
            Self::EngineProfile => "engine-profile",
            Self::Sgf => "sgf",
            Self::Player => "player",
            Self::BoardPosition => "board-position",
            Self::Scoring => "scoring",
        }
    }
}

/// Error returned when parsing an unknown screen name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown screen \"{name}\"")]
pub struct UnknownScreen {
    /// The rejected name.
    pub name: String,
}

impl FromStr for ScreenKind {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownScreen { name: s.to_owned() })
    }
}

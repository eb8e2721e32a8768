//! Player settings.

use hoshi_prefs::{FieldKey, Group, PrefField, PrefScreen, RefreshScope};

/// A player as configured in the player list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerModel {
    /// `false` for a computer player.
    pub is_human: bool,
    /// Set while the player takes part in the game being played.
    ///
    /// Not editable on this screen.
    pub in_active_game: bool,
    /// Index of the engine profile a computer player uses.
    pub engine_profile: usize,
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self {
            is_human: true,
            in_active_game: false,
            engine_profile: 0,
        }
    }
}

/// Fields of the player screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    /// [`PlayerModel::is_human`]
    IsHuman,
    /// [`PlayerModel::engine_profile`]
    EngineProfile,
}

impl FieldKey for PlayerField {
    fn id(self) -> &'static str {
        match self {
            Self::IsHuman => "is_human",
            Self::EngineProfile => "engine_profile",
        }
    }
}

type Field = PrefField<PlayerModel, PlayerField>;

/// Builds the player screen.
///
/// `profile_names` lists the engine profiles in the order their indices refer
/// to.
#[must_use]
pub fn screen<I>(profile_names: I) -> PrefScreen<PlayerModel, PlayerField>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    PrefScreen::new("Player")
        .group(
            Group::new()
                .header("Player")
                .footer("A player cannot be changed while it takes part in the current game.")
                .field(
                    Field::toggle(
                        PlayerField::IsHuman,
                        "Human",
                        |m| m.is_human,
                        |m, on| m.is_human = on,
                    )
                    .enabled_when(|m| !m.in_active_game)
                    .refreshes(RefreshScope::Screen),
                ),
        )
        .group(
            Group::new()
                .header("GTP engine profile")
                .visible_when(|m: &PlayerModel| !m.is_human)
                .field(Field::choice(
                    PlayerField::EngineProfile,
                    "Profile",
                    profile_names.into_iter().enumerate(),
                    |m| m.engine_profile,
                    |m, profile| m.engine_profile = profile,
                )),
        )
}

//! Board view settings.

use hoshi_prefs::{FieldKey, Group, PrefField, PrefScreen, SliderRange};

/// What the info area below the board shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    /// Captures, komi and the player to move.
    #[default]
    GameState,
    /// The comment of the current node.
    Annotations,
    /// Details of the current board position.
    BoardPosition,
}

/// How the board is drawn.
#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::struct_excessive_bools)]
pub struct BoardViewModel {
    /// Draws a marker on the stone placed by the last move.
    pub mark_last_move: bool,
    /// Draws letters and numbers along the board edges.
    pub display_coordinates: bool,
    /// Shades each intersection by the player who controls it.
    pub display_player_influence: bool,
    /// Fraction of the most recent moves labelled with their move number.
    pub move_numbers_percentage: f64,
    /// How far above the fingertip a stone is placed, in intersections.
    pub stone_distance_from_fingertip: u32,
    /// Contents of the info area.
    pub info_type: InfoType,
    /// Plays a sound when a stone is placed.
    pub play_sound: bool,
}

impl Default for BoardViewModel {
    fn default() -> Self {
        Self {
            mark_last_move: true,
            display_coordinates: false,
            display_player_influence: false,
            move_numbers_percentage: 0.0,
            stone_distance_from_fingertip: 3,
            info_type: InfoType::default(),
            play_sound: false,
        }
    }
}

/// Fields of the board view screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardViewField {
    /// [`BoardViewModel::mark_last_move`]
    MarkLastMove,
    /// [`BoardViewModel::display_coordinates`]
    DisplayCoordinates,
    /// [`BoardViewModel::display_player_influence`]
    DisplayPlayerInfluence,
    /// [`BoardViewModel::move_numbers_percentage`]
    MoveNumbersPercentage,
    /// [`BoardViewModel::stone_distance_from_fingertip`]
    StoneDistanceFromFingertip,
    /// [`BoardViewModel::info_type`]
    InfoType,
    /// [`BoardViewModel::play_sound`]
    PlaySound,
}

impl FieldKey for BoardViewField {
    fn id(self) -> &'static str {
        match self {
            Self::MarkLastMove => "mark_last_move",
            Self::DisplayCoordinates => "display_coordinates",
            Self::DisplayPlayerInfluence => "display_player_influence",
            Self::MoveNumbersPercentage => "move_numbers_percentage",
            Self::StoneDistanceFromFingertip => "stone_distance_from_fingertip",
            Self::InfoType => "info_type",
            Self::PlaySound => "play_sound",
        }
    }
}

type Field = PrefField<BoardViewModel, BoardViewField>;

/// Builds the board view screen.
///
/// `recompute_influence` runs after player influence display is switched, so
/// the board can be shaded (or cleared) without waiting for the next move.
#[must_use]
pub fn screen(
    recompute_influence: impl Fn() + 'static,
) -> PrefScreen<BoardViewModel, BoardViewField> {
    PrefScreen::new("Board view")
        .group(
            Group::new()
                .header("Markup")
                .field(Field::toggle(
                    BoardViewField::MarkLastMove,
                    "Mark last move",
                    |m| m.mark_last_move,
                    |m, on| m.mark_last_move = on,
                ))
                .field(Field::toggle(
                    BoardViewField::DisplayCoordinates,
                    "Coordinates",
                    |m| m.display_coordinates,
                    |m, on| m.display_coordinates = on,
                ))
                .field(
                    Field::toggle(
                        BoardViewField::DisplayPlayerInfluence,
                        "Player influence",
                        |m| m.display_player_influence,
                        |m, on| m.display_player_influence = on,
                    )
                    .on_change(recompute_influence),
                )
                .field(Field::slider(
                    BoardViewField::MoveNumbersPercentage,
                    "Move numbers (%)",
                    SliderRange::PERCENT,
                    |m| m.move_numbers_percentage,
                    |m, fraction| m.move_numbers_percentage = fraction,
                )),
        )
        .group(
            Group::new()
                .header("Placing stones")
                .footer("Distance between the fingertip and the stone while it is being placed.")
                .field(Field::stepper(
                    BoardViewField::StoneDistanceFromFingertip,
                    "Stone distance",
                    0..=5,
                    |m| m.stone_distance_from_fingertip,
                    |m, distance| m.stone_distance_from_fingertip = distance,
                ))
                .field(Field::toggle(
                    BoardViewField::PlaySound,
                    "Play sound",
                    |m| m.play_sound,
                    |m, on| m.play_sound = on,
                )),
        )
        .group(Group::new().header("Info area").field(Field::choice(
            BoardViewField::InfoType,
            "Show",
            [
                (InfoType::GameState, "Game state"),
                (InfoType::Annotations, "Annotations"),
                (InfoType::BoardPosition, "Board position"),
            ],
            |m| m.info_type,
            |m, info_type| m.info_type = info_type,
        )))
}

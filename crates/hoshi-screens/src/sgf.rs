//! SGF loading settings.

use hoshi_prefs::{FieldKey, Group, PrefField, PrefScreen, RefreshScope};

/// When loading an SGF file counts as a success.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoadSuccessType {
    /// The file loaded without any warning or error.
    NoWarningsOrErrors,
    /// The file loaded with warnings, but no critical error.
    #[default]
    NoCriticalErrors,
    /// Whatever could be parsed is used.
    WithCriticalErrors,
}

/// How the text encoding of an SGF file is determined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// The whole file uses one encoding.
    #[default]
    SingleEncoding,
    /// Each game tree declares its own encoding.
    MultipleEncodings,
    /// Single encoding first, multiple encodings if that fails.
    Both,
}

/// How SGF files are checked when loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgfSettingsModel {
    /// Strictness of the syntax check, from 1 (lenient) to 4 (strict).
    pub syntax_checking_level: u32,
    /// When a load counts as a success.
    pub load_success_type: LoadSuccessType,
    /// Reports properties that are valid but unusual.
    pub restrictive_checking: bool,
    /// How the text encoding is determined.
    pub encoding_mode: EncodingMode,
    /// Suppresses every warning message.
    pub disable_all_warnings: bool,
    /// Numbers of the warning messages that are suppressed.
    pub disabled_message_numbers: Vec<u32>,
}

impl Default for SgfSettingsModel {
    fn default() -> Self {
        Self {
            syntax_checking_level: 1,
            load_success_type: LoadSuccessType::default(),
            restrictive_checking: false,
            encoding_mode: EncodingMode::default(),
            disable_all_warnings: false,
            disabled_message_numbers: Vec::new(),
        }
    }
}

/// Fields of the SGF settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgfField {
    /// [`SgfSettingsModel::syntax_checking_level`]
    SyntaxCheckingLevel,
    /// [`SgfSettingsModel::load_success_type`]
    LoadSuccessType,
    /// [`SgfSettingsModel::restrictive_checking`]
    RestrictiveChecking,
    /// [`SgfSettingsModel::encoding_mode`]
    EncodingMode,
    /// [`SgfSettingsModel::disable_all_warnings`]
    DisableAllWarnings,
    /// [`SgfSettingsModel::disabled_message_numbers`]
    DisabledMessageNumbers,
}

impl FieldKey for SgfField {
    fn id(self) -> &'static str {
        match self {
            Self::SyntaxCheckingLevel => "syntax_checking_level",
            Self::LoadSuccessType => "load_success_type",
            Self::RestrictiveChecking => "restrictive_checking",
            Self::EncodingMode => "encoding_mode",
            Self::DisableAllWarnings => "disable_all_warnings",
            Self::DisabledMessageNumbers => "disabled_message_numbers",
        }
    }
}

type Field = PrefField<SgfSettingsModel, SgfField>;

/// Builds the SGF settings screen.
///
/// The whole screen offers "Reset to defaults".
#[must_use]
pub fn screen() -> PrefScreen<SgfSettingsModel, SgfField> {
    PrefScreen::new("SGF settings")
        .group(
            Group::new()
                .header("Loading")
                .field(Field::choice(
                    SgfField::SyntaxCheckingLevel,
                    "Syntax checking level",
                    [
                        (1, "1 - Lenient"),
                        (2, "2"),
                        (3, "3"),
                        (4, "4 - Strict"),
                    ],
                    |m| m.syntax_checking_level,
                    |m, level| m.syntax_checking_level = level,
                ))
                .field(Field::choice(
                    SgfField::LoadSuccessType,
                    "Load succeeds",
                    [
                        (LoadSuccessType::NoWarningsOrErrors, "Without warnings or errors"),
                        (LoadSuccessType::NoCriticalErrors, "Without critical errors"),
                        (LoadSuccessType::WithCriticalErrors, "Always"),
                    ],
                    |m| m.load_success_type,
                    |m, success| m.load_success_type = success,
                ))
                .field(Field::toggle(
                    SgfField::RestrictiveChecking,
                    "Restrictive checking",
                    |m| m.restrictive_checking,
                    |m, on| m.restrictive_checking = on,
                ))
                .field(Field::choice(
                    SgfField::EncodingMode,
                    "Encoding mode",
                    [
                        (EncodingMode::SingleEncoding, "Single encoding"),
                        (EncodingMode::MultipleEncodings, "Multiple encodings"),
                        (EncodingMode::Both, "Both"),
                    ],
                    |m| m.encoding_mode,
                    |m, mode| m.encoding_mode = mode,
                )),
        )
        .group(
            Group::new()
                .header("Messages")
                .footer("Messages listed here are not reported when an SGF file is loaded.")
                .field(
                    Field::toggle(
                        SgfField::DisableAllWarnings,
                        "Disable all warnings",
                        |m| m.disable_all_warnings,
                        |m, on| m.disable_all_warnings = on,
                    )
                    .refreshes(RefreshScope::Group),
                )
                .field(
                    Field::number_list(
                        SgfField::DisabledMessageNumbers,
                        "Disabled messages",
                        |m| m.disabled_message_numbers.clone(),
                        |m, numbers| m.disabled_message_numbers = numbers,
                    )
                    .visible_when(|m| !m.disable_all_warnings),
                ),
        )
}

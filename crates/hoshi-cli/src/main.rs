//! Command-line inspector for the Hoshi settings screens.
//!
//! Builds a screen against its default model, applies edits through the same
//! path the application uses, and prints the rendered layout.
//!
//! # Usage
//!
//! ```sh
//! hoshi engine-profile
//! ```
//!
//! Apply edits (values are parsed by field kind: `true`/`false` for switches,
//! integers for steppers, slider positions, choice indices, plain text for
//! numbers, and `add:N`, `remove:I` or `replace:I:N` for number lists):
//!
//! ```sh
//! hoshi engine-profile --set auto_select_resign_min_games=false --set resign_min_games=3
//! ```
//!
//! Print the layout as JSON:
//!
//! ```sh
//! hoshi sgf --set disabled_message_numbers=add:12 --json
//! ```
//!
//! Set `RUST_LOG=debug` to see every committed edit.

use std::process;

use clap::Parser;
use hoshi_prefs::{
    ConfirmResult, Control, EditError, EditInput, FieldKey, Layout, PrefScreen, ScreenSession,
    ValueKind,
};
use hoshi_screens::{ScreenKind, board_position, board_view, engine_profile, player, scoring, sgf};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Screen to show: board-view, engine-profile, sgf, player, board-position or scoring.
    #[arg(value_name = "SCREEN")]
    screen: ScreenKind,

    /// Edit to apply, as FIELD=VALUE. Repeatable; applied in order.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    edits: Vec<(String, String)>,

    /// Reset the whole screen to its defaults before applying edits.
    #[arg(long)]
    reset: bool,

    /// Engine profile offered on the player screen. Repeatable.
    #[arg(long = "profile", value_name = "NAME")]
    profiles: Vec<String>,

    /// Print the layout as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum CliError {
    #[display("{screen} has no field \"{field}\"")]
    UnknownField {
        screen: ScreenKind,
        field: String,
    },
    #[display("invalid value \"{value}\" for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[display("cannot set {field}: {source}")]
    Rejected {
        field: String,
        source: EditError,
    },
    #[display("cannot serialize layout: {_0}")]
    Json(serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownField { .. } => 2,
            Self::InvalidValue { .. } | Self::Rejected { .. } | Self::Json(_) => 1,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match args.screen {
        ScreenKind::BoardView => run(
            board_view::screen(|| log::info!("recomputing player influence")),
            &args,
        ),
        ScreenKind::EngineProfile => run(engine_profile::screen(), &args),
        ScreenKind::Sgf => run(sgf::screen(), &args),
        ScreenKind::Player => {
            let profiles = if args.profiles.is_empty() {
                vec!["Default".to_owned()]
            } else {
                args.profiles.clone()
            };
            run(player::screen(profiles), &args)
        }
        ScreenKind::BoardPosition => run(board_position::screen(), &args),
        ScreenKind::Scoring => run(scoring::screen(|| log::info!("recomputing score")), &args),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run<M, F>(screen: PrefScreen<M, F>, args: &Args) -> Result<(), CliError>
where
    M: Default,
    F: FieldKey,
{
    let mut model = M::default();
    let mut session = ScreenSession::new(screen, &mut model)
        .with_delegate(|| log::debug!("settings changed"));

    if args.reset {
        let outcome = session.reset_all(ConfirmResult::Confirmed);
        log::info!("reset: {outcome:?}");
    }

    for (name, value) in &args.edits {
        let (key, kind) = session
            .screen()
            .fields()
            .find(|field| field.key().id() == name.as_str())
            .map(|field| (field.key(), field.value_kind()))
            .ok_or_else(|| CliError::UnknownField {
                screen: args.screen,
                field: name.clone(),
            })?;
        let input = parse_input(kind, value).map_err(|reason| CliError::InvalidValue {
            field: name.clone(),
            value: value.clone(),
            reason,
        })?;
        let outcome = session
            .handle_edit(key, input)
            .map_err(|source| CliError::Rejected {
                field: name.clone(),
                source,
            })?;
        log::info!("{name}={value}: {outcome:?}");
    }

    let layout = session.render();
    if args.json {
        let json = serde_json::to_string_pretty(&layout).map_err(CliError::Json)?;
        println!("{json}");
    } else {
        print_layout(&layout);
    }
    Ok(())
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got \"{s}\""))?;
    Ok((field.trim().to_owned(), value.to_owned()))
}

fn parse_input(kind: ValueKind, value: &str) -> Result<EditInput, String> {
    let input = match kind {
        ValueKind::Boolean => EditInput::Toggle(value.parse().map_err(|_| {
            "expected true or false".to_owned()
        })?),
        ValueKind::Integer => EditInput::Step(value.parse().map_err(|_| {
            "expected an integer".to_owned()
        })?),
        ValueKind::Float => EditInput::Slide(value.parse().map_err(|_| {
            "expected a number".to_owned()
        })?),
        ValueKind::Choice => EditInput::Pick(value.parse().map_err(|_| {
            "expected a choice index".to_owned()
        })?),
        ValueKind::Number => EditInput::Text(value.to_owned()),
        ValueKind::NumberList => parse_list_edit(value)?,
    };
    Ok(input)
}

fn parse_list_edit(value: &str) -> Result<EditInput, String> {
    let parse_index = |index: &str| {
        index
            .parse::<usize>()
            .map_err(|_| format!("\"{index}\" is not an entry index"))
    };
    match value.split_once(':') {
        Some(("add", number)) => Ok(EditInput::AddNumber(number.to_owned())),
        Some(("remove", index)) => Ok(EditInput::RemoveNumber(parse_index(index)?)),
        Some(("replace", rest)) => {
            let (index, number) = rest
                .split_once(':')
                .ok_or_else(|| "expected replace:INDEX:NUMBER".to_owned())?;
            Ok(EditInput::ReplaceNumber {
                index: parse_index(index)?,
                text: number.to_owned(),
            })
        }
        _ => Err("expected add:NUMBER, remove:INDEX or replace:INDEX:NUMBER".to_owned()),
    }
}

fn print_layout<F>(layout: &Layout<F>) {
    println!("{}", layout.title);
    for group in &layout.groups {
        println!();
        if let Some(header) = group.header {
            println!("  [{header}]");
        }
        if group.rows.is_empty() {
            println!("    (hidden)");
        }
        for row in &group.rows {
            let state = if row.enabled { "" } else { " (read-only)" };
            println!(
                "    {} = {}{state}    # {}",
                row.id,
                describe(&row.control),
                row.label
            );
        }
        if let Some(footer) = group.footer {
            println!("  {footer}");
        }
    }
}

fn describe(control: &Control) -> String {
    match control {
        Control::Switch { on } => on.to_string(),
        Control::Stepper { value, min, max } => format!("{value} ({min}..={max})"),
        Control::Slider { value, min, max, .. } => format!("{value} ({min}..={max})"),
        Control::Picker { labels, selected } => {
            let choices = labels
                .iter()
                .enumerate()
                .map(|(index, label)| format!("{index}: {label}"))
                .collect::<Vec<_>>()
                .join(", ");
            match selected.and_then(|index| labels.get(index)) {
                Some(label) => format!("{label} [{choices}]"),
                None => format!("(none) [{choices}]"),
            }
        }
        Control::Text { value } => value.clone(),
        Control::NumberList { values } => {
            let values = values.iter().map(u32::to_string).collect::<Vec<_>>();
            format!("[{}]", values.join(", "))
        }
    }
}

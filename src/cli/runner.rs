use std::{env, fs, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use serde_json::Value;

use crate::cli::{output, prompts, CliError};
use crate::config::{Config, ConfigManager};
use crate::preview::PreviewModel;
use crate::submit::{DryRunGateway, SubmissionCoordinator};
use crate::wizard::{Field, FieldKind, FieldValue, FileHandle, NextOutcome, StepId, WizardSession};

const DEFAULT_OUT_DIR: &str = "submissions";

#[derive(Debug)]
struct CliArgs {
    answers: Option<PathBuf>,
    out_dir: PathBuf,
    help: bool,
}

pub fn run_cli() -> Result<(), CliError> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = load_config()?;
    let gateway = DryRunGateway::new(&args.out_dir);
    let coordinator = SubmissionCoordinator::with_timeout(gateway, config.submit_timeout());

    match args.answers {
        Some(path) => run_scripted(&path, &config, &coordinator),
        None => run_interactive(&config, &coordinator),
    }
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<CliArgs, CliError> {
    let mut args = CliArgs {
        answers: None,
        out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        help: false,
    };
    let mut raw = raw.peekable();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--answers" => {
                let path = raw
                    .next()
                    .ok_or_else(|| CliError::Usage("--answers requires a file path".into()))?;
                args.answers = Some(PathBuf::from(path));
            }
            "--out" => {
                let dir = raw
                    .next()
                    .ok_or_else(|| CliError::Usage("--out requires a directory".into()))?;
                args.out_dir = PathBuf::from(dir);
            }
            "--help" | "-h" => args.help = true,
            other => {
                return Err(CliError::Usage(format!(
                    "unrecognized argument `{other}`; see --help"
                )))
            }
        }
    }
    Ok(args)
}

fn print_usage() {
    println!(
        "Usage: listing_core_cli [options]\n\
         Options:\n  \
         --answers <file.json>  run scripted from an answers file\n  \
         --out <dir>            directory for submission manifests (default: {DEFAULT_OUT_DIR})\n  \
         --help                 show this message"
    );
}

/// Missing platform config dir only means no saved preferences; the wizard
/// still runs with defaults.
fn load_config() -> Result<Config, CliError> {
    match ConfigManager::new() {
        Ok(manager) => Ok(manager.load()?),
        Err(_) => Ok(Config::default()),
    }
}

fn run_scripted(
    path: &PathBuf,
    config: &Config,
    coordinator: &SubmissionCoordinator<DryRunGateway>,
) -> Result<(), CliError> {
    let raw = fs::read_to_string(path)?;
    let answers: serde_json::Map<String, Value> = serde_json::from_str(&raw)?;

    for key in answers.keys() {
        if Field::from_key(key).is_none() {
            return Err(CliError::UnknownField(key.clone()));
        }
    }

    let mut session = WizardSession::new();
    // Declaration order puts parent selectors before their dependents, so a
    // scripted answer set never loses a dependent value to a reset.
    for field in Field::ALL {
        if let Some(value) = answers.get(field.key()) {
            session.update_field(field, parse_answer(field, value)?);
        }
    }

    loop {
        match session.next() {
            NextOutcome::Advanced(step) => {
                tracing::debug!(step = %step, "advanced");
            }
            NextOutcome::Blocked(step) => {
                output::error(format!("step `{step}` rejected the provided answers"));
                return Err(CliError::BlockedStep(step.to_string()));
            }
            NextOutcome::AtEnd => break,
        }
    }

    render_preview(&session.preview(&config.locale_config(), &config.currency));
    let property = session.submit(coordinator)?;
    output::success(format!(
        "Advertisement submitted (id {}), manifest in {}",
        property.id,
        coordinator.gateway().out_dir().display()
    ));
    Ok(())
}

fn parse_answer(field: Field, value: &Value) -> Result<FieldValue, CliError> {
    match field.kind() {
        FieldKind::Text => match value {
            Value::String(text) => Ok(FieldValue::Text(text.clone())),
            Value::Number(number) => Ok(FieldValue::Text(number.to_string())),
            _ => Err(CliError::InvalidAnswer {
                key: field.key(),
                expected: "a string",
            }),
        },
        FieldKind::Flag => value
            .as_bool()
            .map(FieldValue::Flag)
            .ok_or(CliError::InvalidAnswer {
                key: field.key(),
                expected: "a boolean",
            }),
        FieldKind::List => string_array(value)
            .map(FieldValue::List)
            .ok_or(CliError::InvalidAnswer {
                key: field.key(),
                expected: "an array of strings",
            }),
        FieldKind::Files => string_array(value)
            .map(|paths| FieldValue::Files(paths.into_iter().map(FileHandle::new).collect()))
            .ok_or(CliError::InvalidAnswer {
                key: field.key(),
                expected: "an array of file paths",
            }),
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn run_interactive(
    config: &Config,
    coordinator: &SubmissionCoordinator<DryRunGateway>,
) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    let mut session = WizardSession::new();

    loop {
        let step = session.current_step();
        output::section(step_title(step));
        output::info(format!("Progress: {:.0}%", session.progress() * 100.0));

        match step {
            StepId::Intro => {
                output::info("This wizard walks you through publishing a property ad.");
                if !prompts::prompt_flag(&theme, "Start a new advertisement?", true)? {
                    output::info("Cancelled.");
                    return Ok(());
                }
            }
            StepId::Preview => {
                render_preview(&session.preview(&config.locale_config(), &config.currency));
                if !prompts::prompt_flag(&theme, "Submit this advertisement?", true)? {
                    output::info("Submission cancelled; nothing was sent.");
                    return Ok(());
                }
                let property = session.submit(coordinator)?;
                output::success(format!(
                    "Advertisement submitted (id {}), manifest in {}",
                    property.id,
                    coordinator.gateway().out_dir().display()
                ));
                return Ok(());
            }
            _ => {
                for field in step.fields() {
                    collect_field(&theme, &mut session, *field)?;
                }
            }
        }

        // A refused step is only re-attempted once something was edited.
        if session.is_blocked() && !session.take_dirty() {
            output::warning(format!(
                "nothing changed on `{step}`; fill its required fields to continue"
            ));
            continue;
        }
        if let NextOutcome::Blocked(step) = session.next() {
            output::warning(format!(
                "step `{step}` still needs its required fields; let's go again"
            ));
        }
    }
}

fn collect_field(
    theme: &ColorfulTheme,
    session: &mut WizardSession,
    field: Field,
) -> Result<(), CliError> {
    let value = match field.kind() {
        FieldKind::Text => {
            let text = prompts::prompt_text(theme, field.label())?;
            if text.trim().is_empty() {
                return Ok(());
            }
            FieldValue::Text(text)
        }
        FieldKind::Flag => FieldValue::Flag(prompts::prompt_flag(theme, field.label(), false)?),
        FieldKind::List => {
            let items = prompts::prompt_list(theme, field.label())?;
            if items.is_empty() {
                return Ok(());
            }
            FieldValue::List(items)
        }
        FieldKind::Files => {
            let paths = prompts::prompt_paths(theme, field.label())?;
            if paths.is_empty() {
                return Ok(());
            }
            FieldValue::Files(paths.into_iter().map(FileHandle::new).collect())
        }
    };
    session.update_field(field, value);
    Ok(())
}

fn step_title(step: StepId) -> &'static str {
    match step {
        StepId::Intro => "Welcome",
        StepId::License => "Advertising license",
        StepId::PropertyType => "Property type",
        StepId::Location => "Location",
        StepId::Details => "Details",
        StepId::Media => "Photos and videos",
        StepId::Contact => "Contact",
        StepId::Authority => "Authority information",
        StepId::Preview => "Preview",
    }
}

fn render_preview(model: &PreviewModel) {
    output::section("Preview");
    for (label, value) in model.entries() {
        println!("  {label}: {value}");
    }
}

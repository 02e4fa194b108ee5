use std::io::{self, Read};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::commands::{Cli, Commands, RunArgs};
use crate::cli::output::{format_list, list_json};
use crate::cli::script::{ScriptCommand, ScriptError, parse_line};
use crate::io::config_io::load_config;
use crate::io::logging::{LogTarget, build_filter, init_logging};
use crate::ops::{AppContext, EditError, ItemError};
use crate::view::ListView;

/// Error type for `tl run`
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("could not read script {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} script line(s) failed")]
    LinesFailed(usize),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single script line had no effect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Parse(#[from] ScriptError),
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based
    pub line: usize,
    pub error: StepError,
}

/// Entry point for everything after argument parsing
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let filter = build_filter(&config.log, cli.verbose)?;

    match cli.command {
        None => {
            init_logging(LogTarget::for_tui(&config.log), filter)?;
            crate::tui::run(&config)
        }
        Some(Commands::Run(args)) => {
            init_logging(LogTarget::for_cli(&config.log), filter)?;
            cmd_run(args)?;
            Ok(())
        }
    }
}

/// `tl run`: replay a script and print the resulting list
pub fn cmd_run(args: RunArgs) -> Result<(), RunError> {
    let src = read_script(&args.script)?;
    let (ctx, failures) = run_script(&src);

    for failure in &failures {
        eprintln!("warning: line {}: {}", failure.line, failure.error);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list_json(&ctx))?);
    } else {
        print!("{}", format_list(&ctx));
    }

    if args.strict && !failures.is_empty() {
        return Err(RunError::LinesFailed(failures.len()));
    }
    Ok(())
}

fn read_script(source: &str) -> Result<String, RunError> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| RunError::ReadError {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).map_err(|e| RunError::ReadError {
        path: PathBuf::from(source),
        source: e,
    })
}

/// Run every line against a fresh list. Failed lines are collected, never
/// fatal; the list reflects everything that did succeed.
pub fn run_script(src: &str) -> (AppContext<ListView>, Vec<LineFailure>) {
    let mut ctx = AppContext::new(ListView::new());
    ctx.refresh_counters();
    let mut failures = Vec::new();

    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;
        let result = parse_line(line)
            .map_err(StepError::from)
            .and_then(|cmd| match cmd {
                Some(cmd) => apply(&mut ctx, &cmd),
                None => Ok(()),
            });
        if let Err(error) = result {
            debug!(line = line_no, %error, "script line failed");
            failures.push(LineFailure {
                line: line_no,
                error,
            });
        }
    }

    info!(
        items = ctx.collection.size(),
        failed = failures.len(),
        "script finished"
    );
    (ctx, failures)
}

/// Apply one command the way the matching UI event would.
pub fn apply(ctx: &mut AppContext<ListView>, cmd: &ScriptCommand) -> Result<(), StepError> {
    match cmd {
        ScriptCommand::Add(text) => {
            ctx.add_item(text.as_str());
        }
        ScriptCommand::Check(key) => set_checked(ctx, key, true)?,
        ScriptCommand::Uncheck(key) => set_checked(ctx, key, false)?,
        ScriptCommand::Toggle(key) => {
            ctx.toggle_checked(key.as_str())
                .ok_or_else(|| ItemError::not_found(key))?;
        }
        ScriptCommand::ClearChecked => ctx.clear_checked(),
        ScriptCommand::Edit(key) => {
            ctx.begin_edit(key.as_str())?;
        }
        ScriptCommand::Commit(text) => {
            ctx.commit_edit(text.as_str())?;
        }
        ScriptCommand::Cancel => ctx.cancel_edit(),
        ScriptCommand::Delete(key) => {
            if ctx.delete_item(key.as_str()).is_none() {
                debug!(%key, "delete of unknown item ignored");
            }
        }
    }
    Ok(())
}

fn set_checked(ctx: &mut AppContext<ListView>, key: &str, checked: bool) -> Result<(), ItemError> {
    if ctx.set_checked(key, checked) {
        Ok(())
    } else {
        Err(ItemError::not_found(&key))
    }
}

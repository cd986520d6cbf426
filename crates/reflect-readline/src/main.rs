use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use reflect_application::{JournalUseCase, PlanDraft};
use reflect_core::ReflectError;
use reflect_core::config::{BackendKind, ReflectConfig};
use reflect_core::view::{NavTarget, View};

mod command;
mod render;

use command::{COMMANDS, Command, HELP};
use render::{print_error, render, render_personas, render_plan_draft};

#[derive(Parser, Debug)]
#[command(name = "persona-reflect")]
#[command(about = "Persona Reflect - reflect on a dilemma with four coach personas", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to ~/.config/persona-reflect/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Response backend: template or gemini
    #[arg(long)]
    backend: Option<String>,

    /// Simulated latency of the template backend, in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Start with an empty journal
    #[arg(long)]
    no_samples: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_config(args: &Args) -> Result<ReflectConfig> {
    let mut config = match &args.config {
        Some(path) => ReflectConfig::load_from(path)?,
        None => ReflectConfig::load()?,
    };
    if let Some(backend) = &args.backend {
        config.generation.backend = parse_backend(backend)?;
    }
    if let Some(latency_ms) = args.latency_ms {
        config.generation.latency_ms = latency_ms;
    }
    if args.no_samples {
        config.journal.seed_samples = false;
    }
    Ok(config)
}

fn parse_backend(name: &str) -> reflect_core::Result<BackendKind> {
    name.parse::<BackendKind>().map_err(|_| {
        ReflectError::config(format!(
            "unknown backend '{name}' (expected 'template' or 'gemini')"
        ))
    })
}

/// Whether the REPL keeps running after a command.
enum Flow {
    Continue,
    Quit,
}

/// The main entry point for the Persona Reflect REPL.
///
/// Generation runs on a background task so the prompt stays usable; the
/// result is printed when it arrives.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = load_config(&args)?;
    tracing::debug!(?config, "configuration loaded");
    let usecase = Arc::new(JournalUseCase::from_config(&config)?);

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    render(&usecase.snapshot().await);
    println!("{}", "Type /help for commands, or 'quit' to exit.".bright_black());
    println!();

    let mut drafted: Option<PlanDraft> = None;

    loop {
        let prompt = prompt_for(usecase.snapshot().await.view);
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match execute(&usecase, Command::parse(trimmed), &mut drafted).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Err(err) => print_error(&err),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

fn prompt_for(view: View) -> &'static str {
    match view {
        View::Home => "home> ",
        View::NewEntry => "new-entry> ",
        View::Dashboard => "dashboard> ",
        View::EntryDetail => "entry> ",
    }
}

async fn execute(
    usecase: &Arc<JournalUseCase>,
    command: Command,
    drafted: &mut Option<PlanDraft>,
) -> reflect_core::Result<Flow> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => println!("{HELP}"),
        Command::Personas => render_personas(),
        Command::Show => render(&usecase.snapshot().await),
        Command::Home => {
            usecase.navigate(NavTarget::Home).await?;
            render(&usecase.snapshot().await);
        }
        Command::NewEntry => {
            usecase.start_journal().await?;
            render(&usecase.snapshot().await);
        }
        Command::Dashboard => {
            usecase.navigate(NavTarget::Dashboard).await?;
            render(&usecase.snapshot().await);
        }
        Command::Open(target) => {
            let entry_id = resolve_entry_id(usecase, &target).await;
            usecase.select_entry(&entry_id).await?;
            render(&usecase.snapshot().await);
        }
        Command::Back => {
            usecase.back_to_dashboard().await?;
            render(&usecase.snapshot().await);
        }
        Command::Discard => {
            usecase.discard_draft().await?;
            render(&usecase.snapshot().await);
        }
        Command::Save => {
            let entry_id = usecase.save_without_plan().await?;
            println!("{}", format!("Saved entry {entry_id}").green());
            render(&usecase.snapshot().await);
        }
        Command::Plan(steps) => save_plan(usecase, steps).await?,
        Command::DraftPlan => {
            println!("{}", "Drafting an action plan…".yellow());
            let draft = usecase.draft_action_plan().await?;
            render_plan_draft(&draft.steps);
            *drafted = Some(draft);
        }
        Command::Accept => {
            let Some(draft) = drafted.take() else {
                println!("{}", "No drafted plan. Type /plan to draft one.".bright_black());
                return Ok(Flow::Continue);
            };
            let entry_id = usecase.accept_plan_draft(draft).await?;
            println!("{}", format!("Action plan saved to entry {entry_id}").green());
            render(&usecase.snapshot().await);
        }
        Command::Text(text) => submit(usecase, &text).await?,
        Command::Unknown(line) => {
            println!("{}", format!("Unknown command: {line}").bright_black());
        }
    }
    Ok(Flow::Continue)
}

/// Accepts either an entry id or a 1-based dashboard position.
async fn resolve_entry_id(usecase: &JournalUseCase, target: &str) -> String {
    let Ok(position) = target.parse::<usize>() else {
        return target.to_string();
    };
    let state = usecase.snapshot().await;
    position
        .checked_sub(1)
        .and_then(|index| state.store.get(index))
        .map(|entry| entry.id.clone())
        .unwrap_or_else(|| target.to_string())
}

async fn save_plan(usecase: &JournalUseCase, steps: Vec<String>) -> reflect_core::Result<()> {
    let state = usecase.snapshot().await;
    match state.view {
        View::NewEntry => {
            let entry_id = usecase.save_with_plan(steps).await?;
            println!("{}", format!("Saved entry {entry_id} with an action plan").green());
        }
        View::EntryDetail => {
            let entry_id = state
                .selected_entry_id
                .ok_or_else(|| ReflectError::invalid_state("no entry is open"))?;
            usecase.save_entry_plan(&entry_id, steps).await?;
            println!("{}", "Action plan saved".green());
        }
        _ => {
            return Err(ReflectError::invalid_state(
                "open an entry or review new responses before writing a plan",
            ));
        }
    }
    render(&usecase.snapshot().await);
    Ok(())
}

async fn submit(usecase: &Arc<JournalUseCase>, text: &str) -> reflect_core::Result<()> {
    if usecase.snapshot().await.view != View::NewEntry {
        println!(
            "{}",
            "Type /new to start a journal entry, or /help for commands.".bright_black()
        );
        return Ok(());
    }

    let handle = usecase.begin_submission(text).await?;
    println!("{}", "Generating…".yellow());

    let usecase = Arc::clone(usecase);
    tokio::spawn(async move {
        match handle.await {
            Ok(Ok(())) => {
                let state = usecase.snapshot().await;
                // Nothing to show when the user navigated away meanwhile.
                if state.view == View::NewEntry && state.draft.reflection.is_some() {
                    println!();
                    render(&state);
                }
            }
            Ok(Err(err)) => print_error(&err),
            Err(err) => eprintln!("{}", format!("Generation task failed: {err}").red()),
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("Gemini").unwrap(), BackendKind::Gemini);
        assert_eq!(parse_backend("template").unwrap(), BackendKind::Template);
        let err = parse_backend("openai").unwrap_err();
        assert!(matches!(err, ReflectError::Config(_)));
        assert!(err.to_string().contains("'openai'"));
    }
}

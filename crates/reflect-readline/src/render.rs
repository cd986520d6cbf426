//! Terminal rendering of each screen.

use chrono::{DateTime, NaiveDateTime};
use colored::Colorize;
use reflect_core::ReflectError;
use reflect_core::journal::JournalEntry;
use reflect_core::persona::{PersonaResponse, profiles};
use reflect_core::view::{AppState, NewEntryPhase, View};

/// Prints the screen for the current view.
pub fn render(state: &AppState) {
    match state.view {
        View::Home => render_home(state),
        View::NewEntry => render_new_entry(state),
        View::Dashboard => render_dashboard(state),
        View::EntryDetail => match state.current_entry() {
            Some(entry) => render_entry(entry),
            None => println!("{}", "The selected entry is no longer available.".yellow()),
        },
    }
}

fn render_home(state: &AppState) {
    println!("{}", "=== Persona Reflect ===".bright_magenta().bold());
    println!("Bring a dilemma. Four coaches will each offer a different lens.");
    println!(
        "{}",
        format!(
            "{} saved entries. Type /new to start, /dashboard to browse.",
            state.store.len()
        )
        .bright_black()
    );
}

fn render_new_entry(state: &AppState) {
    println!("{}", "=== New Entry ===".bright_magenta().bold());
    match state.new_entry_phase() {
        Some(NewEntryPhase::AwaitingDilemma) | None => {
            if let Some(err) = &state.last_error {
                print_error(err);
            }
            println!("{}", "What's on your mind? Type your dilemma.".bright_black());
        }
        Some(NewEntryPhase::Generating) => {
            let dilemma = state
                .pending
                .as_ref()
                .map(|pending| pending.dilemma.as_str())
                .unwrap_or_default();
            println!("{}", format!("\"{dilemma}\"").italic());
            println!("{}", "Generating…".yellow());
        }
        Some(NewEntryPhase::Reviewing) => {
            println!("{}", format!("\"{}\"", state.draft.dilemma).italic());
            println!();
            if let Some(reflection) = &state.draft.reflection {
                for response in &reflection.responses {
                    render_response(response);
                }
                render_steps("Suggested actions", &reflection.suggested_actions);
            }
            println!(
                "{}",
                "/plan to draft a plan, /plan a | b | c to write one, /save to save without one, /discard to start over."
                    .bright_black()
            );
        }
    }
}

fn render_dashboard(state: &AppState) {
    println!("{}", "=== Dashboard ===".bright_magenta().bold());
    if state.store.is_empty() {
        println!("{}", "No entries yet. Type /new to write one.".bright_black());
        return;
    }
    for (index, entry) in state.store.iter().enumerate() {
        let marker = if entry.has_action_plan() { "✓" } else { " " };
        println!(
            "{:>3}. {} {} {}",
            index + 1,
            format_date(&entry.date).bright_black(),
            marker.green(),
            preview(&entry.dilemma, 60)
        );
    }
    println!("{}", "/open <n> to read an entry.".bright_black());
}

fn render_entry(entry: &JournalEntry) {
    println!("{}", "=== Entry ===".bright_magenta().bold());
    println!("{}", format_date(&entry.date).bright_black());
    println!("{}", format!("\"{}\"", entry.dilemma).italic());
    println!();
    for response in &entry.responses {
        render_response(response);
    }
    if let Some(actions) = &entry.suggested_actions {
        render_steps("Suggested actions", actions);
    }
    match &entry.action_plan {
        Some(plan) => render_steps("Action plan", &plan.steps),
        None => println!(
            "{}",
            "No action plan yet. /plan to draft one, or /plan a | b | c to write it.".bright_black()
        ),
    }
    println!("{}", "/back to return to the dashboard.".bright_black());
}

fn render_response(response: &PersonaResponse) {
    println!(
        "{}",
        format!("{} {}", response.icon, response.name).bright_cyan().bold()
    );
    for line in response.response.lines() {
        println!("  {}", line.bright_blue());
    }
    println!();
}

fn render_steps(title: &str, steps: &[String]) {
    if steps.is_empty() {
        return;
    }
    println!("{}", title.bright_yellow());
    for (index, step) in steps.iter().enumerate() {
        println!("  {}", format!("{}. {}", index + 1, step).yellow());
    }
    println!();
}

/// Prints a drafted action plan and how to keep it.
pub fn render_plan_draft(steps: &[String]) {
    render_steps("Drafted action plan", steps);
    println!(
        "{}",
        "/accept to save it, or /plan a | b | c to write your own.".bright_black()
    );
}

/// Prints the persona catalog.
pub fn render_personas() {
    for profile in profiles() {
        println!(
            "{} {}",
            format!("{} {}", profile.icon, profile.name).bright_cyan().bold(),
            format!("({})", profile.title).bright_black()
        );
        println!("  {}", profile.description);
    }
}

pub fn print_error(err: &ReflectError) {
    eprintln!("{}", format!("Error: {err}").red());
    if err.is_retryable() {
        eprintln!("{}", "You can try again.".bright_black());
    }
}

/// Formats an ISO 8601 timestamp, with or without offset, as `Nov 07, 2025 14:30`.
fn format_date(raw: &str) -> String {
    const FORMAT: &str = "%b %d, %Y %H:%M";
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format(FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|date| date.format(FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() <= max_chars && first_line.len() == text.len() {
        return first_line.to_string();
    }
    let truncated: String = first_line.chars().take(max_chars).collect();
    format!("{truncated}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-11-07T14:30:00"), "Nov 07, 2025 14:30");
        assert_eq!(format_date("2025-11-07T14:30:00+00:00"), "Nov 07, 2025 14:30");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdefghij", 4), "abcd…");
        assert_eq!(preview("line one\nline two", 40), "line one…");
    }
}

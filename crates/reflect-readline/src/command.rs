//! REPL command parsing.

/// Slash commands offered for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/home",
    "/new",
    "/dashboard",
    "/open",
    "/back",
    "/discard",
    "/save",
    "/plan",
    "/accept",
    "/show",
    "/personas",
    "/help",
];

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    NewEntry,
    Dashboard,
    /// Entry id or 1-based position on the dashboard
    Open(String),
    Back,
    Discard,
    Save,
    /// Steps separated by `|`
    Plan(Vec<String>),
    /// `/plan` without steps: ask the generator for a draft
    DraftPlan,
    /// Save the last drafted plan
    Accept,
    Show,
    Personas,
    Help,
    Quit,
    /// Free text; a dilemma when the new-entry screen waits for one
    Text(String),
    Unknown(String),
}

impl Command {
    /// Parses a trimmed, non-empty input line.
    pub fn parse(line: &str) -> Self {
        if line == "quit" || line == "exit" {
            return Self::Quit;
        }
        if !line.starts_with('/') {
            return Self::Text(line.to_string());
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/home" => Self::Home,
            "/new" => Self::NewEntry,
            "/dashboard" => Self::Dashboard,
            "/open" if !rest.is_empty() => Self::Open(rest.to_string()),
            "/back" => Self::Back,
            "/discard" => Self::Discard,
            "/save" => Self::Save,
            "/plan" if rest.is_empty() => Self::DraftPlan,
            "/plan" => Self::Plan(split_steps(rest)),
            "/accept" => Self::Accept,
            "/show" => Self::Show,
            "/personas" => Self::Personas,
            "/help" => Self::Help,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Splits `a | b | c` into steps. Blank steps are left for the journal to reject.
fn split_steps(rest: &str) -> Vec<String> {
    rest.split('|').map(|step| step.trim().to_string()).collect()
}

pub const HELP: &str = "\
Commands:
  /home                 Go to the home screen
  /new                  Start a new journal entry
  /dashboard            List saved entries
  /open <n|id>          Open an entry from the dashboard
  /back                 Return from an entry to the dashboard
  /discard              Discard the generated responses
  /save                 Save the reviewed responses without a plan
  /plan a | b | c       Save with an action plan (new entry) or update the open entry's plan
  /plan                 Draft an action plan from the persona responses
  /accept               Save the drafted action plan
  /show                 Show the current screen again
  /personas             Describe the four coaches
  /help                 Show this help
  quit, exit            Leave

On the new-entry screen, type your dilemma as plain text to submit it.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(Command::parse("/new"), Command::NewEntry);
        assert_eq!(Command::parse("/dashboard"), Command::Dashboard);
        assert_eq!(Command::parse("/open 2"), Command::Open("2".into()));
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_plan_steps() {
        assert_eq!(
            Command::parse("/plan Open the portal |  Book an hour "),
            Command::Plan(vec!["Open the portal".into(), "Book an hour".into()])
        );
        assert_eq!(Command::parse("/plan"), Command::DraftPlan);
        assert_eq!(Command::parse("/plan |"), Command::Plan(vec![String::new(), String::new()]));
        assert_eq!(Command::parse("/accept"), Command::Accept);
    }

    #[test]
    fn test_free_text_and_unknown() {
        assert_eq!(
            Command::parse("I keep avoiding my taxes"),
            Command::Text("I keep avoiding my taxes".into())
        );
        assert!(matches!(Command::parse("/open"), Command::Unknown(_)));
        assert!(matches!(Command::parse("/frobnicate"), Command::Unknown(_)));
    }

    #[test]
    fn test_every_command_is_parsed() {
        for name in COMMANDS {
            let line = if *name == "/open" { "/open 1" } else { *name };
            assert!(!matches!(Command::parse(line), Command::Unknown(_)), "{name}");
        }
    }
}

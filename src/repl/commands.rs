//! Command metadata and parsing for the interactive prompt.

/// Static command metadata used by parsing and the help screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in commands for interactive mode.
pub const COMMANDS: [CommandSpec; 6] = [
    CommandSpec {
        name: "help",
        description: "List available commands.",
    },
    CommandSpec {
        name: "list games",
        description: "List every game in the catalog.",
    },
    CommandSpec {
        name: "list issues <game>",
        description: "List known issue categories for a game.",
    },
    CommandSpec {
        name: "troubleshoot <game> <issue>",
        description: "Show troubleshooting steps for a game issue.",
    },
    CommandSpec {
        name: "fix crashes <game>",
        description: "Run the crash-cleanup actions for a game.",
    },
    CommandSpec {
        name: "exit",
        description: "Leave the helper.",
    },
];

pub const USAGE_LIST: &str = "Usage: list games | list issues <game>";
pub const USAGE_TROUBLESHOOT: &str = "Usage: troubleshoot <game> <issue>";
pub const USAGE_FIX: &str = "Usage: fix crashes <game>";

/// Parsed commands consumed by the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ListGames,
    ListIssues(String),
    Troubleshoot { game: String, issue: String },
    FixCrashes(String),
    Exit,
    /// Recognized command with missing or malformed arguments.
    Usage(&'static str),
    Unknown(String),
}

/// Parse one input line.
///
/// Returns `None` for blank input. The first token selects the command
/// case-insensitively; `list`'s sub-token is also case-insensitive, while
/// `fix` requires the literal second token `crashes`. Game names keep their
/// exact spelling; multi-token game names and issue queries are rejoined with
/// single spaces.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut tokens = input.split_whitespace();
    let first = tokens.next()?.to_ascii_lowercase();
    let rest: Vec<&str> = tokens.collect();

    let command = match first.as_str() {
        "help" => Command::Help,
        "exit" => Command::Exit,
        "list" => match rest.first().map(|token| token.to_ascii_lowercase()) {
            Some(topic) if topic == "games" => Command::ListGames,
            Some(topic) if topic == "issues" => {
                if rest.len() < 2 {
                    Command::Usage(USAGE_LIST)
                } else {
                    Command::ListIssues(rest[1..].join(" "))
                }
            }
            _ => Command::Usage(USAGE_LIST),
        },
        "troubleshoot" => {
            if rest.len() < 2 {
                Command::Usage(USAGE_TROUBLESHOOT)
            } else {
                Command::Troubleshoot {
                    game: rest[0].to_string(),
                    issue: rest[1..].join(" "),
                }
            }
        }
        "fix" => {
            if rest.first().copied() != Some("crashes") || rest.len() < 2 {
                Command::Usage(USAGE_FIX)
            } else {
                Command::FixCrashes(rest[1..].join(" "))
            }
        }
        _ => Command::Unknown(first),
    };

    Some(command)
}

//! Interactive session loop and command dispatch.
//!
//! The loop has a single state, awaiting one command line per iteration. The
//! only cross-iteration state is an optional pending cleanup confirmation;
//! every lookup or usage error is recovered here and rendered as a line, so
//! nothing short of `exit` or end of input terminates the loop.

pub mod commands;

pub use commands::{parse_command, Command, CommandSpec, COMMANDS};

use crate::actions::ActionRunner;
use crate::catalog::Catalog;
use crate::error::LookupError;
use crate::render::RenderSink;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const GOODBYE: &str = "Goodbye. Happy gaming!";

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// One interactive session over the catalog and action runner.
pub struct Session<'a> {
    catalog: &'a Catalog,
    runner: &'a ActionRunner,
    sink: &'a dyn RenderSink,
    /// Ask before running a cleanup plan.
    confirm_cleanup: bool,
    /// Game awaiting a cleanup confirmation decision.
    pending_cleanup: Option<String>,
}

impl<'a> Session<'a> {
    pub fn new(
        catalog: &'a Catalog,
        runner: &'a ActionRunner,
        sink: &'a dyn RenderSink,
        confirm_cleanup: bool,
    ) -> Self {
        Self {
            catalog,
            runner,
            sink,
            confirm_cleanup,
            pending_cleanup: None,
        }
    }

    /// Render the interactive prompt chrome.
    pub fn render_prompt(&self) {
        self.sink.prompt();
    }

    /// Render the goodbye line used for both `exit` and end of input.
    pub fn render_goodbye(&self) {
        self.sink.activity(GOODBYE);
    }

    /// Dispatch one input line. Blank lines are ignored.
    pub async fn handle_line(&mut self, line: &str) -> Step {
        if let Some(game) = self.pending_cleanup.take() {
            if approves(line) {
                self.fix_crashes(&game).await;
            } else {
                self.sink.activity("Cleanup cancelled.");
            }
            return Step::Continue;
        }

        let Some(command) = parse_command(line) else {
            return Step::Continue;
        };

        match command {
            Command::Help => self.render_help(),
            Command::ListGames => self.render_games(),
            Command::ListIssues(game) => self.render_issues(&game),
            Command::Troubleshoot { game, issue } => self.render_advice(&game, &issue),
            Command::FixCrashes(game) => {
                if self.confirm_cleanup {
                    self.sink.warn(&format!(
                        "About to run cleanup actions for {game}. Reply y/yes to continue."
                    ));
                    self.pending_cleanup = Some(game);
                } else {
                    self.fix_crashes(&game).await;
                }
            }
            Command::Exit => {
                self.render_goodbye();
                return Step::Quit;
            }
            Command::Usage(usage) => self.sink.warn(usage),
            Command::Unknown(cmd) => {
                self.sink.warn(&format!("Unknown command: {cmd}. Try `help`."));
            }
        }

        Step::Continue
    }

    fn render_help(&self) {
        self.sink.section("commands");
        for spec in &COMMANDS {
            self.sink.field(spec.name, spec.description);
        }
    }

    fn render_games(&self) {
        self.sink.section("games");
        for game in self.catalog.games() {
            self.sink.item(game);
        }
    }

    fn render_issues(&self, game: &str) {
        match self.catalog.issues(game) {
            Ok(categories) => {
                self.sink.section(&format!("known issues for {game}"));
                for category in categories {
                    self.sink.item(category);
                }
            }
            Err(e) => self.render_lookup_error(&e),
        }
    }

    fn render_advice(&self, game: &str, issue: &str) {
        match self.catalog.resolve_issue(game, issue) {
            Ok((category, steps)) => {
                self.sink.section(&format!("{game}: {category}"));
                for (index, step) in steps.iter().enumerate() {
                    self.sink.step(index + 1, step);
                }
            }
            Err(e) => self.render_lookup_error(&e),
        }
    }

    fn render_lookup_error(&self, err: &LookupError) {
        self.sink.warn(&err.to_string());
        if let LookupError::IssueNotFound { available, .. } = err {
            for category in available {
                self.sink.item(category);
            }
        }
    }

    async fn fix_crashes(&self, game: &str) {
        let plan = self.catalog.crash_fix_plan(game);
        self.sink.section(&format!("crash cleanup for {game}"));
        self.runner.run(plan, self.sink).await;
    }
}

/// Interpret a confirmation reply; empty and unrecognized input deny.
fn approves(input: &str) -> bool {
    matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

/// Drive a session over buffered input lines until `exit` or end of input.
pub async fn run<R>(session: &mut Session<'_>, reader: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        session.render_prompt();
        match lines.next_line().await? {
            Some(line) => {
                if session.handle_line(&line).await == Step::Quit {
                    return Ok(());
                }
            }
            None => {
                session.render_goodbye();
                return Ok(());
            }
        }
    }
}

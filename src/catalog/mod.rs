//! Static catalog of games, issue categories, and cleanup plans.
//!
//! The catalog is immutable, built once at startup, and passed explicitly to
//! the session loop and action runner. Crash-fix plans live in a structurally
//! separate field, so issue enumeration and issue matching can never surface
//! them.
//!
//! Lookup rules are a behavioral contract carried over from the original
//! helper: game names match case-sensitively, issue names case-insensitively.

mod data;

use crate::actions::CleanupAction;
use crate::error::LookupError;
use std::collections::BTreeMap;
use tracing::debug;

pub use data::GENERIC_PROCESS;

/// Advice categories and optional cleanup plan for one game.
#[derive(Debug, Clone, Default)]
pub struct GameEntry {
    /// Ordered troubleshooting steps keyed by issue category.
    pub advice: BTreeMap<String, Vec<String>>,
    /// Dedicated crash-cleanup plan, if the game ships one.
    pub crash_fix: Option<Vec<CleanupAction>>,
}

/// Immutable game/issue/advice catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: BTreeMap<String, GameEntry>,
    generic_crash_fix: Vec<CleanupAction>,
}

impl Catalog {
    /// Built-in catalog shipped with the binary.
    pub fn builtin() -> Self {
        data::builtin()
    }

    /// Construct a catalog from explicit entries and a fallback plan.
    pub fn new(games: BTreeMap<String, GameEntry>, generic_crash_fix: Vec<CleanupAction>) -> Self {
        Self {
            games,
            generic_crash_fix,
        }
    }

    /// All game names, in stable iteration order.
    pub fn games(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }

    /// Advice categories for a game, in catalog order.
    ///
    /// Game lookup is case-sensitive.
    pub fn issues(&self, game: &str) -> Result<Vec<&str>, LookupError> {
        let entry = self.entry(game)?;
        Ok(entry.advice.keys().map(String::as_str).collect())
    }

    /// Resolve an issue query against a game's advice categories.
    ///
    /// Game lookup is case-sensitive; the issue match is case-insensitive,
    /// and the first match in catalog order wins.
    pub fn resolve_issue(
        &self,
        game: &str,
        query: &str,
    ) -> Result<(&str, &[String]), LookupError> {
        let entry = self.entry(game)?;
        for (category, steps) in &entry.advice {
            if category.eq_ignore_ascii_case(query) {
                return Ok((category.as_str(), steps.as_slice()));
            }
        }
        debug!(game, query, "no advice category matched");
        Err(LookupError::IssueNotFound {
            game: game.to_string(),
            available: entry.advice.keys().cloned().collect(),
        })
    }

    /// Cleanup plan for a game: its dedicated plan when present, the generic
    /// fallback otherwise (including for unknown games).
    ///
    /// Game lookup is case-sensitive.
    pub fn crash_fix_plan(&self, game: &str) -> &[CleanupAction] {
        match self.games.get(game).and_then(|entry| entry.crash_fix.as_deref()) {
            Some(plan) => plan,
            None => {
                debug!(game, "no dedicated cleanup plan, using the generic one");
                &self.generic_crash_fix
            }
        }
    }

    fn entry(&self, game: &str) -> Result<&GameEntry, LookupError> {
        self.games
            .get(game)
            .ok_or_else(|| LookupError::GameNotFound(game.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_unstable();
        names
    }

    #[test]
    fn issues_for_cold_war() {
        let catalog = Catalog::builtin();
        let issues = catalog.issues("Cold War").unwrap();
        assert_eq!(sorted(issues), ["crashes", "lag"]);
    }

    #[test]
    fn issue_listings_never_surface_the_cleanup_plan() {
        let catalog = Catalog::builtin();
        for game in catalog.games().collect::<Vec<_>>() {
            let issues = catalog.issues(game).unwrap();
            assert!(
                issues.iter().all(|name| !name.eq_ignore_ascii_case("crash fix")),
                "cleanup plan leaked into issues for {game}"
            );
        }
    }

    #[test]
    fn issue_match_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let (upper, upper_steps) = catalog.resolve_issue("BO6", "Connection").unwrap();
        let (lower, lower_steps) = catalog.resolve_issue("BO6", "connection").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper_steps, lower_steps);
        assert_eq!(upper_steps.len(), 3);
    }

    #[test]
    fn game_lookup_is_case_sensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.issues("cold war").unwrap_err(),
            LookupError::GameNotFound("cold war".into())
        );
        assert_eq!(
            catalog.resolve_issue("bo6", "connection").unwrap_err(),
            LookupError::GameNotFound("bo6".into())
        );
    }

    #[test]
    fn unmatched_issue_reports_the_available_categories() {
        let catalog = Catalog::builtin();
        let err = catalog.resolve_issue("BO6", "teleportation").unwrap_err();
        match err {
            LookupError::IssueNotFound { game, available } => {
                assert_eq!(game, "BO6");
                let mut available = available;
                available.sort_unstable();
                assert_eq!(available, ["connection", "crashes", "performance"]);
            }
            other => panic!("expected IssueNotFound, got {other:?}"),
        }
    }

    #[test]
    fn unknown_game_fails_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.issues("Warzone").unwrap_err(),
            LookupError::GameNotFound("Warzone".into())
        );
    }

    #[test]
    fn cold_war_ships_a_four_action_plan_with_stop_before_delete() {
        let catalog = Catalog::builtin();
        let plan = catalog.crash_fix_plan("Cold War");
        assert_eq!(plan.len(), 4);

        let stop = plan
            .iter()
            .position(|a| matches!(a, CleanupAction::StopProcess(_)))
            .expect("plan has a stop action");
        let delete = plan
            .iter()
            .position(|a| matches!(a, CleanupAction::DeleteTempFiles(_)))
            .expect("plan has a delete action");
        assert!(stop < delete, "stop must precede delete");
    }

    #[test]
    fn unknown_game_gets_the_generic_plan() {
        let catalog = Catalog::builtin();
        let plan = catalog.crash_fix_plan("UnknownGame");
        assert_eq!(plan.len(), 4);
        assert!(plan
            .iter()
            .any(|a| matches!(a, CleanupAction::StopProcess(name) if name == GENERIC_PROCESS)));
    }

    #[test]
    fn game_without_a_dedicated_plan_gets_the_generic_one() {
        let catalog = Catalog::builtin();
        assert!(catalog.issues("MW2").is_ok());
        let plan = catalog.crash_fix_plan("MW2");
        assert!(plan
            .iter()
            .any(|a| matches!(a, CleanupAction::StopProcess(name) if name == GENERIC_PROCESS)));
    }
}

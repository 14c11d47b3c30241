//! Built-in catalog data.

use super::{Catalog, GameEntry};
use crate::actions::CleanupAction;
use std::collections::BTreeMap;
use std::env;

/// Process name targeted by the generic fallback plan.
pub const GENERIC_PROCESS: &str = "game.exe";

pub(super) fn builtin() -> Catalog {
    let mut games = BTreeMap::new();

    games.insert(
        "BO6".to_string(),
        GameEntry {
            advice: advice(&[
                (
                    "connection",
                    &[
                        "Restart your router and modem, then relaunch the game.",
                        "Prefer a wired ethernet connection over Wi-Fi.",
                        "Set your DNS servers to 1.1.1.1 and 8.8.8.8.",
                    ],
                ),
                (
                    "performance",
                    &[
                        "Update your GPU driver to the latest release.",
                        "Lower texture quality one notch and disable ray tracing.",
                        "Close overlay apps before launching.",
                        "Cap the frame rate slightly below your monitor's refresh rate.",
                    ],
                ),
                (
                    "crashes",
                    &[
                        "Verify the game files from the launcher.",
                        "Disable hardware-accelerated GPU scheduling.",
                        "Do a clean reinstall of the graphics driver.",
                    ],
                ),
            ]),
            crash_fix: Some(vec![
                CleanupAction::Note("Closing BO6 before cleanup.".to_string()),
                CleanupAction::StopProcess("cod.exe".to_string()),
                CleanupAction::DeleteTempFiles(env::temp_dir()),
                CleanupAction::Note(
                    "Cleanup done. Verify the game files before relaunching.".to_string(),
                ),
            ]),
        },
    );

    games.insert(
        "Cold War".to_string(),
        GameEntry {
            advice: advice(&[
                (
                    "crashes",
                    &[
                        "Delete the shader cache from the game's settings menu.",
                        "Verify the game files from the launcher.",
                        "Disable any overclock and retest.",
                    ],
                ),
                (
                    "lag",
                    &[
                        "Close background downloads and streaming apps.",
                        "Pick the server region closest to you.",
                        "Prefer a wired ethernet connection over Wi-Fi.",
                    ],
                ),
            ]),
            crash_fix: Some(vec![
                CleanupAction::Note("Closing Black Ops Cold War before cleanup.".to_string()),
                CleanupAction::StopProcess("BlackOpsColdWar.exe".to_string()),
                CleanupAction::DeleteTempFiles(env::temp_dir()),
                CleanupAction::Note(
                    "Cleanup done. Relaunch the game and watch for further crashes.".to_string(),
                ),
            ]),
        },
    );

    games.insert(
        "MW2".to_string(),
        GameEntry {
            advice: advice(&[
                (
                    "performance",
                    &[
                        "Set render resolution to 100 and let upscaling do the rest.",
                        "Update your GPU driver to the latest release.",
                        "Turn off on-demand texture streaming.",
                    ],
                ),
                (
                    "audio",
                    &[
                        "Set the Windows output sample rate to 48 kHz.",
                        "Disable spatial sound enhancements.",
                        "Switch the in-game audio mix to Home Theater.",
                    ],
                ),
            ]),
            crash_fix: None,
        },
    );

    Catalog::new(games, generic_crash_fix())
}

fn generic_crash_fix() -> Vec<CleanupAction> {
    vec![
        CleanupAction::Note("No dedicated cleanup recipe for this game; applying the generic one.".to_string()),
        CleanupAction::StopProcess(GENERIC_PROCESS.to_string()),
        CleanupAction::DeleteTempFiles(env::temp_dir()),
        CleanupAction::Note("Generic cleanup done. Relaunch the game and check again.".to_string()),
    ]
}

fn advice(categories: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    categories
        .iter()
        .map(|(category, steps)| {
            (
                category.to_string(),
                steps.iter().map(|step| step.to_string()).collect(),
            )
        })
        .collect()
}

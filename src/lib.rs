//! Medic — an interactive troubleshooting helper for a fixed game catalog.
//!
//! The crate maps games and issue categories to ordered advice steps, and can
//! run a short best-effort cleanup plan ("fix crashes") for a selected game.
//! The catalog is typed and immutable; cleanup plans are tagged actions
//! interpreted by the action runner, never stored shell source.
//!
//! # Quick start
//!
//! ```no_run
//! use medic::actions::{ActionRunner, SystemExecutor};
//! use medic::catalog::Catalog;
//! use medic::render::Renderer;
//! use medic::repl::Session;
//!
//! # async fn example() {
//! let catalog = Catalog::builtin();
//! let runner = ActionRunner::new(SystemExecutor);
//! let renderer = Renderer::new(true);
//! let mut session = Session::new(&catalog, &runner, &renderer, false);
//! session.handle_line("list games").await;
//! # }
//! ```

pub mod actions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod repl;
#[cfg(test)]
pub mod testsupport;

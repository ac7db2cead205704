//! letterdrill-core — Question generation, grading, and session engine.
//!
//! This crate holds the letter ↔ number conversions, the drill data model,
//! and the pure logic that turns a configuration into graded questions. It
//! knows nothing about terminals or rendering.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod generator;
pub mod grader;
pub mod model;
pub mod random;
pub mod report;
pub mod session;
pub mod settings;

pub use error::{ConfigError, StoreError};
pub use model::{Configuration, Direction, GridOrder, Mode, Unit};
pub use session::{Session, SessionResult};

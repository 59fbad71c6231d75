//! The Simon Says game engine and its construction.
//!
//! - [`Engine`] - the four-phase game state machine
//! - [`EngineBuilder`] - fluent assembly with validation
//! - [`Timing`] - the fixed delays of the playback protocol

mod builder;
mod config;
mod error;
mod machine;
mod session;

pub use builder::EngineBuilder;
pub use config::Timing;
pub use error::{BuildError, TimingError};
pub use machine::{Engine, GameSnapshot};
pub use session::SessionId;

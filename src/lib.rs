//! Simon: a headless Simon Says game engine
//!
//! The engine generates an ever-growing colour sequence, replays it to the
//! player through timed commands, captures the player's presses and judges
//! them. Rendering and audio live behind the [`Presenter`](presenter::Presenter)
//! trait; time lives behind the [`Clock`](timing::Clock) trait.
//!
//! # Core Concepts
//!
//! - **Phase**: Idle, Playback, InputWait or GameOver; only InputWait accepts
//!   presses
//! - **Epoch**: generation token bumped by every start; timers from an older
//!   epoch are ignored
//! - **Beat**: one step of playback, showing one element of the sequence
//!
//! # Example
//!
//! ```rust
//! use simon::core::Phase;
//! use simon::engine::Engine;
//! use simon::presenter::{RecordingPresenter, Status};
//! use simon::timing::ManualClock;
//! use std::time::Duration;
//!
//! let mut engine = Engine::new(RecordingPresenter::new(), ManualClock::new());
//! engine.start();
//! engine.advance(Duration::from_millis(1200));
//! assert_eq!(engine.presenter().last_status(), Some(Status::YourTurn));
//!
//! let wrong = simon::core::Color::ALL
//!     .into_iter()
//!     .find(|&c| c != engine.sequence()[0])
//!     .unwrap();
//! engine.on_color_pressed(wrong);
//! assert_eq!(engine.phase(), Phase::GameOver);
//! ```

pub mod core;
pub mod engine;
pub mod presenter;
pub mod timing;

// Re-export commonly used types
pub use self::core::{Color, Epoch, Phase, Sequence};
pub use engine::{BuildError, Engine, EngineBuilder, Timing};
pub use presenter::{Presenter, Status};
pub use timing::{Clock, ManualClock, SystemClock};

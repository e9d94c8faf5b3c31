//! ptracker-app - Application state and orchestration for the promise tracker
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `Message` → `update()` → `UpdateAction` → background task →
//! `Message`. It also owns the promise detail controller, cancellation
//! scopes, routing, and configuration loading.

pub mod actions;
pub mod config;
pub mod detail;
pub mod handler;
pub mod input_key;
pub mod loadable;
pub mod message;
pub mod notice;
pub mod process;
pub mod route;
pub mod scope;
pub mod scorecard;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use detail::{DetailFocus, DetailMode, PromiseDetail};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use loadable::Loadable;
pub use message::Message;
pub use notice::{Notice, NoticeKind};
pub use process::process_message;
pub use route::{Route, NAV_ITEMS};
pub use scope::{CancelScope, ScopeGuard, ScopeId};
pub use scorecard::Scorecard;
pub use state::{AppPhase, AppState, LoginChoice};

//! Marquee: a terminal movie browser for TMDb
//!
//! The location fragment (`#trends`, `#search=<query>`, `#movie=<id>`,
//! `#category=<id>-<name>`) is the only routing signal. Each change
//! reconfigures the screen and fetches the data the new view needs.
//!
//! This crate wires the pieces together:
//!
//! - [`config`]: CLI flags, environment and `config.toml`
//! - [`logging`]: file-only `tracing` subscriber
//! - [`runtime`]: the event/action/render loop
//! - [`effects`]: fetch effects to gateway tasks
//! - [`ui`]: screen composition and key routing

pub mod config;
pub mod effects;
pub mod logging;
pub mod poller;
pub mod runtime;
pub mod tasks;
pub mod ui;

pub use config::{Args, Config, ConfigError, FileConfig};
pub use runtime::{EventOutcome, Runtime};
pub use ui::MarqueeUi;

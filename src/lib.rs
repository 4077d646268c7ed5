pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod handler;
pub mod logging;
pub mod repl;
pub mod source;
pub mod surface;

pub use handler::echo::{EchoHandler, handle};

// Library root
// -----------
// The binary (`main.rs`) only wires these modules together.
//
// Module responsibilities:
// - `users`: the in-memory user list and its list/add/remove operations.
// - `app`: action parsing, terminal prompts and the interactive loop.
// - `message` / `console`: severity-tagged output and table rendering.
// - `timing`: per-operation duration reporting.
// - `config` / `logger`: environment configuration and log setup.
pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod message;
pub mod timing;
pub mod users;

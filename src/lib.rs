#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

//! Briefly
//!
//! An in-memory URL shortener where every link is short-lived: records
//! live only inside the process that created them and expire 30 minutes
//! after creation (configurable). The [`Registry`] owns all records and
//! is the only thing allowed to mutate them; front ends call its
//! operations and render the results.
//!
//! Time and randomness are injected seams ([`Clock`], [`CodeGenerator`]),
//! so expiry and collision behavior are deterministic under test.

pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use codegen::CodeGenerator;
pub use codegen::WordNumberGenerator;
pub use codegen::sanitize_code;
pub use config::Config;
pub use links::Link;
pub use registry::Error;
pub use registry::Registry;
pub use registry::Totals;

mod clock;
mod codegen;
mod config;
pub mod console;
mod links;
mod registry;
#[cfg(test)]
mod tests;
mod urls;

//! Registry test suite
//!
//! Everything runs on a manual clock and scripted code generators: no
//! real timers, no randomness


mod create;
mod totals;

//! earnings-signal: deterministic sentiment scoring for earnings calls
//!
//! This library provides:
//! - A fixed phrase lexicon and substring matcher
//! - A rule engine that scores, classifies and flags transcript segments
//! - Momentum blending of each segment with the previous segment's score
//! - A static market-consensus fallback table
//! - Provider traits with silent fallback when the live source fails
//! - Call sessions that thread scores across a transcript
//! - CLI, configuration and telemetry

pub mod analysis;
pub mod cli;
pub mod config;
pub mod lexicon;
pub mod market;
pub mod provider;
pub mod session;
pub mod telemetry;

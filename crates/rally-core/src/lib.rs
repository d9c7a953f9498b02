//! Core matching engine for the Rally campus influencer marketplace.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

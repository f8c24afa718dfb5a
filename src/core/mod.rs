//! Charter model, editing rules, and configuration

pub mod charter;
pub mod config;
pub mod editor;
pub mod error;
pub mod identifier;
pub mod sink;
pub mod update;

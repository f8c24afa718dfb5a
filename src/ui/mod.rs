//! UI components for the charter editor

pub mod form;
pub mod share_dialog;

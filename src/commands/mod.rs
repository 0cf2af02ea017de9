//! CLI commands for sograph

pub mod demo;
pub mod dispatch;
pub mod query;
pub mod render;
pub mod run;

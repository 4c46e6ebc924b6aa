pub mod codes;
pub mod common;
pub mod data_loader;
pub mod error;
pub mod export;
pub mod generate_commands;
pub mod generator;
pub mod output;
pub mod params;
pub mod plan;
pub mod plan_execution;
pub mod roster;

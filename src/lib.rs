pub mod catalog;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod worldgen;

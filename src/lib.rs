pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod stats;
pub mod table;

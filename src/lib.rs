pub mod cache;
pub mod command;
pub mod config;
pub mod discovery;
pub mod github;
pub mod harvest;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod runtime;

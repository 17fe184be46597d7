pub mod commands;
pub mod environment;
pub mod render;
pub mod script;

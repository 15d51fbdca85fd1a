// src/application/ports/mod.rs
pub mod completion;
pub mod security;
pub mod time;
pub mod util;
pub mod views;


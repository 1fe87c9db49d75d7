// src/core.rs
pub mod config;
pub mod decision;
pub mod policy;
pub mod scanner;
pub mod sessions;
pub mod zone;

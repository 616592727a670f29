//! Domain models

pub mod bank;

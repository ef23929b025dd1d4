//! Configuration management for cmdfm.
//!
//! User preferences ([`settings::Config`]) are stored as a TOML file and
//! loaded at startup; every field has a default.

pub mod settings;

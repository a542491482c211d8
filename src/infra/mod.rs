//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (HTTP backend, token file, config).

pub mod api;
pub mod app_config;
pub mod token;

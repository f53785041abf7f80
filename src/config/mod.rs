//! Configuration module for ShopLedger
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::ShopPaths;
pub use settings::Settings;

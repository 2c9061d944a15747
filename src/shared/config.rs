// src/shared/config.rs
use std::env;

use serde::Serialize;

/// Site-wide branding strings, loaded once at startup and handed to the
/// admin collaborator read-only. Never mutated after boot.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub site_header: String,
    pub site_title: String,
    pub index_title: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            site_header: env::var("SITE_HEADER").unwrap_or_else(|_| "Portfolio Admin".to_string()),
            site_title: env::var("SITE_TITLE").unwrap_or_else(|_| "Portfolio Admin".to_string()),
            index_title: env::var("SITE_INDEX_TITLE")
                .unwrap_or_else(|_| "Welcome to Your Portfolio Admin Panel".to_string()),
        }
    }
}

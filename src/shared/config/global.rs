use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{Settings, load_settings};

/// Process-wide settings. Loaded on first access from the file named by
/// `SNEL_MARSHAL_CONFIG` plus `SNEL_MARSHAL__*` overrides; nothing in the
/// decode path touches it unless asked to.
pub static CONFIG: Lazy<Arc<Settings>> =
    Lazy::new(|| Arc::new(load_settings().expect("Failed to load configuration")));

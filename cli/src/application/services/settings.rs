//! Application service: CLI settings use-cases.

use anyhow::Result;

use crate::application::ports::SettingsStore;
use crate::domain::settings::PostizSettings;

/// Load settings.
pub fn load_settings(store: &impl SettingsStore) -> Result<PostizSettings> {
    store.load()
}

/// Validate and persist a single setting. The file is untouched when the
/// key or value is rejected.
///
/// # Errors
///
/// Returns an error if the key is unknown, the value is invalid, or the
/// file cannot be written.
pub fn set_setting(store: &impl SettingsStore, key: &str, value: &str) -> Result<PostizSettings> {
    let mut settings = store.load()?;
    settings.apply(key, value)?;
    store.save(&settings)?;
    Ok(settings)
}

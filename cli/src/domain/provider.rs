//! Provider view projection and edit requests.

use postiz_common::{ProviderDefinition, ProviderStatus, find_provider, list_providers};

use crate::domain::env_file::EnvMap;
use crate::domain::error::ProviderError;

/// A provider combined with its current values from a configuration
/// document. Built per listing and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderView {
    pub definition: &'static ProviderDefinition,
    pub client_id: String,
    pub client_secret: String,
    pub extra: Option<String>,
}

impl ProviderView {
    #[must_use]
    pub fn project(definition: &'static ProviderDefinition, vars: &EnvMap) -> Self {
        let get = |key: &str| vars.get(key).cloned().unwrap_or_default();
        Self {
            definition,
            client_id: get(definition.client_id_key),
            client_secret: get(definition.client_secret_key),
            extra: definition
                .extra
                .map(|e| vars.get(e.key).cloned().unwrap_or_else(|| e.default.to_string())),
        }
    }

    /// Both the client id and the client secret are non-empty.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> ProviderStatus {
        ProviderStatus {
            name: self.definition.name.to_string(),
            display_name: self.definition.display_name.to_string(),
            configured: self.is_configured(),
            extra_label: self.definition.extra.map(|e| e.label.to_string()),
        }
    }
}

/// Project every catalog entry against `vars`, in catalog order.
#[must_use]
pub fn project_all(vars: &EnvMap) -> Vec<ProviderView> {
    list_providers()
        .iter()
        .map(|p| ProviderView::project(p, vars))
        .collect()
}

/// Keys to merge into the configuration document before a redeploy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyRequest {
    pub edited_keys: EnvMap,
}

impl ApplyRequest {
    /// Overlay the edited keys onto `vars`. Existing keys keep their position.
    pub fn merge_into(&self, vars: &mut EnvMap) {
        for (key, value) in &self.edited_keys {
            vars.insert(key.clone(), value.clone());
        }
    }
}

/// Values submitted for one provider. `None` leaves the key untouched.
#[derive(Debug, Clone, Default)]
pub struct ProviderEdit {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub extra: Option<String>,
}

/// Resolve `name` against the catalog.
///
/// # Errors
///
/// Returns [`ProviderError::Unknown`] listing the valid names.
pub fn resolve(name: &str) -> Result<&'static ProviderDefinition, ProviderError> {
    find_provider(name).ok_or_else(|| ProviderError::Unknown {
        name: name.to_string(),
        available: list_providers()
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Build the request for editing one provider. Submitted values are
/// trimmed and must fit on one line.
///
/// # Errors
///
/// Fails when the provider is unknown, when `extra` is given for a provider
/// without an extra key, when a value spans lines, or when nothing was
/// submitted.
pub fn edit_request(name: &str, edit: &ProviderEdit) -> Result<ApplyRequest, ProviderError> {
    let provider = resolve(name)?;
    let mut edited = EnvMap::new();

    if let Some(id) = &edit.client_id {
        edited.insert(provider.client_id_key.to_string(), single_line(provider.client_id_key, id)?);
    }
    if let Some(secret) = &edit.client_secret {
        edited.insert(
            provider.client_secret_key.to_string(),
            single_line(provider.client_secret_key, secret)?,
        );
    }
    if let Some(extra) = &edit.extra {
        let Some(key) = provider.extra else {
            return Err(ProviderError::NoExtraKey {
                provider: provider.display_name.to_string(),
            });
        };
        edited.insert(key.key.to_string(), single_line(key.key, extra)?);
    }

    if edited.is_empty() {
        return Err(ProviderError::EmptyEdit {
            provider: provider.display_name.to_string(),
        });
    }
    Ok(ApplyRequest { edited_keys: edited })
}

/// Trim `value`; a line break left inside would split the env file line.
fn single_line(key: &str, value: &str) -> Result<String, ProviderError> {
    let value = value.trim();
    if value.contains(['\n', '\r']) {
        return Err(ProviderError::MultilineValue {
            key: key.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Build the request that clears one provider: empty id and secret, extra
/// reset to its catalog default.
///
/// # Errors
///
/// Returns [`ProviderError::Unknown`] for names outside the catalog.
pub fn clear_request(name: &str) -> Result<ApplyRequest, ProviderError> {
    let provider = resolve(name)?;
    let mut edited = EnvMap::new();
    edited.insert(provider.client_id_key.to_string(), String::new());
    edited.insert(provider.client_secret_key.to_string(), String::new());
    if let Some(extra) = provider.extra {
        edited.insert(extra.key.to_string(), extra.default.to_string());
    }
    Ok(ApplyRequest { edited_keys: edited })
}

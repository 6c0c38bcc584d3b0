pub mod env_schema;
pub mod providers;
pub mod types;

pub use env_schema::{JWT_SECRET, Quoting, STATIC_KEYS, StaticKey, is_schema_key, is_secret_key, schema_keys};
pub use providers::{ExtraKey, MASTODON_DEFAULT_URL, PROVIDERS, ProviderDefinition, find_provider, list_providers};
pub use types::*;

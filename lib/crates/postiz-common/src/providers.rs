//! Static catalog of third-party integrations.
//!
//! The order of [`PROVIDERS`] is part of the environment-file layout: the
//! writer emits provider keys in catalog order, so reordering entries is a
//! compatibility-sensitive change.

/// Optional third credential some providers need (bot token, signing secret,
/// instance URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraKey {
    /// Environment-file key holding the value.
    pub key: &'static str,
    /// Human-readable label shown next to the input.
    pub label: &'static str,
    /// Value written when the key is absent from the document.
    pub default: &'static str,
}

/// Immutable description of one integration and the keys it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDefinition {
    /// Stable identifier, also accepted on the command line (case-insensitive).
    pub name: &'static str,
    pub display_name: &'static str,
    pub client_id_key: &'static str,
    pub client_secret_key: &'static str,
    pub extra: Option<ExtraKey>,
}

impl ProviderDefinition {
    const fn pair(
        name: &'static str,
        display_name: &'static str,
        client_id_key: &'static str,
        client_secret_key: &'static str,
    ) -> Self {
        Self {
            name,
            display_name,
            client_id_key,
            client_secret_key,
            extra: None,
        }
    }

    const fn with_extra(mut self, key: &'static str, label: &'static str, default: &'static str) -> Self {
        self.extra = Some(ExtraKey { key, label, default });
        self
    }

    /// All environment-file keys owned by this provider, in write order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        [self.client_id_key, self.client_secret_key]
            .into_iter()
            .chain(self.extra.map(|e| e.key))
    }
}

/// Default Mastodon instance written when `MASTODON_URL` is absent.
pub const MASTODON_DEFAULT_URL: &str = "https://mastodon.social";

/// The catalog, in environment-file order.
pub const PROVIDERS: [ProviderDefinition; 13] = [
    ProviderDefinition::pair("X", "X (Twitter)", "X_API_KEY", "X_API_SECRET"),
    ProviderDefinition::pair("LinkedIn", "LinkedIn", "LINKEDIN_CLIENT_ID", "LINKEDIN_CLIENT_SECRET"),
    ProviderDefinition::pair("Reddit", "Reddit", "REDDIT_CLIENT_ID", "REDDIT_CLIENT_SECRET"),
    ProviderDefinition::pair("GitHub", "GitHub", "GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET"),
    ProviderDefinition::pair("Threads", "Threads", "THREADS_APP_ID", "THREADS_APP_SECRET"),
    ProviderDefinition::pair("Facebook", "Facebook", "FACEBOOK_APP_ID", "FACEBOOK_APP_SECRET"),
    ProviderDefinition::pair("YouTube", "YouTube", "YOUTUBE_CLIENT_ID", "YOUTUBE_CLIENT_SECRET"),
    ProviderDefinition::pair("TikTok", "TikTok", "TIKTOK_CLIENT_ID", "TIKTOK_CLIENT_SECRET"),
    ProviderDefinition::pair("Pinterest", "Pinterest", "PINTEREST_CLIENT_ID", "PINTEREST_CLIENT_SECRET"),
    ProviderDefinition::pair("Dribbble", "Dribbble", "DRIBBBLE_CLIENT_ID", "DRIBBBLE_CLIENT_SECRET"),
    ProviderDefinition::pair("Discord", "Discord", "DISCORD_CLIENT_ID", "DISCORD_CLIENT_SECRET")
        .with_extra("DISCORD_BOT_TOKEN_ID", "Bot Token", ""),
    ProviderDefinition::pair("Slack", "Slack", "SLACK_ID", "SLACK_SECRET")
        .with_extra("SLACK_SIGNING_SECRET", "Signing Secret", ""),
    ProviderDefinition::pair("Mastodon", "Mastodon", "MASTODON_CLIENT_ID", "MASTODON_CLIENT_SECRET")
        .with_extra("MASTODON_URL", "Mastodon URL", MASTODON_DEFAULT_URL),
];

/// Returns the catalog in its fixed order.
#[must_use]
pub fn list_providers() -> &'static [ProviderDefinition] {
    &PROVIDERS
}

/// Look up a provider by name, ignoring ASCII case.
#[must_use]
pub fn find_provider(name: &str) -> Option<&'static ProviderDefinition> {
    PROVIDERS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

//! Property-based tests for the env-file codec.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use postiz_cli::domain::env_file::{EnvMap, parse, render};
use postiz_common::schema_keys;
use proptest::prelude::*;

/// Values without surrounding blanks and without quote or comment characters.
fn value() -> impl Strategy<Value = String> {
    "([A-Za-z0-9_:/.@-]([A-Za-z0-9_:/.@ -]{0,38}[A-Za-z0-9_:/.@-])?)?"
}

/// A map over a random subset of schema keys.
fn schema_map() -> impl Strategy<Value = EnvMap> {
    let keys: Vec<String> = schema_keys().map(str::to_string).collect();
    proptest::collection::vec((proptest::sample::select(keys), value()), 0..20)
        .prop_map(|pairs| pairs.into_iter().collect::<EnvMap>())
}

proptest! {
    #[test]
    fn values_survive_render_then_parse(vars in schema_map()) {
        let back = parse(&render(&vars));
        for (key, value) in &vars {
            prop_assert_eq!(&back[key.as_str()], value);
        }
    }

    #[test]
    fn render_is_idempotent_once_secret_exists(vars in schema_map()) {
        let first = render(&vars);
        let second = render(&parse(&first));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parse_never_panics(content in "\\PC{0,200}") {
        let _ = parse(&content);
    }
}

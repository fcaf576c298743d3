use evl_config::EvlConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &EvlConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &EvlConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_single_underscore_key(&env_keys, "EVENTLINE_AUTH") {
        warnings.push(
            "auth.user_id is empty while EVENTLINE_AUTH* env vars exist. Use double underscores (example: EVENTLINE_AUTH__USER_ID)."
                .to_string(),
        );
    }

    if config.database.path == evl_config::DatabaseConfig::default().path
        && has_single_underscore_key(&env_keys, "EVENTLINE_DATABASE")
    {
        warnings.push(
            "database.path is the default while EVENTLINE_DATABASE* env vars exist. Use double underscores (example: EVENTLINE_DATABASE__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "EVENTLINE_AUDIT") {
        warnings.push(
            "EVENTLINE_AUDIT* env vars without a double underscore are ignored (example: EVENTLINE_AUDIT__MAX_LIMIT)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}

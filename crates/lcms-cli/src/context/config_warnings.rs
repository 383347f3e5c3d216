/// Env vars read directly by the binary rather than through figment.
const PASSTHROUGH_KEYS: &[&str] = &["LCMS_LOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_misspelled_env() {
    for warning in collect_misspelled_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_misspelled_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    env.into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("LCMS_"))
        .filter(|key| !PASSTHROUGH_KEYS.contains(&key.as_str()))
        .filter(|key| !key["LCMS_".len()..].contains("__"))
        .map(|key| {
            format!(
                "{key} is ignored. Use double underscores between section and field (example: LCMS_DATABASE__PATH)."
            )
        })
        .collect()
}

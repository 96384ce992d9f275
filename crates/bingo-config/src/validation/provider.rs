//! Provider section validation.

use crate::schema::BingoConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate provider endpoint and sampling constraints.
pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &BingoConfig) {
    let provider = &config.provider;

    let url = provider.base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "provider.base_url = {:?} must start with http:// or https://",
            provider.base_url
        ));
    }
    validate_non_empty(errors, "provider.model", &provider.model);
    validate_range(
        errors,
        "provider.max_tokens",
        provider.max_tokens,
        16,
        32768,
    );
    validate_range_f64(
        errors,
        "provider.temperature",
        provider.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "provider.timeout_secs",
        provider.timeout_secs,
        1,
        3600,
    );
}

//! URL normalization
//!
//! Resolves possibly-relative references against a base URL. The contract is
//! fail-soft: anything that cannot be resolved passes through unchanged.

use url::Url;

/// Resolve `reference` against `base` into an absolute URL string.
///
/// Absolute references are returned in canonical form. Relative references
/// are joined against `base`; if `base` is empty or invalid, or the join
/// fails, the reference is returned unchanged. Never errors.
pub fn resolve(reference: &str, base: &str) -> String {
    if reference.is_empty() {
        return reference.to_string();
    }

    if let Ok(absolute) = Url::parse(reference) {
        return absolute.to_string();
    }

    match Url::parse(base).and_then(|b| b.join(reference)) {
        Ok(joined) => joined.to_string(),
        Err(_) => reference.to_string(),
    }
}

/// Whether a reference is already absolute (has a scheme or is
/// protocol-relative)
pub fn is_absolute(reference: &str) -> bool {
    reference.starts_with("//") || Url::parse(reference).is_ok()
}

//! Name sanitizer.
//!
//! Caller-supplied service names and namespaces end up as metric identifiers,
//! so the facade passes them through the process-wide sanitizer first. The
//! default sanitizer is the identity transform.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Turns a caller-supplied name into a metric-safe one. Must be pure.
pub trait NameSanitizer: Send + Sync {
    fn sanitize(&self, raw: &str) -> String;
}

impl<F> NameSanitizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentitySanitizer;

impl NameSanitizer for IdentitySanitizer {
    fn sanitize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Replaces every occurrence of the configured characters with `_`.
#[derive(Debug, Clone, Default)]
pub struct CharReplacer {
    unsafe_chars: Vec<char>,
}

impl CharReplacer {
    pub fn new(unsafe_chars: impl IntoIterator<Item = char>) -> Self {
        let mut unsafe_chars: Vec<char> = unsafe_chars.into_iter().collect();
        unsafe_chars.sort_unstable();
        unsafe_chars.dedup();
        Self { unsafe_chars }
    }

    pub fn unsafe_chars(&self) -> &[char] {
        &self.unsafe_chars
    }

    pub fn is_identity(&self) -> bool {
        self.unsafe_chars.is_empty()
    }
}

impl NameSanitizer for CharReplacer {
    fn sanitize(&self, raw: &str) -> String {
        raw.chars()
            .map(|c| if self.unsafe_chars.contains(&c) { '_' } else { c })
            .collect()
    }
}

static ACTIVE: LazyLock<RwLock<Arc<dyn NameSanitizer>>> =
    LazyLock::new(|| RwLock::new(Arc::new(IdentitySanitizer)));

/// Install the process-wide sanitizer. `None` resets to the identity transform.
pub fn install_sanitizer(sanitizer: Option<Arc<dyn NameSanitizer>>) {
    let next: Arc<dyn NameSanitizer> = match sanitizer {
        Some(s) => s,
        None => Arc::new(IdentitySanitizer),
    };
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = next;
    tracing::debug!("name sanitizer installed");
}

/// The currently installed sanitizer.
pub fn current_sanitizer() -> Arc<dyn NameSanitizer> {
    Arc::clone(&ACTIVE.read().unwrap_or_else(PoisonError::into_inner))
}

/// Sanitize `raw` with the currently installed sanitizer.
pub fn sanitize(raw: &str) -> String {
    current_sanitizer().sanitize(raw)
}

//! Process-wide stylesheet for chart animations.
//!
//! Hosts that serve many charts in one document collect every chart's
//! keyframes here and emit them once, instead of repeating a `<style>`
//! element per chart.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

/// Global stylesheet singleton.
static STYLE_REGISTRY: OnceLock<StyleRegistry> = OnceLock::new();

/// Accumulated CSS for every chart rendered by this process.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    chunks: Mutex<Vec<String>>,
}

impl StyleRegistry {
    /// The global registry, created on first use.
    pub fn global() -> &'static StyleRegistry {
        STYLE_REGISTRY.get_or_init(|| {
            debug!("StyleRegistry: init");
            StyleRegistry::default()
        })
    }

    /// The global registry, if anything has been injected yet.
    pub fn try_global() -> Option<&'static StyleRegistry> {
        STYLE_REGISTRY.get()
    }

    /// Append `css` unless an identical chunk is already registered.
    ///
    /// Returns `true` when the sheet changed.
    pub fn inject(&self, css: &str) -> bool {
        let mut chunks = self.chunks.lock().unwrap_or_else(PoisonError::into_inner);
        if chunks.iter().any(|c| c == css) {
            return false;
        }
        chunks.push(css.to_string());
        true
    }

    /// Full stylesheet text, in injection order.
    pub fn contents(&self) -> String {
        let chunks = self.chunks.lock().unwrap_or_else(PoisonError::into_inner);
        chunks.join("\n")
    }

    pub fn len(&self) -> usize {
        self.chunks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every registered chunk (teardown).
    pub fn clear(&self) {
        let mut chunks = self.chunks.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(chunks = chunks.len(), "StyleRegistry: clear");
        chunks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inject_dedupes_identical_chunks() {
        let reg = StyleRegistry::default();
        assert!(reg.inject("#trend-1 { color: red; }"));
        assert!(!reg.inject("#trend-1 { color: red; }"));
        assert!(reg.inject("#trend-2 { color: blue; }"));
        assert_eq!(reg.len(), 2);
        assert_eq!(
            reg.contents(),
            "#trend-1 { color: red; }\n#trend-2 { color: blue; }"
        );
    }

    #[test]
    fn clear_empties_the_sheet() {
        let reg = StyleRegistry::default();
        reg.inject("a {}");
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.contents(), "");
    }

    #[test]
    fn global_is_a_single_instance() {
        let a = StyleRegistry::global() as *const StyleRegistry;
        let b = StyleRegistry::global() as *const StyleRegistry;
        assert_eq!(a, b);
        assert!(StyleRegistry::try_global().is_some());
    }
}

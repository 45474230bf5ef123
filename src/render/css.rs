//! Critical CSS collection.

/// Collects the CSS of every component that renders during a request.
///
/// Insertion order is preserved and duplicates are dropped, so a component
/// rendered many times contributes its style once, where it first appeared.
#[derive(Debug, Default)]
pub struct CssCollector {
    chunks: Vec<String>,
}

impl CssCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one component's CSS.
    pub fn insert(&mut self, css: &str) {
        if !self.chunks.iter().any(|chunk| chunk == css) {
            self.chunks.push(css.to_owned());
        }
    }

    /// Join everything collected into the inline `<style>` text.
    pub fn into_css(self) -> String {
        self.chunks.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut collector = CssCollector::new();
        collector.insert(".layout{margin:0}");
        collector.insert(".header{color:#333}");
        assert_eq!(collector.into_css(), ".layout{margin:0}.header{color:#333}");
    }

    #[test]
    fn test_deduplicates_repeated_components() {
        let mut collector = CssCollector::new();
        collector.insert(".card{padding:8px}");
        collector.insert(".card{padding:8px}");
        collector.insert(".card{padding:8px}");
        assert_eq!(collector.into_css(), ".card{padding:8px}");
    }
}

use crate::catalog::{PuzzleCatalog, WordEntry};

pub const FALLBACK_HINT: &str =
    "The stars are cloudy... try focusing on the team's main function.";

/// Optional, best-effort hint text for a word.
pub trait HintSource {
    fn lookup(&self, display_name: &str, clue: &str) -> Option<String>;
}

/// Serves the static hints shipped with the catalog.
pub struct CatalogHints<'a> {
    catalog: &'a PuzzleCatalog,
}

impl<'a> CatalogHints<'a> {
    pub fn new(catalog: &'a PuzzleCatalog) -> Self {
        Self { catalog }
    }
}

impl HintSource for CatalogHints<'_> {
    fn lookup(&self, display_name: &str, clue: &str) -> Option<String> {
        self.catalog
            .entries()
            .iter()
            .find(|e| e.display_name == display_name && e.clue == clue)
            .and_then(|e| e.hint.clone())
    }
}

/// Asks `source` when there is one, otherwise falls back to the stock line.
pub fn resolve_hint(source: Option<&dyn HintSource>, entry: &WordEntry) -> String {
    source
        .and_then(|s| s.lookup(&entry.display_name, &entry.clue))
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| FALLBACK_HINT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl HintSource for Silent {
        fn lookup(&self, _: &str, _: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_catalog_hint_is_used() {
        let catalog = PuzzleCatalog::builtin();
        let hints = CatalogHints::new(&catalog);
        let food = catalog.get("food").unwrap();
        assert_eq!(
            resolve_hint(Some(&hints), food),
            "They ensure the army marches on a full stomach."
        );
    }

    #[test]
    fn test_missing_source_falls_back() {
        let catalog = PuzzleCatalog::builtin();
        let food = catalog.get("food").unwrap();
        assert_eq!(resolve_hint(None, food), FALLBACK_HINT);
        assert_eq!(resolve_hint(Some(&Silent), food), FALLBACK_HINT);
    }
}

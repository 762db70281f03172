use crate::entities::*;

/// Read-only lookup into the translation catalog.
///
/// Consulted when mirror lists are recomputed during full-form create
/// and edit operations. Merge approvals never touch it.
pub trait TranslationGateway {
    /// Translation of a canonical term, `None` when uncatalogued.
    fn translate(&self, term: &str, lang: Language) -> Option<String>;
}

impl TranslationGateway for Box<dyn TranslationGateway + Send + Sync> {
    fn translate(&self, term: &str, lang: Language) -> Option<String> {
        self.as_ref().translate(term, lang)
    }
}

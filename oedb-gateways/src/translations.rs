use std::{collections::HashMap, fs, path::Path, str::FromStr};

use serde::Deserialize;

use oedb_core::{entities::Language, gateways::translate::TranslationGateway};

/// Translation catalog backed by a static TOML table.
///
/// Canonical terms are matched case insensitively after trimming.
/// Uncatalogued terms and catalogued terms without an entry for the
/// requested language are reported as untranslated.
///
/// ```toml
/// [terms.thai]
/// zh = "泰国菜"
/// pt = "tailandesa"
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticTranslations {
    terms: HashMap<String, CatalogEntry>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct CatalogEntry {
    zh: Option<String>,
    pt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Catalog {
    #[serde(default)]
    terms: HashMap<String, CatalogEntry>,
}

impl StaticTranslations {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        fs::read_to_string(path)?.parse()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

impl FromStr for StaticTranslations {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let catalog: Catalog = toml::from_str(s)?;
        let terms = catalog
            .terms
            .into_iter()
            .map(|(term, entry)| (term.trim().to_lowercase(), entry))
            .collect();
        Ok(Self { terms })
    }
}

impl TranslationGateway for StaticTranslations {
    fn translate(&self, term: &str, lang: Language) -> Option<String> {
        let entry = self.terms.get(&term.trim().to_lowercase())?;
        match lang {
            // The canonical spelling is the English form.
            Language::En => Some(term.trim().to_owned()),
            Language::Zh => entry.zh.clone(),
            Language::Pt => entry.pt.clone(),
        }
    }
}

/// Catalog stub used when no translations file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslations;

impl TranslationGateway for NoTranslations {
    fn translate(&self, _: &str, _: Language) -> Option<String> {
        None
    }
}

//! Language resolution of listing attributes.

use crate::{entities::*, gateways::translate::TranslationGateway};

/// Scalar listing attributes that carry language mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Description,
    Address,
}

pub fn resolve_text(listing: &Listing, field: TextField, lang: Language) -> &str {
    let text = match field {
        TextField::Name => &listing.name,
        TextField::Description => &listing.description,
        TextField::Address => &listing.address,
    };
    text.resolve(lang)
}

pub fn resolve_cuisines(listing: &Listing, lang: Language) -> &[String] {
    listing.cuisines.resolve(lang)
}

/// Recompute the mirror lists for a canonical cuisine list.
///
/// Terms missing from the catalog keep their canonical spelling so the
/// mirror lists stay index-aligned with the canonical list.
pub fn derive_cuisine_mirrors<G>(canonical: Vec<String>, translations: &G) -> LocalizedList
where
    G: TranslationGateway + ?Sized,
{
    let translate_all = |lang: Language| {
        canonical
            .iter()
            .map(|term| {
                translations
                    .translate(term, lang)
                    .unwrap_or_else(|| term.clone())
            })
            .collect()
    };
    let zh = translate_all(Language::Zh);
    let pt = translate_all(Language::Pt);
    LocalizedList { canonical, zh, pt }
}

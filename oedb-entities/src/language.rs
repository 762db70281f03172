use strum::{Display, EnumIter, EnumString};

/// Languages a directory record can be resolved into.
///
/// English is the canonical record language; Chinese and Portuguese
/// values exist only as mirrors of canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    En,
    Zh,
    Pt,
}

impl Default for Language {
    fn default() -> Language {
        Language::En
    }
}

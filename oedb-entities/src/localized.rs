use crate::language::Language;

/// Text attribute with a canonical value and optional language mirrors.
///
/// Resolution never fails: an absent or empty mirror falls back to the
/// canonical value, which itself may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub canonical: String,
    pub zh: Option<String>,
    pub pt: Option<String>,
}

impl LocalizedText {
    pub fn from_canonical(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            zh: None,
            pt: None,
        }
    }

    pub fn resolve(&self, lang: Language) -> &str {
        let mirror = match lang {
            Language::En => None,
            Language::Zh => self.zh.as_deref(),
            Language::Pt => self.pt.as_deref(),
        };
        mirror
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.canonical)
    }
}

/// List attribute with a canonical list and per-language mirror lists.
///
/// Unlike [`LocalizedText`] the fallback granularity is the whole list:
/// a mirror either replaces the canonical list entirely or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedList {
    pub canonical: Vec<String>,
    pub zh: Vec<String>,
    pub pt: Vec<String>,
}

impl LocalizedList {
    pub fn from_canonical(canonical: Vec<String>) -> Self {
        Self {
            canonical,
            zh: vec![],
            pt: vec![],
        }
    }

    pub fn resolve(&self, lang: Language) -> &[String] {
        match lang {
            Language::En => &self.canonical,
            Language::Zh if !self.zh.is_empty() => &self.zh,
            Language::Pt if !self.pt.is_empty() => &self.pt,
            _ => &self.canonical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_text_with_mirrors() {
        let text = LocalizedText {
            canonical: "Dog-friendly cafe".into(),
            zh: Some("狗友好咖啡馆".into()),
            pt: None,
        };
        assert_eq!("Dog-friendly cafe", text.resolve(Language::En));
        assert_eq!("狗友好咖啡馆", text.resolve(Language::Zh));
        assert_eq!("Dog-friendly cafe", text.resolve(Language::Pt));
    }

    #[test]
    fn resolve_text_treats_empty_mirror_as_absent() {
        let text = LocalizedText {
            canonical: "Main street 7".into(),
            zh: Some("".into()),
            pt: Some("Rua principal 7".into()),
        };
        assert_eq!("Main street 7", text.resolve(Language::Zh));
        assert_eq!("Rua principal 7", text.resolve(Language::Pt));
    }

    #[test]
    fn resolve_text_falls_back_to_canonical_zero_value() {
        let text = LocalizedText::default();
        assert_eq!("", text.resolve(Language::En));
        assert_eq!("", text.resolve(Language::Zh));
        assert_eq!("", text.resolve(Language::Pt));
    }

    #[test]
    fn resolve_list_with_and_without_mirrors() {
        let list = LocalizedList {
            canonical: vec!["Japanese".into(), "Thai".into()],
            zh: vec!["日本菜".into(), "泰国菜".into()],
            pt: vec![],
        };
        assert_eq!(list.canonical, list.resolve(Language::En));
        assert_eq!(list.zh, list.resolve(Language::Zh));
        assert_eq!(list.canonical, list.resolve(Language::Pt));
        assert!(LocalizedList::default().resolve(Language::Zh).is_empty());
    }
}

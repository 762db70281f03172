/// Ordered image gallery of a record.
///
/// The first URL is the cover image and doubles as the legacy singular
/// image URL that older clients still read. Appending preserves order
/// and does not deduplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery(Vec<String>);

impl Gallery {
    pub fn new(urls: Vec<String>) -> Self {
        let mut gallery = Self(Vec::with_capacity(urls.len()));
        gallery.append(urls);
        gallery
    }

    pub fn cover(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn urls(&self) -> &[String] {
        &self.0
    }

    pub fn append<I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.0
            .extend(urls.into_iter().filter(|url| !url.trim().is_empty()));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Gallery {
    fn from(from: Vec<String>) -> Self {
        Self::new(from)
    }
}

impl From<Gallery> for Vec<String> {
    fn from(from: Gallery) -> Self {
        from.0
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

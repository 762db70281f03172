use oedb_entities::url::{ParseError, Url};

/// Parse an optional URL parameter. Blank values count as absent.
pub fn parse_url_param(param: &str) -> Result<Option<Url>, ParseError> {
    let trimmed = param.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_params() {
        assert_eq!(None, parse_url_param("").unwrap());
        assert_eq!(None, parse_url_param("  ").unwrap());
        assert!(parse_url_param("https://openeatdb.org").unwrap().is_some());
        assert!(parse_url_param("not a url").is_err());
    }
}

use oedb_core::repositories::Error;

// Codec for the JSON array columns.

pub fn encode_string_list(items: &[String]) -> Result<String, Error> {
    serde_json::to_string(items).map_err(|err| Error::Other(err.into()))
}

pub fn decode_string_list(json: &str) -> Result<Vec<String>, Error> {
    serde_json::from_str(json).map_err(|err| Error::Other(err.into()))
}

use crate::error::ReadError;
use crate::source::FileReader;

/// Tokenize text by lowercasing it and splitting on runs of whitespace.
///
/// Punctuation stays attached to its word, so `"test."` and `"test"` are
/// different tokens. No token is ever empty.
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(&text.to_lowercase()).map(str::to_string).collect()
}

/// Lazy form of [`tokenize`] over text that is already lowercased.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Read one document through `reader` and tokenize it.
pub fn tokenize_document<R: FileReader + ?Sized>(reader: &R, path: &str) -> Result<Vec<String>, ReadError> {
    let text = reader.read_to_string(path)?;
    Ok(tokenize(&text))
}

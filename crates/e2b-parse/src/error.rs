use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// Input is not well-formed XML. Fatal to the whole parse call.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Structural problem quick-xml does not catch (unclosed or mismatched
    /// elements, no root element).
    #[error("malformed XML: {0}")]
    MalformedDocument(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;

//! Purpose: Decode JSON documents handed to the `jsonidx` CLI.
//! Exports: `from_str`, `from_reader`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Single parser boundary so callsites avoid ad hoc decode and error mapping.
//! Invariants: Decoding uses serde_json; accessors never parse, they only read decoded nodes.
//! Notes: Error kind mapping is done by callsites so domain context stays explicit.

use std::io::Read;

use serde::de::DeserializeOwned;

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Eof => "eof",
            Self::Data => "data",
            Self::Io => "io",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    use serde_json::error::Category;
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; line {}, column {}; context: {context}",
        categorize_error(err).label(),
        err.line(),
        err.column()
    )
}

//! Document model and readers.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::NonZeroUsize;
use std::path::Path;

use morphi_lexer::{LexerConfig, TokenType};
use serde::Deserialize;
use tracing::debug;

use crate::ConfigFileError;

/// A configuration document as written on disk.
///
/// Unknown top-level keys are rejected so that a misspelled section is not
/// silently ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YamlLexerConfig {
    /// Tag -> delimiter character.
    pub delimiters: BTreeMap<String, String>,
    /// Token type -> literal.
    pub predefined: BTreeMap<String, String>,
    /// Token type -> regular expression.
    pub regexp: BTreeMap<String, String>,
    pub bulk_limit: Option<usize>,
}

impl YamlLexerConfig {
    /// Parse a document without validating its rules.
    pub fn parse(text: &str) -> Result<Self, ConfigFileError> {
        // An empty document is an empty configuration.
        let document: Option<Self> = serde_yaml::from_str(text)?;
        Ok(document.unwrap_or_default())
    }

    /// Validate the document and build the lexer configuration.
    pub fn into_config(self) -> Result<LexerConfig, ConfigFileError> {
        let mut delimiters = Vec::with_capacity(self.delimiters.len());
        for (tag, value) in self.delimiters {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => delimiters.push(c),
                _ => return Err(ConfigFileError::MalformedDelimiter { tag, value }),
            }
        }

        let mut builder = LexerConfig::builder().delimiter_chars(delimiters);
        for (tag, literal) in self.predefined {
            builder = builder.fixed(literal, TokenType::from(tag));
        }
        for (tag, raw) in self.regexp {
            builder = builder.regex(raw, TokenType::from(tag));
        }
        if let Some(limit) = self.bulk_limit {
            let limit = NonZeroUsize::new(limit).ok_or(ConfigFileError::InvalidBulkLimit)?;
            builder = builder.bulk_limit(limit);
        }
        Ok(builder.build()?)
    }
}

/// Read a configuration document from a string.
pub fn read_config_str(text: &str) -> Result<LexerConfig, ConfigFileError> {
    YamlLexerConfig::parse(text)?.into_config()
}

/// Read a configuration document from any reader.
///
/// Read failures are reported as [`ConfigFileError::Parse`], since the
/// reader has no path to attach.
pub fn read_config(reader: impl Read) -> Result<LexerConfig, ConfigFileError> {
    let document: Option<YamlLexerConfig> = serde_yaml::from_reader(reader)?;
    document.unwrap_or_default().into_config()
}

/// Read a configuration document from a file.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<LexerConfig, ConfigFileError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading lexer configuration");

    let io_error = |source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut text = String::new();
    BufReader::new(File::open(path).map_err(io_error)?)
        .read_to_string(&mut text)
        .map_err(io_error)?;
    read_config_str(&text)
}

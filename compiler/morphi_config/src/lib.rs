//! YAML lexer configuration files.
//!
//! A configuration document has three optional sections, each mapping a
//! tag to a value, plus an optional bulk limit:
//!
//! ```yaml
//! delimiters: { space: " ", tab: "\t" }   # tag -> single character
//! predefined: { PLUS: "+", EQ: "=" }      # token type -> literal
//! regexp:     { NUM: "[0-9]+" }           # token type -> pattern
//! bulk_limit: 4096
//! ```
//!
//! Delimiter tags only name the entry; predefined and regexp tags become
//! the [`TokenType`](morphi_lexer::TokenType) of the tokens they produce.
//! Sections are read in tag order, which fixes the pattern order.
//!
//! ```
//! let config = morphi_config::read_config_str("regexp: { NUM: '[0-9]+' }")?;
//! assert_eq!(config.patterns().len(), 1);
//! # Ok::<(), morphi_config::ConfigFileError>(())
//! ```

mod error;
mod yaml;

pub use error::ConfigFileError;
pub use yaml::{read_config, read_config_file, read_config_str, YamlLexerConfig};

//! Markdown syntax dialects.
//!
//! Markdown spells most constructs more than one way. A [`Dialect`] picks
//! one spelling per construct and resolves rendering intents (bold, rule,
//! fence, ...) into concrete [`Delimiter`]s.

use crate::error::{Error, Result};
use crate::model::Emphasis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a string in codepoints.
pub(crate) fn width(s: &str) -> usize {
    s.chars().count()
}

/// A resolved piece of Markdown syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    /// The literal text to emit
    pub text: &'static str,
    /// Width of `text` in codepoints
    pub width: usize,
}

impl Delimiter {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            width: width(text),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Generate `FromStr`/`Display` for a unit enum from its lowercase names.
macro_rules! syntax_names {
    ($ty:ident, $what:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Get the lowercase name of this choice.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(Error::Construction(format!(
                        "unknown {} syntax: '{}'",
                        $what, other
                    ))),
                }
            }
        }
    };
}

/// Spelling of emphasis markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisSyntax {
    /// `**bold**`, `*italic*`
    #[default]
    Asterisks,
    /// `__bold__`, `_italic_`
    Underscores,
}

syntax_names!(EmphasisSyntax, "emphasis", {
    Asterisks => "asterisks",
    Underscores => "underscores",
});

/// Spelling of headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderSyntax {
    /// `## Title`
    #[default]
    Atx,
    /// `Title` underlined with `=` or `-`
    Setext,
}

syntax_names!(HeaderSyntax, "header", {
    Atx => "atx",
    Setext => "setext",
});

/// Spelling of horizontal rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSyntax {
    /// `***`
    #[default]
    Asterisks,
    /// `___`
    Underscores,
    /// `---`
    Dashes,
}

syntax_names!(RuleSyntax, "rule", {
    Asterisks => "asterisks",
    Underscores => "underscores",
    Dashes => "dashes",
});

/// Spelling of code fences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeblockSyntax {
    /// Three backticks
    #[default]
    Backticks,
    /// `~~~`
    Tildes,
}

syntax_names!(CodeblockSyntax, "codeblock", {
    Backticks => "backticks",
    Tildes => "tildes",
});

/// Spelling of unordered list bullets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSyntax {
    /// `* item`
    #[default]
    Asterisk,
    /// `- item`
    Dash,
    /// `+ item`
    Plus,
}

syntax_names!(ListSyntax, "list", {
    Asterisk => "asterisk",
    Dash => "dash",
    Plus => "plus",
});

/// One spelling choice per Markdown construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Emphasis markers
    pub emphasis: EmphasisSyntax,
    /// Header style
    pub header: HeaderSyntax,
    /// Horizontal rule
    pub rule: RuleSyntax,
    /// Code fence
    pub codeblock: CodeblockSyntax,
    /// Unordered list bullet
    pub list: ListSyntax,
}

impl Dialect {
    /// Create the default dialect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dialect from its JSON form; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strong emphasis marker.
    pub fn bold(&self) -> Delimiter {
        match self.emphasis {
            EmphasisSyntax::Asterisks => Delimiter::new("**"),
            EmphasisSyntax::Underscores => Delimiter::new("__"),
        }
    }

    /// Emphasis marker.
    pub fn italic(&self) -> Delimiter {
        match self.emphasis {
            EmphasisSyntax::Asterisks => Delimiter::new("*"),
            EmphasisSyntax::Underscores => Delimiter::new("_"),
        }
    }

    /// Combined strong emphasis and emphasis marker.
    pub fn bold_italic(&self) -> Delimiter {
        match self.emphasis {
            EmphasisSyntax::Asterisks => Delimiter::new("***"),
            EmphasisSyntax::Underscores => Delimiter::new("___"),
        }
    }

    /// Marker for the given emphasis, or `None` for plain text.
    pub fn emphasis(&self, emphasis: Emphasis) -> Option<Delimiter> {
        match emphasis {
            Emphasis::Normal => None,
            Emphasis::Bold => Some(self.bold()),
            Emphasis::Italic => Some(self.italic()),
            Emphasis::BoldItalic => Some(self.bold_italic()),
        }
    }

    /// Horizontal rule line.
    pub fn rule(&self) -> Delimiter {
        match self.rule {
            RuleSyntax::Asterisks => Delimiter::new("***"),
            RuleSyntax::Underscores => Delimiter::new("___"),
            RuleSyntax::Dashes => Delimiter::new("---"),
        }
    }

    /// Code fence.
    pub fn fence(&self) -> Delimiter {
        match self.codeblock {
            CodeblockSyntax::Backticks => Delimiter::new("```"),
            CodeblockSyntax::Tildes => Delimiter::new("~~~"),
        }
    }

    /// Unordered list bullet, without the following space.
    pub fn bullet(&self) -> Delimiter {
        match self.list {
            ListSyntax::Asterisk => Delimiter::new("*"),
            ListSyntax::Dash => Delimiter::new("-"),
            ListSyntax::Plus => Delimiter::new("+"),
        }
    }

    /// Setext underline character for a header level.
    pub fn setext_underline(&self, level: u8) -> Delimiter {
        if level == 1 {
            Delimiter::new("=")
        } else {
            Delimiter::new("-")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dialect() {
        let dialect = Dialect::default();
        assert_eq!(dialect.header, HeaderSyntax::Atx);
        assert_eq!(dialect.bold().text, "**");
        assert_eq!(dialect.rule().text, "***");
        assert_eq!(dialect.fence().text, "```");
        assert_eq!(dialect.bullet().text, "*");
    }

    #[test]
    fn test_underscore_emphasis() {
        let dialect = Dialect {
            emphasis: EmphasisSyntax::Underscores,
            ..Dialect::default()
        };
        assert_eq!(dialect.bold().text, "__");
        assert_eq!(dialect.italic().text, "_");
        assert_eq!(dialect.bold_italic().text, "___");
        assert_eq!(dialect.emphasis(Emphasis::Normal), None);
    }

    #[test]
    fn test_delimiter_width() {
        let dialect = Dialect::default();
        assert_eq!(dialect.bold_italic().width, 3);
        assert_eq!(dialect.setext_underline(1).text, "=");
        assert_eq!(dialect.setext_underline(4).text, "-");
    }

    #[test]
    fn test_syntax_names() {
        assert_eq!("Tildes".parse::<CodeblockSyntax>().unwrap(), CodeblockSyntax::Tildes);
        assert_eq!(RuleSyntax::Dashes.to_string(), "dashes");
        assert!("stars".parse::<ListSyntax>().is_err());
    }

    #[test]
    fn test_dialect_from_json_partial() {
        let dialect = Dialect::from_json(r#"{"header":"setext","list":"plus"}"#).unwrap();
        assert_eq!(dialect.header, HeaderSyntax::Setext);
        assert_eq!(dialect.list, ListSyntax::Plus);
        assert_eq!(dialect.emphasis, EmphasisSyntax::Asterisks);

        assert!(Dialect::from_json(r#"{"rule":"dots"}"#).is_err());
    }
}

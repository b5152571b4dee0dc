//! Block descriptors: one page-content block specification per record.
//!
//! List-like kinds hold multiple items in one descriptor, newline
//! delimited; the encoder expands them in place.

use serde::{Deserialize, Serialize};

/// One content block to append to a page.
///
/// Empty content makes the descriptor ineligible for output regardless
/// of kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BlockDescriptor {
    /// A paragraph of text.
    Paragraph {
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "heading-1")]
    Heading1 {
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "heading-2")]
    Heading2 {
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "heading-3")]
    Heading3 {
        #[serde(default)]
        content: String,
    },

    /// A bulleted list; one item per line of content.
    BulletedList {
        #[serde(default)]
        content: String,
    },

    /// A numbered list; one item per line of content.
    NumberedList {
        #[serde(default)]
        content: String,
    },

    /// A to-do list; one item per line of content.
    /// `checked` applies to every item in the descriptor.
    Todo {
        #[serde(default)]
        content: String,

        #[serde(default)]
        checked: bool,
    },

    /// A toggle, with an optional nested paragraph as its body.
    Toggle {
        #[serde(default)]
        content: String,

        body: Option<String>,
    },

    /// A code block. `language` falls back to the configured default.
    Code {
        #[serde(default)]
        content: String,

        language: Option<String>,
    },
}

impl BlockDescriptor {
    /// The descriptor's text content.
    pub fn content(&self) -> &str {
        match self {
            Self::Paragraph { content }
            | Self::Heading1 { content }
            | Self::Heading2 { content }
            | Self::Heading3 { content }
            | Self::BulletedList { content }
            | Self::NumberedList { content }
            | Self::Todo { content, .. }
            | Self::Toggle { content, .. }
            | Self::Code { content, .. } => content,
        }
    }
}

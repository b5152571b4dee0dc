//! Property descriptors: one database property definition per record.
//!
//! The manifest spells these as `[[property]]` tables with a `kind` tag,
//! deserialized into a closed sum type so an unhandled kind is a parse
//! error rather than a silently dropped entry.

use jiff::civil;
use serde::{Deserialize, Serialize};

/// One database property: a display name plus a kind-specific value.
///
/// An empty name makes the descriptor ineligible for output regardless
/// of kind. Names collide by map-key semantics: last write wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDescriptor {
    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub value: PropertyValue,
}

/// The value side of a property, tagged by kind.
///
/// Scalar text defaults to empty so a half-filled manifest table parses
/// and is simply skipped at encode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PropertyValue {
    /// The page title.
    Title {
        #[serde(default)]
        content: String,
    },

    /// Plain rich-text content.
    RichText {
        #[serde(default)]
        content: String,
    },

    /// A numeric value. Absent means "no value", which is distinct
    /// from zero: zero is emitted, absence is not.
    Number { value: Option<f64> },

    /// A single select option, by name.
    Select {
        #[serde(default)]
        option: String,
    },

    /// Multiple select options as one comma-separated string,
    /// split and trimmed at encode time.
    MultiSelect {
        #[serde(default)]
        options: String,
    },

    /// A date or date range, optionally with times.
    Date(DateValue),

    /// A checkbox. Always emitted, unchecked by default.
    Checkbox {
        #[serde(default)]
        checked: bool,
    },

    /// A URL.
    Url {
        #[serde(default)]
        value: String,
    },

    /// An email address.
    Email {
        #[serde(default)]
        value: String,
    },

    /// A phone number.
    PhoneNumber {
        #[serde(default)]
        value: String,
    },
}

/// A composite date value.
///
/// Times are only meaningful when `include_time` is set, and the end
/// date only when `include_end_date` is set — a time or end date left
/// in the manifest with its flag off is ignored, mirroring a form
/// whose extra inputs are hidden until their checkbox is ticked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DateValue {
    pub start_date: Option<civil::Date>,

    #[serde(default)]
    pub include_time: bool,

    pub start_time: Option<civil::Time>,

    #[serde(default)]
    pub include_end_date: bool,

    pub end_date: Option<civil::Date>,

    pub end_time: Option<civil::Time>,
}

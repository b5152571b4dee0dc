//! Encoding logic: descriptors in, Notion API JSON fragments out.
//!
//! Each mode has its own submodule. Both encoders are pure and total:
//! they never fail, never touch the outside world, and produce the full
//! output from scratch on every call. Ineligible descriptors (empty
//! name, empty content, missing value) are suppressed, not reported.

mod block;
mod property;

pub use block::encode_blocks;
pub use property::encode_properties;

use serde_json::{Value, json};

/// A single rich-text run carrying the given content.
fn text_run(content: &str) -> Value {
    json!({
        "type": "text",
        "text": { "content": content },
    })
}

/// A rich-text run with the fixed default annotation set spelled out.
fn annotated_text_run(content: &str) -> Value {
    json!({
        "type": "text",
        "text": { "content": content },
        "annotations": {
            "bold": false,
            "underline": false,
            "code": false,
            "color": "default",
        },
    })
}

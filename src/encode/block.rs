//! Block encoding: block descriptors to an ordered Notion block array.

use serde_json::{Map, Value, json};

use crate::model::BlockDescriptor;

use super::{annotated_text_run, text_run};

/// Encode an ordered list of block descriptors into a block array.
///
/// Descriptor order is preserved; list-like descriptors expand in place,
/// one block per line of content. Descriptors with empty content
/// contribute nothing.
pub fn encode_blocks(descriptors: &[BlockDescriptor], default_language: &str) -> Vec<Value> {
    let mut blocks = Vec::new();
    for descriptor in descriptors {
        if descriptor.content().is_empty() {
            continue;
        }
        encode_block(descriptor, default_language, &mut blocks);
    }
    blocks
}

/// Encode one descriptor, appending its block(s) to the output.
fn encode_block(descriptor: &BlockDescriptor, default_language: &str, blocks: &mut Vec<Value>) {
    match descriptor {
        BlockDescriptor::Paragraph { content } => {
            blocks.push(block(
                "paragraph",
                json!({ "rich_text": [annotated_text_run(content)] }),
            ));
        }
        BlockDescriptor::Heading1 { content } => blocks.push(heading(1, content)),
        BlockDescriptor::Heading2 { content } => blocks.push(heading(2, content)),
        BlockDescriptor::Heading3 { content } => blocks.push(heading(3, content)),
        BlockDescriptor::BulletedList { content } => {
            for item in content.split('\n') {
                blocks.push(block(
                    "bulleted_list_item",
                    json!({ "rich_text": [text_run(item)] }),
                ));
            }
        }
        BlockDescriptor::NumberedList { content } => {
            for item in content.split('\n') {
                blocks.push(block(
                    "numbered_list_item",
                    json!({ "rich_text": [text_run(item)] }),
                ));
            }
        }
        BlockDescriptor::Todo { content, checked } => {
            for item in content.split('\n') {
                blocks.push(block(
                    "to_do",
                    json!({ "rich_text": [text_run(item)], "checked": checked }),
                ));
            }
        }
        BlockDescriptor::Toggle { content, body } => {
            let mut payload = Map::new();
            payload.insert("rich_text".to_string(), json!([text_run(content)]));
            if let Some(body) = body {
                payload.insert(
                    "children".to_string(),
                    json!([block("paragraph", json!({ "rich_text": [text_run(body)] }))]),
                );
            }
            blocks.push(block("toggle", Value::Object(payload)));
        }
        BlockDescriptor::Code { content, language } => {
            blocks.push(block(
                "code",
                json!({
                    "caption": [],
                    "rich_text": [text_run(content)],
                    "language": language.as_deref().unwrap_or(default_language),
                }),
            ));
        }
    }
}

/// A heading block. The level selects the `heading_{n}` discriminator.
fn heading(level: u8, content: &str) -> Value {
    let heading_type = format!("heading_{level}");
    block(
        &heading_type,
        json!({ "rich_text": [annotated_text_run(content)] }),
    )
}

/// A block object: `object` and `type` markers plus the type-keyed payload.
fn block(block_type: &str, payload: Value) -> Value {
    let mut object = Map::new();
    object.insert("object".to_string(), json!("block"));
    object.insert("type".to_string(), json!(block_type));
    object.insert(block_type.to_string(), payload);
    Value::Object(object)
}

//! Property encoding: field descriptors to a Notion `properties` object.

use jiff::civil;
use serde_json::{Map, Value, json};

use crate::model::{DateValue, FieldDescriptor, PropertyValue};

/// Encode an ordered list of field descriptors into a `properties` object.
///
/// Keys are property names; a repeated name overwrites the earlier entry
/// (map-key semantics). Descriptors with an empty name, or whose value
/// fails its kind's emission rule, contribute nothing.
pub fn encode_properties(fields: &[FieldDescriptor]) -> Map<String, Value> {
    let mut properties = Map::new();
    for field in fields {
        if field.name.is_empty() {
            continue;
        }
        if let Some(value) = encode_value(&field.value) {
            properties.insert(field.name.clone(), value);
        }
    }
    properties
}

/// Encode one property value, or `None` if it fails its emission rule.
fn encode_value(value: &PropertyValue) -> Option<Value> {
    match value {
        PropertyValue::Title { content } => non_empty(content).map(|text| {
            json!({ "title": [{ "text": { "content": text } }] })
        }),
        PropertyValue::RichText { content } => non_empty(content).map(|text| {
            json!({ "rich_text": [{ "text": { "content": text } }] })
        }),
        // Zero is a value; only absence suppresses the property.
        PropertyValue::Number { value } => value.map(|n| json!({ "number": n })),
        PropertyValue::Select { option } => non_empty(option).map(|name| {
            json!({ "select": { "name": name } })
        }),
        PropertyValue::MultiSelect { options } => non_empty(options).map(|options| {
            let names: Vec<Value> = options
                .split(',')
                .map(|opt| json!({ "name": opt.trim() }))
                .collect();
            json!({ "multi_select": names })
        }),
        PropertyValue::Date(date) => encode_date(date),
        PropertyValue::Checkbox { checked } => Some(json!({ "checkbox": checked })),
        PropertyValue::Url { value } => non_empty(value).map(|url| json!({ "url": url })),
        PropertyValue::Email { value } => non_empty(value).map(|email| json!({ "email": email })),
        PropertyValue::PhoneNumber { value } => {
            non_empty(value).map(|phone| json!({ "phone_number": phone }))
        }
    }
}

/// Encode a date value. No start date, no property.
///
/// The end timestamp appears only when `include_end_date` is set and an
/// end date is present; both ends share the `include_time` rule.
fn encode_date(date: &DateValue) -> Option<Value> {
    let start = date.start_date?;

    let mut value = Map::new();
    value.insert(
        "start".to_string(),
        Value::String(timestamp(start, date.include_time, date.start_time)),
    );
    if date.include_end_date {
        if let Some(end) = date.end_date {
            value.insert(
                "end".to_string(),
                Value::String(timestamp(end, date.include_time, date.end_time)),
            );
        }
    }

    Some(json!({ "date": value }))
}

/// A bare ISO-8601 date, or a combined date-time when `include_time` is
/// set and a time is present.
fn timestamp(date: civil::Date, include_time: bool, time: Option<civil::Time>) -> String {
    match time.filter(|_| include_time) {
        Some(time) => date.to_datetime(time).to_string(),
        None => date.to_string(),
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: PropertyValue) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn title_wraps_content_in_a_text_run() {
        let properties = encode_properties(&[field(
            "Name",
            PropertyValue::Title {
                content: "My page".to_string(),
            },
        )]);

        assert_eq!(
            properties["Name"],
            json!({ "title": [{ "text": { "content": "My page" } }] })
        );
    }

    #[test]
    fn rich_text_wraps_content_in_a_text_run() {
        let properties = encode_properties(&[field(
            "Notes",
            PropertyValue::RichText {
                content: "some notes".to_string(),
            },
        )]);

        assert_eq!(
            properties["Notes"],
            json!({ "rich_text": [{ "text": { "content": "some notes" } }] })
        );
    }

    #[test]
    fn number_zero_is_emitted() {
        let properties =
            encode_properties(&[field("Count", PropertyValue::Number { value: Some(0.0) })]);

        assert_eq!(properties["Count"], json!({ "number": 0.0 }));
    }

    #[test]
    fn number_absent_is_skipped() {
        let properties =
            encode_properties(&[field("Count", PropertyValue::Number { value: None })]);

        assert!(properties.is_empty());
    }

    #[test]
    fn select_emits_option_name() {
        let properties = encode_properties(&[field(
            "Status",
            PropertyValue::Select {
                option: "Done".to_string(),
            },
        )]);

        assert_eq!(properties["Status"], json!({ "select": { "name": "Done" } }));
    }

    #[test]
    fn multi_select_splits_and_trims() {
        let properties = encode_properties(&[field(
            "Tags",
            PropertyValue::MultiSelect {
                options: "a, b ,c".to_string(),
            },
        )]);

        assert_eq!(
            properties["Tags"],
            json!({ "multi_select": [{ "name": "a" }, { "name": "b" }, { "name": "c" }] })
        );
    }

    #[test]
    fn checkbox_is_always_emitted() {
        let properties =
            encode_properties(&[field("Done", PropertyValue::Checkbox { checked: false })]);

        assert_eq!(properties["Done"], json!({ "checkbox": false }));
    }

    #[test]
    fn url_email_phone_emit_plain_strings() {
        let properties = encode_properties(&[
            field(
                "Link",
                PropertyValue::Url {
                    value: "https://example.com".to_string(),
                },
            ),
            field(
                "Mail",
                PropertyValue::Email {
                    value: "a@example.com".to_string(),
                },
            ),
            field(
                "Phone",
                PropertyValue::PhoneNumber {
                    value: "555-0100".to_string(),
                },
            ),
        ]);

        assert_eq!(properties["Link"], json!({ "url": "https://example.com" }));
        assert_eq!(properties["Mail"], json!({ "email": "a@example.com" }));
        assert_eq!(properties["Phone"], json!({ "phone_number": "555-0100" }));
    }

    #[test]
    fn date_without_time_emits_bare_date() {
        let properties = encode_properties(&[field(
            "Due",
            PropertyValue::Date(DateValue {
                start_date: Some(civil::date(2024, 1, 1)),
                ..DateValue::default()
            }),
        )]);

        assert_eq!(properties["Due"], json!({ "date": { "start": "2024-01-01" } }));
    }

    #[test]
    fn date_with_time_combines_into_one_timestamp() {
        let properties = encode_properties(&[field(
            "Due",
            PropertyValue::Date(DateValue {
                start_date: Some(civil::date(2024, 1, 1)),
                include_time: true,
                start_time: Some(civil::time(14, 30, 0, 0)),
                ..DateValue::default()
            }),
        )]);

        assert_eq!(
            properties["Due"],
            json!({ "date": { "start": "2024-01-01T14:30:00" } })
        );
    }

    #[test]
    fn date_time_ignored_when_include_time_is_off() {
        let properties = encode_properties(&[field(
            "Due",
            PropertyValue::Date(DateValue {
                start_date: Some(civil::date(2024, 1, 1)),
                include_time: false,
                start_time: Some(civil::time(14, 30, 0, 0)),
                ..DateValue::default()
            }),
        )]);

        assert_eq!(properties["Due"], json!({ "date": { "start": "2024-01-01" } }));
    }

    #[test]
    fn date_range_emits_end_when_included() {
        let properties = encode_properties(&[field(
            "Sprint",
            PropertyValue::Date(DateValue {
                start_date: Some(civil::date(2024, 1, 1)),
                include_end_date: true,
                end_date: Some(civil::date(2024, 1, 15)),
                ..DateValue::default()
            }),
        )]);

        assert_eq!(
            properties["Sprint"],
            json!({ "date": { "start": "2024-01-01", "end": "2024-01-15" } })
        );
    }

    #[test]
    fn date_end_ignored_when_include_end_is_off() {
        let properties = encode_properties(&[field(
            "Sprint",
            PropertyValue::Date(DateValue {
                start_date: Some(civil::date(2024, 1, 1)),
                include_end_date: false,
                end_date: Some(civil::date(2024, 1, 15)),
                ..DateValue::default()
            }),
        )]);

        assert_eq!(
            properties["Sprint"],
            json!({ "date": { "start": "2024-01-01" } })
        );
    }

    #[test]
    fn date_without_start_is_skipped() {
        let properties = encode_properties(&[field(
            "Due",
            PropertyValue::Date(DateValue::default()),
        )]);

        assert!(properties.is_empty());
    }

    #[test]
    fn empty_name_is_skipped_regardless_of_kind() {
        let properties = encode_properties(&[field(
            "",
            PropertyValue::Checkbox { checked: true },
        )]);

        assert!(properties.is_empty());
    }

    #[test]
    fn empty_content_is_skipped() {
        let properties = encode_properties(&[field(
            "Name",
            PropertyValue::Title {
                content: String::new(),
            },
        )]);

        assert!(properties.is_empty());
    }

    #[test]
    fn repeated_name_last_write_wins() {
        let properties = encode_properties(&[
            field(
                "Status",
                PropertyValue::Select {
                    option: "Open".to_string(),
                },
            ),
            field(
                "Status",
                PropertyValue::Select {
                    option: "Closed".to_string(),
                },
            ),
        ]);

        assert_eq!(properties.len(), 1);
        assert_eq!(
            properties["Status"],
            json!({ "select": { "name": "Closed" } })
        );
    }

    #[test]
    fn output_preserves_descriptor_order() {
        let properties = encode_properties(&[
            field("Zebra", PropertyValue::Checkbox { checked: false }),
            field("Apple", PropertyValue::Checkbox { checked: true }),
        ]);

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Zebra", "Apple"]);
    }

    #[test]
    fn encoding_is_idempotent() {
        let fields = vec![
            field(
                "Name",
                PropertyValue::Title {
                    content: "My page".to_string(),
                },
            ),
            field("Count", PropertyValue::Number { value: Some(3.0) }),
        ];

        assert_eq!(encode_properties(&fields), encode_properties(&fields));
    }
}

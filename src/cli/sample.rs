//! Starter manifests for `quill sample`.

use super::SampleMode;

/// The starter manifest for the given mode.
pub(super) fn manifest(mode: &SampleMode) -> &'static str {
    match mode {
        SampleMode::Properties => PROPERTIES,
        SampleMode::Blocks => BLOCKS,
    }
}

const PROPERTIES: &str = r#"# One [[property]] table per database property.
# Kinds: title, rich-text, number, select, multi-select, date, checkbox,
# url, email, phone-number.

[[property]]
kind = "title"
name = "Name"
content = "My page"

[[property]]
kind = "select"
name = "Status"
option = "In progress"

[[property]]
kind = "multi-select"
name = "Tags"
options = "api, automation"

[[property]]
kind = "number"
name = "Priority"
value = 2

[[property]]
kind = "date"
name = "Due"
start-date = "2024-01-01"
include-time = true
start-time = "14:30"

[[property]]
kind = "checkbox"
name = "Archived"
checked = false
"#;

const BLOCKS: &str = r#"# One [[block]] table per content block, in page order.
# Kinds: paragraph, heading-1, heading-2, heading-3, bulleted-list,
# numbered-list, todo, toggle, code.
# List kinds emit one block per line of content.

[[block]]
kind = "heading-1"
content = "Project notes"

[[block]]
kind = "paragraph"
content = "Everything in one place."

[[block]]
kind = "bulleted-list"
content = """
first point
second point"""

[[block]]
kind = "todo"
content = """
write the draft
review it"""

[[block]]
kind = "toggle"
content = "Details"
body = "Hidden until expanded."

[[block]]
kind = "code"
content = "print('hello')"
language = "python"
"#;

//! XML rendering of channel documents for streaming devices that cannot
//! consume JSON.
//!
//! The mapping is structural: objects become `<object>` with one child
//! element per key, arrays become a run of `<array_elem>` elements, scalars
//! become text. Keys that are not valid XML names are rewritten: every
//! offending character becomes `_`, and a key that cannot start a name gets a
//! leading `_`.

use serde_json::Value;

use crate::model::ChannelTree;
use crate::wire;

pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, &mut out);
    out
}

pub fn render_tree(tree: &ChannelTree) -> String {
    render(&wire::to_wire_document(tree))
}

fn render_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => escape_into(s, out),
        Value::Array(items) => {
            for item in items {
                out.push_str("<array_elem>");
                render_into(item, out);
                out.push_str("</array_elem>");
            }
        }
        Value::Object(map) => {
            out.push_str("<object>");
            for (key, item) in map {
                let tag = tag_name(key);
                out.push('<');
                out.push_str(&tag);
                out.push('>');
                render_into(item, out);
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
            out.push_str("</object>");
        }
    }
}

fn tag_name(key: &str) -> String {
    let mut tag = String::with_capacity(key.len() + 1);
    match key.chars().next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => tag.push('_'),
    }
    for c in key.chars() {
        if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
            tag.push(c);
        } else {
            tag.push('_');
        }
    }
    tag
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "tests/xml_tests.rs"]
mod tests;

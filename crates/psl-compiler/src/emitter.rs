//! Static initializer emitter
//!
//! Writes the three rule sets as brace-delimited blocks of quoted strings,
//! meant to be pasted into an aggregate initializer downstream. Consumers
//! include the text verbatim, so the layout below is fixed: a leading blank
//! line, one marker comment, items joined by `" ,"`, and a 9-space indent on
//! the first body line against 8 on the others.

use psl_core::{RuleCategory, RuleSets};

const BLOCK_INDENT: &str = "    ";
const ITEM_SEPARATOR: &str = " ,";

/// Render partitioned rules as initializer text.
pub fn emit_initializers(rules: &RuleSets) -> String {
    let mut out = String::with_capacity(estimate_len(rules));

    out.push('\n');
    out.push_str(BLOCK_INDENT);
    out.push_str("// full matches\n");

    for (index, category) in RuleCategory::ALL.iter().enumerate() {
        let body_indent = match category {
            RuleCategory::FullMatch => "         ",
            RuleCategory::Exception | RuleCategory::Wildcard => "        ",
        };

        out.push_str(BLOCK_INDENT);
        out.push_str("{\n");
        out.push_str(body_indent);
        push_items(&mut out, rules.get(*category));
        out.push('\n');
        out.push_str(BLOCK_INDENT);
        out.push('}');
        if index + 1 < RuleCategory::ALL.len() {
            out.push(',');
        }
        out.push('\n');
    }

    out
}

fn push_items(out: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(ITEM_SEPARATOR);
        }
        out.push('"');
        push_escaped(out, item);
        out.push('"');
    }
}

fn push_escaped(out: &mut String, item: &str) {
    for ch in item.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
}

fn estimate_len(rules: &RuleSets) -> usize {
    let items: usize = RuleCategory::ALL
        .iter()
        .flat_map(|c| rules.get(*c))
        .map(|s| s.len() + 4)
        .sum();
    items + 128
}

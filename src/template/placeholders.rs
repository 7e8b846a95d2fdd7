// ABOUTME: Placeholder substitution for templates
// ABOUTME: Replaces {field} tokens with context values, leaving falsy fields untouched

use std::ops::Range;

use tracing::warn;

use super::context::{display_value, is_truthy, Context, FieldLookup};

const OPEN: u8 = b'{';
const CLOSE: u8 = b'}';

/// Default allowance for replacements of tokens that substituted values
/// introduce, on top of the tokens already present in the input.
pub const DEFAULT_MAX_SUBSTITUTIONS: usize = 10_000;

/// Replace placeholder tokens in `text` using flat field lookup.
///
/// Returns `text` unchanged when there is no context.
pub fn substitute(text: &str, context: Option<&Context>) -> String {
    substitute_with(text, context, FieldLookup::Flat, DEFAULT_MAX_SUBSTITUTIONS)
}

/// Replace placeholder tokens in `text`.
///
/// Each pass replaces the first token whose field is truthy and restarts from
/// the beginning of the rewritten text. Tokens naming falsy or absent fields
/// are skipped and stay in the output verbatim.
///
/// Every token written in the input is always resolved. A value that
/// reintroduces its own token would rewrite forever, so replacements beyond
/// one per `}` in the input are limited to `max_substitutions`.
pub fn substitute_with(
    text: &str,
    context: Option<&Context>,
    lookup: FieldLookup,
    max_substitutions: usize,
) -> String {
    let Some(context) = context else {
        return text.to_string();
    };

    let budget = text
        .bytes()
        .filter(|&b| b == CLOSE)
        .count()
        .saturating_add(max_substitutions);

    let mut text = text.to_string();
    let mut replaced = 0usize;
    while let Some((span, value)) = next_substitution(&text, context, lookup) {
        if replaced == budget {
            warn!(
                "Placeholder substitution stopped after {} replacements",
                budget
            );
            break;
        }
        text.replace_range(span, &value);
        replaced += 1;
    }
    text
}

/// Find the first token with a truthy value and render that value.
fn next_substitution(
    text: &str,
    context: &Context,
    lookup: FieldLookup,
) -> Option<(Range<usize>, String)> {
    let bytes = text.as_bytes();
    let mut open: Option<usize> = None;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte == OPEN {
            open = Some(i);
            continue;
        }
        if byte != CLOSE {
            continue;
        }
        let Some(start) = open.take() else { continue };

        let field = field_name(&text[start + 1..i]);
        if let Some(value) = context.lookup(&field, lookup).filter(|v| is_truthy(v)) {
            return Some((start..i + 1, display_value(value)));
        }
    }

    None
}

/// Field name inside a token, with every space removed
fn field_name(inner: &str) -> String {
    inner.chars().filter(|&c| c != ' ').collect()
}

// ABOUTME: Conditional block evaluation for templates
// ABOUTME: Inlines or deletes ?{field content}? blocks based on context truthiness

use std::ops::Range;

use super::context::{Context, FieldLookup};

const BLOCK_OPEN: &[u8; 2] = b"?{";
const BLOCK_CLOSE: &[u8; 2] = b"}?";
const NEGATION: char = '!';

/// A top-level conditional block located in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalBlock<'a> {
    /// Byte range of the whole block, markers included
    pub span: Range<usize>,
    /// Field token as written, possibly negated
    pub field: &'a str,
    /// Raw content, nested markup left untouched
    pub content: &'a str,
}

impl<'a> ConditionalBlock<'a> {
    /// Whether the block keeps its content for the given context
    pub fn is_shown(&self, context: &Context, lookup: FieldLookup) -> bool {
        let token = self.field.trim();
        match token.strip_prefix(NEGATION) {
            Some(name) => !context.is_field_truthy(name.trim(), lookup),
            None => context.is_field_truthy(token, lookup),
        }
    }
}

/// Resolve every conditional block in `text` using flat field lookup.
///
/// Returns `text` unchanged when there is no context.
pub fn evaluate(text: &str, context: Option<&Context>) -> String {
    evaluate_with(text, context, FieldLookup::Flat)
}

/// Resolve every conditional block in `text`.
///
/// The leftmost top-level block is replaced by its content (shown) or by
/// nothing (hidden), then scanning restarts from the beginning of the
/// rewritten text so that unwrapped nested blocks are seen on the next pass.
/// Each pass removes at least the block markers, so the loop terminates.
pub fn evaluate_with(text: &str, context: Option<&Context>, lookup: FieldLookup) -> String {
    let Some(context) = context else {
        return text.to_string();
    };

    let mut text = text.to_string();
    while let Some((span, replacement)) = next_replacement(&text, context, lookup) {
        text.replace_range(span, &replacement);
    }
    text
}

fn next_replacement(
    text: &str,
    context: &Context,
    lookup: FieldLookup,
) -> Option<(Range<usize>, String)> {
    let block = find_block(text)?;
    let replacement = if block.is_shown(context, lookup) {
        block.content.to_string()
    } else {
        String::new()
    };
    Some((block.span, replacement))
}

/// Locate the leftmost top-level conditional block.
///
/// The first `?{` opens the block. Further `?{` sequences deepen the nesting
/// and `}?` sequences close one level; the block ends at the `}?` met at
/// depth zero. An opening marker without a matching close yields `None`,
/// leaving the remaining markup as literal text.
pub fn find_block(text: &str) -> Option<ConditionalBlock<'_>> {
    let bytes = text.as_bytes();
    let mut start: Option<usize> = None;
    let mut depth = 0usize;

    for i in 1..bytes.len() {
        if bytes[i - 1] == BLOCK_OPEN[0] && bytes[i] == BLOCK_OPEN[1] {
            match start {
                None => {
                    start = Some(i - 1);
                    continue;
                }
                Some(_) => depth += 1,
            }
        }

        let Some(open) = start else { continue };
        let closes = bytes[i] == BLOCK_CLOSE[0] && bytes.get(i + 1) == Some(&BLOCK_CLOSE[1]);
        if !closes {
            continue;
        }

        if depth == 0 {
            let (field, content) = split_block(&text[open + BLOCK_OPEN.len()..i]);
            return Some(ConditionalBlock {
                span: open..i + BLOCK_CLOSE.len(),
                field,
                content,
            });
        }
        depth -= 1;
    }

    None
}

/// Split a block interior into its field token and content.
///
/// Spaces before the field are skipped; the content is everything after the
/// space that ends the field token.
fn split_block(interior: &str) -> (&str, &str) {
    let interior = interior.trim_start_matches(' ');
    interior.split_once(' ').unwrap_or((interior, ""))
}

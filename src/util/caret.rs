//! Text insertion at the compose field's caret.
//!
//! DOM selection offsets count UTF-16 code units, not bytes or chars, so the
//! pure helper converts before slicing the Rust string.

#[cfg(test)]
#[path = "caret_test.rs"]
mod caret_test;

/// Result of inserting text into a field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insertion {
    pub value: String,
    /// UTF-16 offset immediately after the inserted text.
    pub caret: u32,
}

/// Replace the UTF-16 range `start..end` of `value` with `text`.
///
/// Offsets past the end clamp to the end, a reversed range is normalised, and
/// an offset inside a surrogate pair moves to the next char boundary.
pub fn insert_at_selection(value: &str, start: u32, end: u32, text: &str) -> Insertion {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let (start_byte, start_units) = boundary(value, lo as usize);
    let (end_byte, _) = boundary(value, hi as usize);
    let end_byte = end_byte.max(start_byte);

    let mut next = String::with_capacity(value.len() + text.len());
    next.push_str(&value[..start_byte]);
    next.push_str(text);
    next.push_str(&value[end_byte..]);

    let caret = start_units + text.encode_utf16().count();
    Insertion { value: next, caret: u32::try_from(caret).unwrap_or(u32::MAX) }
}

/// Byte index and UTF-16 offset of the first char boundary at or after `units`.
fn boundary(value: &str, units: usize) -> (usize, usize) {
    let mut seen = 0;
    for (idx, ch) in value.char_indices() {
        if seen >= units {
            return (idx, seen);
        }
        seen += ch.len_utf16();
    }
    (value.len(), seen)
}

/// Insert `text` at the textarea's selection, move the caret after it and
/// refocus. Returns the new field value.
#[cfg(feature = "csr")]
pub fn insert_into_textarea(el: &web_sys::HtmlTextAreaElement, text: &str) -> String {
    let current = el.value();
    let fallback = u32::try_from(current.encode_utf16().count()).unwrap_or(u32::MAX);
    let start = el.selection_start().ok().flatten().unwrap_or(fallback);
    let end = el.selection_end().ok().flatten().unwrap_or(start);

    let Insertion { value, caret } = insert_at_selection(&current, start, end, text);
    el.set_value(&value);
    if let Err(err) = el.set_selection_range(caret, caret) {
        log::warn!("could not place caret after insertion: {err:?}");
    }
    if let Err(err) = el.focus() {
        log::warn!("could not refocus compose field: {err:?}");
    }
    value
}

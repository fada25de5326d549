use std::borrow::Cow;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text transforms applied before two texts are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Collapse whitespace runs to a single space and trim the text
    pub ignore_whitespace: bool,

    /// Compare in lower case
    pub ignore_case: bool,
}

impl NormalizeOptions {
    /// Check if any transform is enabled
    pub fn is_noop(&self) -> bool {
        !self.ignore_whitespace && !self.ignore_case
    }
}

/// Normalize `text` for comparison.
///
/// Whitespace is collapsed first, then the text is lower-cased. Line breaks
/// count as whitespace, so with `ignore_whitespace` the whole text becomes a
/// single line.
pub fn normalize<'a>(text: &'a str, options: &NormalizeOptions) -> Cow<'a, str> {
    if options.is_noop() {
        return Cow::Borrowed(text);
    }

    let mut text = Cow::Borrowed(text);

    if options.ignore_whitespace {
        text = Cow::Owned(collapse_whitespace(&text));
    }

    if options.ignore_case {
        text = Cow::Owned(text.to_lowercase());
    }

    trace!("Normalized text to {} bytes", text.len());
    text
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}

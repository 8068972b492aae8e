//! Anchor spanning.
//!
//! The export has no field delimiters. A few substrings are reliably
//! recognizable (course headers, section headers, date ranges), so text is cut
//! at those anchors and the gaps between them are treated as payload.

use regex::{Captures, Regex};

/// Text introduced by a leading anchor: everything from the end of the anchor
/// to the start of the next one, or to the end of the input.
#[derive(Debug)]
pub struct Led<'t> {
    pub anchor: Captures<'t>,
    pub body: &'t str,
}

/// Text closed by a trailing anchor: everything from the end of the previous
/// anchor (or the start of the input) to the start of this one.
#[derive(Debug)]
pub struct Trailed<'t> {
    pub lead: &'t str,
    pub anchor: Captures<'t>,
}

/// Split `text` into bodies that each follow a match of `anchor`.
///
/// Text before the first match belongs to no segment and is discarded.
pub fn leading<'t>(text: &'t str, anchor: &Regex) -> Vec<Led<'t>> {
    let mut matches = anchor.captures_iter(text).peekable();
    let mut segments = Vec::new();

    while let Some(caps) = matches.next() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let end = matches
            .peek()
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());

        segments.push(Led {
            body: &text[whole.end()..end],
            anchor: caps,
        });
    }

    segments
}

/// Split `text` into leads that each precede a match of `anchor`.
///
/// Text after the last match belongs to no segment and is discarded.
pub fn trailing<'t>(text: &'t str, anchor: &Regex) -> Vec<Trailed<'t>> {
    let mut last_end = 0;

    anchor
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let lead = &text[last_end..whole.start()];
            last_end = whole.end();
            Some(Trailed { lead, anchor: caps })
        })
        .collect()
}


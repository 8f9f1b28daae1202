//! Streaming keyword-block scanner for the client log.
//!
//! The client log is an append-only text file interleaving several event
//! streams. Each interesting event is a marker line (`<== EventName`)
//! followed by a JSON payload, either inline on the marker line or starting
//! on a subsequent line. This module locates the LAST occurrence of a given
//! keyword and collects the raw lines of the JSON block that follows it.
//!
//! Implemented as an explicit finite-state loop over lines (not whole-file
//! regex matching) so memory stays proportional to one block and the
//! last-match-wins semantic needs no random access.

use std::io::BufRead;

use crate::error::Result;
use crate::keyword::Keyword;

/// Per-line scan state while inside a candidate block
#[derive(Debug, Default)]
struct ScanState {
    capturing: bool,
    brace_depth: i64,
    bracket_depth: i64,
    bucket: Vec<String>,
}

impl ScanState {
    /// A new keyword match discards any earlier candidate block
    fn start_block(&mut self) {
        self.bucket.clear();
        self.brace_depth = 0;
        self.bracket_depth = 0;
        self.capturing = true;
    }

    /// Append a fragment and update nesting depths from its text.
    ///
    /// Stops capturing once both depths return to zero and this fragment
    /// contained at least one closing character. The bucket is kept: only a
    /// later keyword match resets it.
    fn feed(&mut self, fragment: &str) {
        self.bucket.push(fragment.to_string());

        let closing_braces = fragment.matches('}').count() as i64;
        let closing_brackets = fragment.matches(']').count() as i64;
        self.brace_depth += fragment.matches('{').count() as i64 - closing_braces;
        self.bracket_depth += fragment.matches('[').count() as i64 - closing_brackets;

        if (closing_braces > 0 || closing_brackets > 0)
            && self.brace_depth == 0
            && self.bracket_depth == 0
        {
            self.capturing = false;
        }
    }
}

/// Find the raw lines of the last `keyword` block in `source`.
///
/// Returns an empty vec when the keyword never matches. An unterminated
/// block at EOF (in-progress log write) is returned as accumulated; the
/// decoder surfaces it as a parse failure.
///
/// # Errors
/// Propagates I/O errors from the reader; a read failure aborts the whole
/// scan with no partial result.
pub fn find_last_block<R: BufRead>(source: R, keyword: &Keyword) -> Result<Vec<String>> {
    let mut state = ScanState::default();

    for line in source.lines() {
        let line = line?;

        if let Some(end) = keyword.find_in(&line) {
            state.start_block();

            // Inline payload: strip everything up to and including the
            // keyword and depth-scan the remainder. A pure marker line
            // produces no fragment; the block starts on a later line.
            let rest = &line[end..];
            if rest.contains('{') || rest.contains('[') {
                state.feed(rest);
            }
            continue;
        }

        if state.capturing && !line.trim().is_empty() {
            state.feed(&line);
        }
    }

    Ok(state.bucket)
}

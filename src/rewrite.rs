//! Docblock replacement for named functions.
//!
//! A request names a function and its visibility; the rewriter finds the
//! first `/** ... */` comment directly followed by that declaration header,
//! swaps the comment for the requested block and re-emits the header as
//! `<visibility> function <name>(`. Nothing here touches the filesystem.
//!
//! ## Matching
//!
//! | Part | Pattern |
//! |------|---------|
//! | Comment | `/**`, body never containing `*/`, closing `*/` |
//! | Gap | one or more whitespace characters |
//! | Header | `<visibility>\s+function\s+<name>\s*(` |
//!
//! The comment body is spelled out as "anything but the closing delimiter"
//! instead of a lazy `.*?`: a lazy quantifier still widens past `*/` when
//! the text right after the nearest close does not fit the header, and would
//! swallow every method between an unrelated comment and the target.

use crate::error::{RewriteError, RewriteResult};
use regex::Regex;
use std::fmt;
use std::ops::Range;
use tracing::{debug, warn};

/// A `/** ... */` block that ends at the first `*/`.
const DOCBLOCK: &str = r"/\*\*(?:[^*]|\*+[^*/])*\*+/";

/// Access modifier in front of `function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One docblock substitution: which function, and what its comment becomes.
#[derive(Debug, Clone, Copy)]
pub struct ReplacementRequest<'a> {
    pub name: &'a str,
    pub visibility: Visibility,
    /// Complete comment including `/**` and `*/`.
    pub block: &'a str,
}

impl ReplacementRequest<'_> {
    /// The declaration header re-emitted after the new block.
    pub fn header(&self) -> String {
        format!("{} function {}(", self.visibility, self.name)
    }

    /// Text that replaces a matched span.
    pub fn replacement(&self) -> String {
        format!("{}\n    {}", self.block, self.header())
    }

    /// Group 1 captures the existing comment.
    fn pattern(&self) -> RewriteResult<Regex> {
        let source = format!(
            r"({DOCBLOCK})\s+{}\s+function\s+{}\s*\(",
            regex::escape(self.visibility.as_str()),
            regex::escape(self.name),
        );
        Ok(Regex::new(&source)?)
    }
}

/// Knobs for a rewrite run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// Fail instead of warning when a request has several candidates.
    pub strict: bool,
}

/// Every span matching `request`, in text order, with its comment.
fn find_all<'t>(buffer: &'t str, re: &Regex) -> Vec<(Range<usize>, &'t str)> {
    re.captures_iter(buffer)
        .filter_map(|caps| {
            let span = caps.get(0)?.range();
            let comment = caps.get(1).map_or("", |m| m.as_str());
            Some((span, comment))
        })
        .collect()
}

/// Replace the docblock in front of one function.
///
/// Only the topmost match is considered; every byte outside it is copied
/// through unchanged. A topmost comment already equal to the requested
/// block counts as missing, so rewriting the same text twice fails.
pub fn replace_one(
    buffer: &str,
    request: &ReplacementRequest,
    options: &RewriteOptions,
) -> RewriteResult<String> {
    let re = request.pattern()?;
    let found = find_all(buffer, &re);

    let not_found = || RewriteError::MatchNotFound {
        name: request.name.to_string(),
    };
    let Some((first, comment)) = found.first().cloned() else {
        return Err(not_found());
    };

    if found.len() > 1 && options.strict {
        return Err(RewriteError::AmbiguousMatch {
            name: request.name.to_string(),
            count: found.len(),
        });
    }

    if comment == request.block {
        debug!(function = request.name, "docblock is already up to date");
        return Err(not_found());
    }

    if found.len() > 1 {
        warn!(
            function = request.name,
            candidates = found.len(),
            "multiple docblocks match, rewriting the first"
        );
    }

    let replacement = request.replacement();
    let mut out = String::with_capacity(buffer.len() - first.len() + replacement.len());
    out.push_str(&buffer[..first.start]);
    out.push_str(&replacement);
    out.push_str(&buffer[first.end..]);

    debug!(
        function = request.name,
        visibility = %request.visibility,
        offset = first.start,
        "replaced docblock"
    );
    Ok(out)
}

/// Apply every request in order, feeding each result into the next.
///
/// The first failing request aborts the run and nothing is returned.
pub fn run(
    requests: &[ReplacementRequest],
    source: &str,
    options: &RewriteOptions,
) -> RewriteResult<String> {
    requests
        .iter()
        .try_fold(source.to_string(), |buffer, request| {
            replace_one(&buffer, request, options)
        })
}

//! Markdown link rebasing.
//!
//! Scans a document for inline links `[label](target)` and rewrites each
//! relative target into an absolute URL under a configured base, stripping
//! the document-source suffix (`.md` by default). Targets that are already
//! absolute (`http://` / `https://`) pass through untouched, as does every
//! character outside a recognized link.
//!
//! The pass is a pure function of (document, policy): no I/O, no shared
//! state, and it never fails — malformed link syntax is plain text.

mod scanner;

use tracing::{debug, instrument};

use relink_shared::RewritePolicy;

/// Result of one rewrite pass over a document.
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// The rewritten document text.
    pub output: String,
    /// Number of link targets rebased onto the base URL.
    pub links_rewritten: usize,
    /// Number of recognized links left untouched (already absolute).
    pub links_preserved: usize,
}

/// Rewrite every qualifying markdown link target in `document`.
///
/// Single left-to-right pass. Output preserves all content outside matched
/// link targets verbatim and in document order.
#[instrument(skip(document, policy), fields(len = document.len(), base = %policy.base_url))]
pub fn rewrite(document: &str, policy: &RewritePolicy) -> RewriteResult {
    let mut output = String::with_capacity(document.len() + 64);
    let mut links_rewritten = 0;
    let mut links_preserved = 0;
    let mut cursor = 0;

    while let Some(link) = scanner::next_link(document, cursor, policy.label_policy) {
        // Everything up to the target, including label and delimiters.
        output.push_str(&document[cursor..link.target.start]);

        let target = &document[link.target.clone()];
        if is_absolute(target) {
            links_preserved += 1;
            output.push_str(target);
        } else {
            links_rewritten += 1;
            output.push_str(&rebase_target(target, policy));
        }

        // The closing `)`.
        output.push_str(&document[link.target.end..link.full.end]);
        cursor = link.full.end;
    }

    output.push_str(&document[cursor..]);

    debug!(links_rewritten, links_preserved, "rewrite pass complete");

    RewriteResult {
        output,
        links_rewritten,
        links_preserved,
    }
}

/// An absolute web URL short-circuits the rewrite.
fn is_absolute(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Strip the document-source suffix if present, then prepend the base URL.
///
/// Concatenation is a plain string join: no slash normalization.
fn rebase_target(target: &str, policy: &RewritePolicy) -> String {
    let stripped = target
        .strip_suffix(policy.strip_suffix.as_str())
        .unwrap_or(target);
    format!("{}{}", policy.base_url, stripped)
}

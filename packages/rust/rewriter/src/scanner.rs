//! Single-pass scanner for markdown inline links.
//!
//! The scan has two states: plain text, and resolving a candidate that
//! started at a `[`. A candidate that fails to resolve (no `](` separator,
//! no closing `)`, or a label rejected by the strict policy) is not a
//! match; the scan resumes one character past its `[`, so the failed text
//! reaches the output verbatim.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use relink_shared::LabelPolicy;

/// A recognized `[label](target)` link: byte-offset spans into the
/// document. Non-owning, consumed immediately by the rewrite loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkMatch {
    /// Span of the label text (between `[` and `]`).
    pub label: Range<usize>,
    /// Span of the target text (between `(` and `)`).
    pub target: Range<usize>,
    /// Span of the whole construct, `[` through `)` inclusive.
    pub full: Range<usize>,
}

/// Find the next recognized link at or after byte offset `from`.
///
/// All four delimiter characters are ASCII, so the offsets returned by
/// `str::find` on document slices are always char boundaries.
pub(crate) fn next_link(doc: &str, from: usize, labels: LabelPolicy) -> Option<LinkMatch> {
    let mut pos = from;
    while let Some(rel) = doc[pos..].find('[') {
        let open = pos + rel;
        if let Some(link) = match_link_at(doc, open, labels) {
            return Some(link);
        }
        // Failed candidate: resume past the single `[`.
        pos = open + 1;
    }
    None
}

/// Try to resolve a candidate link whose `[` sits at byte offset `open`.
fn match_link_at(doc: &str, open: usize, labels: LabelPolicy) -> Option<LinkMatch> {
    static STRICT_LABEL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 -]*$").expect("valid regex"));

    let label_start = open + 1;

    // The label ends at the next `]` immediately followed by `(`; a bare
    // `]` without `(` is label text and scanned past.
    let sep = label_start + doc[label_start..].find("](")?;
    let label = label_start..sep;

    if labels == LabelPolicy::Strict && !STRICT_LABEL_RE.is_match(&doc[label.clone()]) {
        return None;
    }

    let target_start = sep + 2;
    let close = target_start + doc[target_start..].find(')')?;

    Some(LinkMatch {
        label,
        target: target_start..close,
        full: open..close + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(doc: &str, labels: LabelPolicy) -> Option<(String, String)> {
        next_link(doc, 0, labels)
            .map(|m| (doc[m.label].to_string(), doc[m.target].to_string()))
    }

    #[test]
    fn recognizes_simple_link() {
        let m = next_link("see [Docs](guide.md) here", 0, LabelPolicy::Any).unwrap();
        assert_eq!(m.full, 4..20);
        assert_eq!(m.label, 5..9);
        assert_eq!(m.target, 11..19);
    }

    #[test]
    fn bare_bracket_is_not_a_link() {
        assert_eq!(link("a [note] without parens", LabelPolicy::Any), None);
    }

    #[test]
    fn missing_close_paren_is_not_a_link() {
        assert_eq!(link("[Unclosed(link", LabelPolicy::Any), None);
        assert_eq!(link("[label](target", LabelPolicy::Any), None);
    }

    #[test]
    fn label_may_contain_bare_close_bracket() {
        // The separator is `](`, so a `]` not followed by `(` is label text.
        let (label, target) = link("[a ] b](t)", LabelPolicy::Any).unwrap();
        assert_eq!(label, "a ] b");
        assert_eq!(target, "t");
    }

    #[test]
    fn strict_policy_rejects_punctuated_label() {
        assert_eq!(link("[See §4!](guide.md)", LabelPolicy::Strict), None);
        let (label, _) = link("[Getting Started 2-0](intro.md)", LabelPolicy::Strict).unwrap();
        assert_eq!(label, "Getting Started 2-0");
    }

    #[test]
    fn permissive_label_swallows_earlier_bracket() {
        // Under the permissive policy the label runs all the way to the
        // `](` separator, stray `[` included.
        let doc = "[stray then [Docs](guide.md)";
        let m = next_link(doc, 0, LabelPolicy::Any).unwrap();
        assert_eq!(&doc[m.label.clone()], "stray then [Docs");
        assert_eq!(&doc[m.target], "guide.md");
    }

    #[test]
    fn scan_resumes_after_failed_candidate() {
        // Strict rejects the first candidate; the inner link must still be
        // found from one past its `[`.
        let doc = "[stray! then [Docs](guide.md)";
        let m = next_link(doc, 0, LabelPolicy::Strict).unwrap();
        assert_eq!(&doc[m.label.clone()], "Docs");
        assert_eq!(&doc[m.target], "guide.md");
    }

    #[test]
    fn from_offset_skips_earlier_links() {
        let doc = "[A](a.md) [B](b.md)";
        let first = next_link(doc, 0, LabelPolicy::Any).unwrap();
        let second = next_link(doc, first.full.end, LabelPolicy::Any).unwrap();
        assert_eq!(&doc[second.target], "b.md");
    }

    #[test]
    fn multibyte_text_around_links() {
        let doc = "Überblick → [Führer](führer.md) ✓";
        let m = next_link(doc, 0, LabelPolicy::Any).unwrap();
        assert_eq!(&doc[m.label], "Führer");
        assert_eq!(&doc[m.target], "führer.md");
    }
}

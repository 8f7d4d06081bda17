// src/core/html.rs
// Document-order helpers over a parsed `scraper::Html` tree.
// "Next" always means the next node in parse order: first child, else next sibling,
// else the next sibling of the nearest ancestor that has one.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use scraper::{ElementRef, Html};

/// How far into the page a `<meta>` charset declaration is looked for.
const CHARSET_SNIFF_BYTES: usize = 1024;

/// Decode raw page bytes: BOM first, then a `charset=` declaration near the top
/// (`<meta charset>` or `http-equiv` content), else UTF-8. Undecodable bytes
/// become U+FFFD.
pub fn decode_page(raw: &[u8]) -> Cow<'_, str> {
    let head = &raw[..raw.len().min(CHARSET_SNIFF_BYTES)];
    let encoding = declared_charset(head).unwrap_or(UTF_8);
    // `decode` lets a BOM override the declaration.
    let (text, _, _) = encoding.decode(raw);
    text
}

/// Encoding named by the first `charset=` in `head`, if the label is known.
/// UTF-16 labels map to UTF-8: a page that parses as ASCII-compatible markup
/// cannot really be UTF-16.
fn declared_charset(head: &[u8]) -> Option<&'static Encoding> {
    const NEEDLE: &[u8] = b"charset=";
    let pos = head
        .windows(NEEDLE.len())
        .position(|w| w.eq_ignore_ascii_case(NEEDLE))?;
    let rest = &head[pos + NEEDLE.len()..];
    let rest = rest
        .strip_prefix(b"\"")
        .or_else(|| rest.strip_prefix(b"'"))
        .unwrap_or(rest);
    let end = rest
        .iter()
        .position(|b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());
    Encoding::for_label(&rest[..end]).map(Encoding::output_encoding)
}

/// Next element with tag name `tag` after `el` in document order.
pub fn find_next<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    following(el).find(|e| e.value().name() == tag)
}

/// Every element after `el` in document order.
pub fn following<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    std::iter::successors(Some(*el), |node| {
        node.first_child().or_else(|| {
            std::iter::once(*node)
                .chain(node.ancestors())
                .find_map(|n| n.next_sibling())
        })
    })
    .skip(1)
    .filter_map(ElementRef::wrap)
}

/// True when the node right after `el`'s opening tag is an element named `tag`.
/// A leading text node (even whitespace) counts as "not an element".
pub fn next_node_is(el: ElementRef<'_>, tag: &str) -> bool {
    let next = el.first_child().or_else(|| {
        std::iter::once(*el)
            .chain(el.ancestors())
            .find_map(|n| n.next_sibling())
    });
    next.and_then(ElementRef::wrap)
        .is_some_and(|e| e.value().name() == tag)
}

/// First token of the `class` attribute, if any.
pub fn first_class<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("class")?.split_whitespace().next()
}

/// Any class token equals `class`.
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|c| c.split_whitespace().any(|t| t == class))
}

/// Concatenated descendant text, untrimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// All elements named `tag`, in document order.
pub fn elements_named<'a>(doc: &'a Html, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == tag)
}

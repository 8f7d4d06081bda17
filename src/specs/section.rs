// src/specs/section.rs
// Section scanner: collects the text blocks between one h4 marker and the next.

use scraper::ElementRef;

use crate::config::consts::{BLOCK_TAG, CAPTION_CLASSES, LINK_TAG, MARKER_TAG};
use crate::core::html::{find_next, first_class, next_node_is, text_of};

/// Figures open with a link to the image; captions carry a caption class as
/// their *first* class token. Later class tokens are not consulted.
pub fn is_figure_or_caption(block: ElementRef<'_>) -> bool {
    next_node_is(block, LINK_TAG)
        || first_class(block).is_some_and(|c| CAPTION_CLASSES.contains(&c))
}

/// Concatenate the trimmed text of every block from `start` up to the section's end marker.
///
/// `end` is the marker that closes the section (`None` when the section is the last one).
/// Scanning stops as soon as the frontier runs out or the next marker reachable from the
/// frontier block is not `end`, i.e. we walked past the section. `sep` goes after every
/// accepted block and is trimmed off both ends of the result.
pub fn scan_section<'a>(
    start: Option<ElementRef<'a>>,
    end: Option<ElementRef<'a>>,
    sep: &str,
) -> String {
    let mut text = s!();
    let mut frontier = start;

    while let Some(block) = frontier {
        if find_next(block, MARKER_TAG) != end {
            break;
        }
        if !is_figure_or_caption(block) {
            text.push_str(text_of(block).trim());
            text.push_str(sep);
        }
        frontier = find_next(block, BLOCK_TAG);
    }

    text.trim_matches(|c: char| sep.contains(c)).to_string()
}

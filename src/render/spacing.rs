//! Blank-line spacing between consecutive section elements.

use crate::model::ElementKind;

/// Separator emitted after an element of kind `current` when it is
/// followed by `next` within the same section (`None` at section end).
pub(crate) fn separator(current: ElementKind, next: Option<ElementKind>) -> &'static str {
    let Some(next) = next else {
        return if current.is_inline() { "\n" } else { "" };
    };

    match next {
        ElementKind::Table
        | ElementKind::Rule
        | ElementKind::List
        | ElementKind::Header
        | ElementKind::Blockquote
        | ElementKind::Image
        | ElementKind::Codeblock
        | ElementKind::Paragraph => {
            if current.is_inline() {
                "\n\n"
            } else {
                "\n"
            }
        }
        ElementKind::Text | ElementKind::Link => "\n",
        _ if current == ElementKind::List => "\n",
        _ => "",
    }
}

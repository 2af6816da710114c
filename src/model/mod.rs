//! Document model types for Markdown content representation.
//!
//! This module defines the intermediate representation handed from a
//! document producer to the renderer. A [`Document`] holds ordered
//! [`Section`]s, a section holds ordered [`Element`]s, and containers own
//! their children outright. Every node carries its position within its
//! parent and a one-way lock flag that rejects later mutation.

/// Shared accessors for nodes that carry an `index` and a `locked` flag.
///
/// The `leaf` form also generates `lock` for nodes without children;
/// containers implement their own deep `lock`.
macro_rules! impl_node {
    ($ty:ident, $kind:ident, leaf) => {
        impl_node!($ty, $kind);

        impl $ty {
            /// Lock this element against further mutation.
            pub fn lock(&mut self) {
                self.locked = true;
            }
        }
    };
    ($ty:ident, $kind:ident) => {
        impl $ty {
            /// Position of this node within its parent.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Set the position explicitly (builder style).
            pub fn with_index(mut self, index: usize) -> Self {
                self.index = index;
                self
            }

            /// Check if this node rejects mutation.
            pub fn is_locked(&self) -> bool {
                self.locked
            }

            pub(crate) fn set_index(&mut self, index: usize) {
                self.index = index;
            }

            pub(crate) fn ensure_unlocked(&self) -> $crate::error::Result<()> {
                if self.locked {
                    Err($crate::error::Error::Locked(
                        $crate::model::ElementKind::$kind,
                    ))
                } else {
                    Ok(())
                }
            }
        }
    };
}

mod block;
mod document;
mod element;
mod inline;
mod list;
mod table;

pub use block::{Blockquote, Codeblock, Header, HtmlAnchor, Paragraph, Rule};
pub use document::{Document, Section};
pub use element::{Element, ElementKind};
pub use inline::{Emphasis, Image, Link, Text, RESERVED_TEXT_CHARS};
pub use list::{List, ListEntry};
pub use table::{Column, Row, Table};

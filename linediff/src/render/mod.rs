//! Renderers for record streams.
//!
//! Renderers only format records; they never look at the inputs or re-run an
//! alignment, so rendering the same records twice yields the same bytes.

pub mod html;
pub mod plain;

use core::fmt::Display;

use crate::record::DiffRecord;

pub use html::HtmlRenderer;
pub use plain::PlainRenderer;

/// Trait for record stream renderers.
pub trait Renderer {
    /// Renders every record, in order, into one string.
    fn render<T: Display>(&self, records: &[DiffRecord<T>]) -> String;
}

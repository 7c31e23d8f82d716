//! Plain-text rendering.
//!
//! Each record becomes one line: both indices right-aligned to width two, the
//! change marker, a bar, then the payload.
//!
//! ```text
//!   0,  0   |one
//!   1,  1 - |two
//!   2,  1 + |five
//! ```
use core::fmt::Display;

use super::Renderer;
use crate::record::DiffRecord;

/// Renders records as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render<T: Display>(&self, records: &[DiffRecord<T>]) -> String {
        render(records)
    }
}

/// Renders records as plain text.
#[must_use]
pub fn render<T: Display>(records: &[DiffRecord<T>]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            " {:>2}, {:>2} {} |{}\n",
            record.left_index,
            record.right_index,
            record.delta.sign(),
            record.payload
        ));
    }
    output
}

//! HTML table-row rendering.
//!
//! Each record becomes one `<tr>` with four cells: left line number, left
//! text, right text, right line number. Line numbers are 1-based. Deleted
//! text carries `class="deleted"`, added text `class="added"`. The caller
//! supplies the surrounding `<table>` and stylesheet.
use core::fmt::Display;

use super::Renderer;
use crate::record::{Delta, DiffRecord};

/// Renders records as HTML table rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render<T: Display>(&self, records: &[DiffRecord<T>]) -> String {
        render(records)
    }
}

/// Renders records as HTML table rows, one per line.
#[must_use]
pub fn render<T: Display>(records: &[DiffRecord<T>]) -> String {
    let mut output = String::new();
    for record in records {
        let text = escape(&record.payload.to_string());
        let (left_num, right_num) = (record.left_index + 1, record.right_index + 1);
        let row = match record.delta {
            Delta::Common => format!(
                r#"<tr><td class="line-num">{left_num}</td><td><pre>{text}</pre></td><td><pre>{text}</pre></td><td class="line-num">{right_num}</td></tr>"#
            ),
            Delta::LeftOnly => format!(
                r#"<tr><td class="line-num">{left_num}</td><td class="deleted"><pre>{text}</pre></td><td></td><td class="line-num"></td></tr>"#
            ),
            Delta::RightOnly => format!(
                r#"<tr><td class="line-num"></td><td></td><td class="added"><pre>{text}</pre></td><td class="line-num">{right_num}</td></tr>"#
            ),
        };
        output.push_str(&row);
        output.push('\n');
    }
    output
}

/// Escapes `& < > " '` for use in element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::diff_lines;

    #[test]
    fn test_render_rows() {
        let records = diff_lines("one\ntwo\n", "one\nfive\n");
        let expected = concat!(
            r#"<tr><td class="line-num">1</td><td><pre>one</pre></td><td><pre>one</pre></td><td class="line-num">1</td></tr>"#,
            "\n",
            r#"<tr><td class="line-num">2</td><td class="deleted"><pre>two</pre></td><td></td><td class="line-num"></td></tr>"#,
            "\n",
            r#"<tr><td class="line-num"></td><td></td><td class="added"><pre>five</pre></td><td class="line-num">2</td></tr>"#,
            "\n",
            r#"<tr><td class="line-num">3</td><td><pre></pre></td><td><pre></pre></td><td class="line-num">3</td></tr>"#,
            "\n",
        );
        assert_eq!(render(&records), expected);
    }

    #[test]
    fn test_payload_is_escaped() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        let records = vec![DiffRecord::left_only("<b>", 0, 0)];
        assert!(render(&records).contains("<pre>&lt;b&gt;</pre>"));
    }

    #[test]
    fn test_renderer_trait_matches_free_function() {
        let records = diff_lines("x", "y");
        assert_eq!(HtmlRenderer.render(&records), render(&records));
    }
}

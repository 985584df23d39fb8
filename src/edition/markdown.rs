//! Block-level markdown for announcement summaries.
//!
//! Summaries may carry paragraphs, emphasis, block quotes and lists. Raw HTML
//! is never interpreted; it is shown as literal text.

use comrak::nodes::{AstNode, ListDelimType, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::types::{InlineSpan, InlineStyle, LineType, RenderedLine};
use super::wrap::wrap_spans;

/// Render markdown `source` into wrapped lines no wider than `width`.
///
/// Blocks are separated by a single empty line; there is no trailing empty
/// line.
pub fn render_markdown(source: &str, width: usize) -> Vec<RenderedLine> {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, source, &options);

    let mut lines = Vec::new();
    process_node(root, &mut lines, 0, width.max(1), None);

    while lines
        .last()
        .is_some_and(|l: &RenderedLine| matches!(l.line_type(), LineType::Empty))
    {
        lines.pop();
    }
    lines
}

fn create_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

fn process_node<'a>(
    node: &'a AstNode<'a>,
    lines: &mut Vec<RenderedLine>,
    depth: usize,
    wrap_width: usize,
    list_marker: Option<String>,
) {
    match &node.data.borrow().value {
        NodeValue::Paragraph => {
            push_wrapped(lines, &collect_inline_spans(node), wrap_width, "", "", LineType::Paragraph);
            lines.push(RenderedLine::empty());
        }

        NodeValue::Heading(_) => {
            let spans: Vec<InlineSpan> = collect_inline_spans(node)
                .into_iter()
                .map(|s| {
                    let mut style = s.style();
                    style.strong = true;
                    InlineSpan::new(s.text().to_string(), style)
                })
                .collect();
            push_wrapped(lines, &spans, wrap_width, "", "", LineType::Paragraph);
            lines.push(RenderedLine::empty());
        }

        NodeValue::CodeBlock(code_block) => {
            let code = InlineStyle {
                code: true,
                ..InlineStyle::default()
            };
            for raw_line in code_block.literal.lines() {
                lines.push(RenderedLine::from_spans(
                    LineType::Paragraph,
                    vec![
                        InlineSpan::plain("  "),
                        InlineSpan::new(raw_line.to_string(), code),
                    ],
                ));
            }
            lines.push(RenderedLine::empty());
        }

        NodeValue::HtmlBlock(html) => {
            for raw_line in html.literal.lines() {
                push_wrapped(
                    lines,
                    &[InlineSpan::plain(raw_line)],
                    wrap_width,
                    "",
                    "",
                    LineType::Paragraph,
                );
            }
            lines.push(RenderedLine::empty());
        }

        NodeValue::List(list) => {
            let start = list.start;
            let delimiter = match list.delimiter {
                ListDelimType::Paren => ')',
                ListDelimType::Period => '.',
            };
            let number_width = (start + node.children().count().saturating_sub(1))
                .to_string()
                .len();

            for (index, child) in node.children().enumerate() {
                let marker = match list.list_type {
                    ListType::Bullet => "• ".to_string(),
                    ListType::Ordered => {
                        format!("{:>number_width$}{delimiter} ", start + index)
                    }
                };
                process_node(child, lines, depth + 1, wrap_width, Some(marker));
            }
            if depth == 0 {
                lines.push(RenderedLine::empty());
            }
        }

        NodeValue::Item(_) => {
            let indent = "  ".repeat(depth.saturating_sub(1));
            let marker = list_marker.unwrap_or_else(|| "- ".to_string());
            let prefix_first = format!("{indent}{marker}");
            let prefix_next = format!("{indent}{}", " ".repeat(marker.chars().count()));
            let mut rendered_any = false;

            for child in node.children() {
                if matches!(child.data.borrow().value, NodeValue::Paragraph) {
                    let prefix = if rendered_any {
                        &prefix_next
                    } else {
                        &prefix_first
                    };
                    push_wrapped(
                        lines,
                        &collect_inline_spans(child),
                        wrap_width,
                        prefix,
                        &prefix_next,
                        LineType::ListItem(depth),
                    );
                    rendered_any = true;
                } else {
                    process_node(child, lines, depth, wrap_width, None);
                }
            }

            if !rendered_any {
                push_wrapped(
                    lines,
                    &[],
                    wrap_width,
                    &prefix_first,
                    &prefix_next,
                    LineType::ListItem(depth),
                );
            }
        }

        NodeValue::BlockQuote => {
            render_blockquote(node, lines, wrap_width, 1);
            lines.push(RenderedLine::empty());
        }

        NodeValue::ThematicBreak => {
            lines.push(RenderedLine::new(
                "─".repeat(wrap_width.min(24)),
                LineType::Rule,
            ));
            lines.push(RenderedLine::empty());
        }

        _ => {
            for child in node.children() {
                process_node(child, lines, depth, wrap_width, list_marker.clone());
            }
        }
    }
}

fn push_wrapped(
    lines: &mut Vec<RenderedLine>,
    spans: &[InlineSpan],
    wrap_width: usize,
    prefix_first: &str,
    prefix_next: &str,
    line_type: LineType,
) {
    for line_spans in wrap_spans(spans, wrap_width, prefix_first, prefix_next) {
        lines.push(RenderedLine::from_spans(line_type, line_spans));
    }
}

fn render_blockquote<'a>(
    node: &'a AstNode<'a>,
    lines: &mut Vec<RenderedLine>,
    wrap_width: usize,
    quote_depth: usize,
) {
    let prefix = "│ ".repeat(quote_depth);

    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::BlockQuote => {
                render_blockquote(child, lines, wrap_width, quote_depth + 1);
            }
            _ => {
                let spans = collect_inline_spans(child);
                push_wrapped(lines, &spans, wrap_width, &prefix, &prefix, LineType::BlockQuote);
            }
        }
    }
}

fn collect_inline_spans<'a>(node: &'a AstNode<'a>) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    collect_inline_spans_recursive(node, InlineStyle::default(), &mut spans);
    spans
}

fn collect_inline_spans_recursive<'a>(
    node: &'a AstNode<'a>,
    style: InlineStyle,
    spans: &mut Vec<InlineSpan>,
) {
    let mut next = style;
    match &node.data.borrow().value {
        NodeValue::List(_) | NodeValue::Item(_) => return,
        NodeValue::Text(t) => {
            spans.push(InlineSpan::new(t.clone(), style));
            return;
        }
        NodeValue::HtmlInline(html) => {
            spans.push(InlineSpan::new(html.clone(), style));
            return;
        }
        NodeValue::Code(code) => {
            let code_style = InlineStyle {
                code: true,
                ..InlineStyle::default()
            };
            spans.push(InlineSpan::new(code.literal.clone(), code_style));
            return;
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            spans.push(InlineSpan::new(" ".to_string(), style));
            return;
        }
        NodeValue::Emph => next.emphasis = true,
        NodeValue::Strong => next.strong = true,
        NodeValue::Strikethrough => next.strikethrough = true,
        NodeValue::Link(_) => next.link = true,
        _ => {}
    }
    for child in node.children() {
        collect_inline_spans_recursive(child, next, spans);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(lines: &[RenderedLine]) -> Vec<&str> {
        lines.iter().map(RenderedLine::content).collect()
    }

    #[test]
    fn test_plain_paragraph() {
        let lines = render_markdown("Library hours extended.", 40);
        assert_eq!(contents(&lines), vec!["Library hours extended."]);
        assert_eq!(*lines[0].line_type(), LineType::Paragraph);
    }

    #[test]
    fn test_paragraphs_separated_by_one_empty_line() {
        let lines = render_markdown("First.\n\nSecond.", 40);
        assert_eq!(contents(&lines), vec!["First.", "", "Second."]);
    }

    #[test]
    fn test_inline_emphasis_creates_styled_spans() {
        let lines = render_markdown("Bring **water** and *snacks*.", 40);
        let spans = lines[0].spans().unwrap();
        let water = spans.iter().find(|s| s.text() == "water").unwrap();
        assert!(water.style().strong);
        let snacks = spans.iter().find(|s| s.text() == "snacks").unwrap();
        assert!(snacks.style().emphasis);
    }

    #[test]
    fn test_blockquote_has_bar_prefix() {
        let lines = render_markdown("> Quiet please", 40);
        assert_eq!(contents(&lines), vec!["│ Quiet please"]);
        assert_eq!(*lines[0].line_type(), LineType::BlockQuote);
    }

    #[test]
    fn test_bullet_list_markers() {
        let lines = render_markdown("- one\n- two", 40);
        assert_eq!(contents(&lines), vec!["• one", "• two"]);
        assert_eq!(*lines[0].line_type(), LineType::ListItem(1));
    }

    #[test]
    fn test_ordered_list_markers() {
        let lines = render_markdown("1. alpha\n2. beta", 40);
        assert_eq!(contents(&lines), vec!["1. alpha", "2. beta"]);
    }

    #[test]
    fn test_list_item_wraps_with_hanging_indent() {
        let lines = render_markdown("- one two three four", 10);
        assert_eq!(contents(&lines), vec!["• one two", "  three", "  four"]);
    }

    #[test]
    fn test_raw_html_is_literal_text() {
        let lines = render_markdown("Hi <script>x</script> there", 80);
        assert!(lines[0].content().contains("<script>"));
    }
}

//! Word wrapping for styled spans.

use unicode_width::UnicodeWidthStr;

use super::types::{InlineSpan, InlineStyle};

/// Terminal display width of `text`.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

pub fn spans_width(spans: &[InlineSpan]) -> usize {
    spans.iter().map(|s| display_width(s.text())).sum()
}

/// Wrap spans to `width` columns.
///
/// The first output line starts with `prefix_first`, later lines with
/// `prefix_next` (hanging indent). Leading whitespace on wrapped lines is
/// dropped. A single word wider than the line is kept whole.
pub fn wrap_spans(
    spans: &[InlineSpan],
    width: usize,
    prefix_first: &str,
    prefix_next: &str,
) -> Vec<Vec<InlineSpan>> {
    let tokens: Vec<InlineSpan> = spans.iter().flat_map(split_inline_tokens).collect();

    let mut lines: Vec<Vec<InlineSpan>> = Vec::new();
    let mut current: Vec<InlineSpan> = Vec::new();
    let mut current_len = 0usize;
    let mut has_word = false;

    let start_new_line = |prefix: &str,
                          current: &mut Vec<InlineSpan>,
                          current_len: &mut usize,
                          has_word: &mut bool| {
        current.clear();
        *current_len = display_width(prefix);
        if !prefix.is_empty() {
            current.push(InlineSpan::plain(prefix));
        }
        *has_word = false;
    };

    start_new_line(prefix_first, &mut current, &mut current_len, &mut has_word);

    for token in tokens {
        let token_len = display_width(token.text());
        let token_is_ws = token.text().chars().all(char::is_whitespace);

        if current_len + token_len > width && has_word {
            lines.push(std::mem::take(&mut current));
            start_new_line(prefix_next, &mut current, &mut current_len, &mut has_word);
        }

        if token_is_ws && !has_word {
            continue;
        }

        current_len += token_len;
        current.push(token);
        if !token_is_ws {
            has_word = true;
        }
    }

    trim_trailing_whitespace(&mut current);
    lines.push(current);
    for line in &mut lines {
        trim_trailing_whitespace(line);
    }
    lines
}

/// Split a span into alternating word and whitespace runs with the same style.
fn split_inline_tokens(span: &InlineSpan) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut ws_state: Option<bool> = None;

    for ch in span.text().chars() {
        let is_ws = ch.is_whitespace();
        match ws_state {
            Some(state) if state == is_ws => buf.push(ch),
            Some(_) => {
                out.push(InlineSpan::new(std::mem::take(&mut buf), span.style()));
                buf.push(ch);
                ws_state = Some(is_ws);
            }
            None => {
                buf.push(ch);
                ws_state = Some(is_ws);
            }
        }
    }

    if !buf.is_empty() {
        out.push(InlineSpan::new(buf, span.style()));
    }
    out
}

fn trim_trailing_whitespace(line: &mut Vec<InlineSpan>) {
    // Keep a lone prefix span such as a quote bar.
    while line.len() > 1
        && line
            .last()
            .is_some_and(|s| s.text().chars().all(char::is_whitespace))
    {
        line.pop();
    }
}

/// Pad a wrapped line on the left so it sits centered in `width` columns.
pub fn center(mut line: Vec<InlineSpan>, width: usize) -> Vec<InlineSpan> {
    let used = spans_width(&line);
    let pad = width.saturating_sub(used) / 2;
    if pad > 0 {
        line.insert(0, InlineSpan::new(" ".repeat(pad), InlineStyle::default()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Vec<InlineSpan>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.iter().map(InlineSpan::text).collect())
            .collect()
    }

    #[test]
    fn test_wrap_breaks_on_whitespace() {
        let spans = vec![InlineSpan::plain("the quick brown fox jumps")];
        let lines = wrap_spans(&spans, 10, "", "");
        assert_eq!(texts(&lines), vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_keeps_styles_across_lines() {
        let bold = InlineStyle {
            strong: true,
            ..InlineStyle::default()
        };
        let spans = vec![
            InlineSpan::plain("aaaa "),
            InlineSpan::new("bbbb cccc".to_string(), bold),
        ];
        let lines = wrap_spans(&spans, 9, "", "");
        assert_eq!(texts(&lines), vec!["aaaa bbbb", "cccc"]);
        assert!(lines[1][0].style().strong);
    }

    #[test]
    fn test_wrap_applies_hanging_prefix() {
        let spans = vec![InlineSpan::plain("one two three")];
        let lines = wrap_spans(&spans, 9, "- ", "  ");
        assert_eq!(texts(&lines), vec!["- one two", "  three"]);
    }

    #[test]
    fn test_long_word_is_not_split() {
        let spans = vec![InlineSpan::plain("supercalifragilistic")];
        let lines = wrap_spans(&spans, 5, "", "");
        assert_eq!(texts(&lines), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let spans = vec![InlineSpan::plain("日本 日本")];
        let lines = wrap_spans(&spans, 4, "", "");
        assert_eq!(texts(&lines), vec!["日本", "日本"]);
    }

    #[test]
    fn test_center_pads_left() {
        let line = center(vec![InlineSpan::plain("abc")], 9);
        assert_eq!(line[0].text(), "   ");
        assert_eq!(spans_width(&line), 6);
    }
}

use crate::entity::{Span, SpanKind, SpanList};
use crate::error::{Error, Result};

use log::{debug, trace};
use nom::{
    bytes::complete::{tag, take_till},
    sequence::{delimited, pair, preceded},
    IResult,
};

pub const BOLD_DELIMITER: &str = "**";
pub const ITALIC_DELIMITER: &str = "_";
pub const CODE_DELIMITER: &str = "`";

type Pass = fn(&[Span]) -> Result<SpanList>;

// Order matters: a span classified by an earlier pass is skipped by the later
// ones, which is what keeps `_` inside bold text from turning into italics.
const PASSES: [(&str, Pass); 5] = [
    ("bold", split_bold),
    ("italic", split_italic),
    ("code", split_code),
    ("image", split_images),
    ("link", split_links),
];

pub fn text_to_spans(text: &str) -> Result<SpanList> {
    debug!("parsing {} bytes of inline markdown", text.len());
    PASSES
        .iter()
        .try_fold(vec![Span::text(text)], |spans, (name, pass)| {
            let spans = pass(&spans)?;
            trace!("after {} pass: {:?}", name, spans);
            Ok(spans)
        })
}

fn split_bold(spans: &[Span]) -> Result<SpanList> {
    split_delimiter(spans, BOLD_DELIMITER, SpanKind::Bold)
}

fn split_italic(spans: &[Span]) -> Result<SpanList> {
    split_delimiter(spans, ITALIC_DELIMITER, SpanKind::Italic)
}

fn split_code(spans: &[Span]) -> Result<SpanList> {
    split_delimiter(spans, CODE_DELIMITER, SpanKind::Code)
}

/// Splits every text span on `delimiter`, tagging the enclosed segments as `kind`.
///
/// Empty segments are dropped but still count towards the text/`kind`
/// alternation, so `"****"` split on `**` yields nothing at all.
pub fn split_delimiter(spans: &[Span], delimiter: &str, kind: SpanKind) -> Result<SpanList> {
    let mut result = vec![];
    for span in spans {
        if !span.is_text() || delimiter.is_empty() {
            result.push(span.clone());
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() == 1 {
            result.push(span.clone());
            continue;
        }
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (index, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let kind = if index % 2 == 1 { kind } else { SpanKind::Text };
            result.push(Span::new(part, kind));
        }
    }
    Ok(result)
}

fn parse_label(i: &str) -> IResult<&str, &str> {
    delimited(tag("["), take_till(|c| c == ']'), tag("]"))(i)
}

fn parse_url(i: &str) -> IResult<&str, &str> {
    delimited(tag("("), take_till(|c| c == ')'), tag(")"))(i)
}

fn parse_link(i: &str) -> IResult<&str, (&str, &str)> {
    pair(parse_label, parse_url)(i)
}

fn parse_image(i: &str) -> IResult<&str, (&str, &str)> {
    preceded(tag("!"), parse_link)(i)
}

#[derive(Debug, PartialEq)]
struct Match<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

// nom only matches at the head of its input, so walk the string one char at a
// time and try the parser at every position that `accept` allows.
fn find_matches<'a>(
    i: &'a str,
    parser: fn(&str) -> IResult<&str, (&str, &str)>,
    accept: fn(&str, usize) -> bool,
) -> Vec<Match<'a>> {
    let mut matches = vec![];
    let mut pos = 0;
    while pos < i.len() {
        let rest = &i[pos..];
        if accept(i, pos) {
            if let Ok((remaining, (label, url))) = parser(rest) {
                let end = i.len() - remaining.len();
                matches.push(Match {
                    start: pos,
                    end,
                    label,
                    url,
                });
                pos = end;
                continue;
            }
        }
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }
    matches
}

fn find_images(i: &str) -> Vec<Match<'_>> {
    find_matches(i, parse_image, |_, _| true)
}

// `[` right after `!` belongs to an image.
fn find_links(i: &str) -> Vec<Match<'_>> {
    find_matches(i, parse_link, |i, pos| !i[..pos].ends_with('!'))
}

fn pairs(matches: Vec<Match<'_>>) -> Vec<(String, String)> {
    matches
        .into_iter()
        .map(|m| (m.label.to_string(), m.url.to_string()))
        .collect()
}

/// Returns `(alt text, url)` for every `![alt](url)` in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    pairs(find_images(text))
}

/// Returns `(anchor text, url)` for every `[anchor](url)` in `text` that is not an image.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    pairs(find_links(text))
}

fn split_matches(
    spans: &[Span],
    kind: SpanKind,
    find: fn(&str) -> Vec<Match<'_>>,
) -> Result<SpanList> {
    let mut result = vec![];
    for span in spans {
        if !span.is_text() {
            result.push(span.clone());
            continue;
        }

        let matches = find(&span.text);
        if matches.is_empty() {
            result.push(span.clone());
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            if m.start > cursor {
                result.push(Span::text(&span.text[cursor..m.start]));
            }
            result.push(Span::with_url(m.label, kind, m.url));
            cursor = m.end;
        }
        if cursor < span.text.len() {
            result.push(Span::text(&span.text[cursor..]));
        }
    }
    Ok(result)
}

pub fn split_images(spans: &[Span]) -> Result<SpanList> {
    split_matches(spans, SpanKind::Image, find_images)
}

pub fn split_links(spans: &[Span]) -> Result<SpanList> {
    split_matches(spans, SpanKind::Link, find_links)
}

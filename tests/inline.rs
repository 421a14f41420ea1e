use pretty_assertions::assert_eq;
use spanmark::parser::{extract_images, extract_links, split_delimiter, split_images, split_links};
use spanmark::{
    span_to_node, text_to_spans, translate, Error, HtmlNode, LeafNode, ParentNode, Span, SpanKind,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn non_text_spans_pass_through_every_splitter() {
    for kind in [
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ] {
        let span = Span::with_url("**a** _b_ `c` ![d](e) [f](g)", kind, "u");
        let spans = vec![span.clone()];
        assert_eq!(split_delimiter(&spans, "**", SpanKind::Bold), Ok(vec![span.clone()]));
        assert_eq!(split_delimiter(&spans, "_", SpanKind::Italic), Ok(vec![span.clone()]));
        assert_eq!(split_delimiter(&spans, "`", SpanKind::Code), Ok(vec![span.clone()]));
        assert_eq!(split_images(&spans), Ok(vec![span.clone()]));
        assert_eq!(split_links(&spans), Ok(vec![span]));
    }
}

#[test]
fn one_matched_pair_yields_at_most_three_spans() {
    let split = |s: &str| split_delimiter(&[Span::text(s)], "_", SpanKind::Italic).map(|v| v.len());
    assert_eq!(split("a _b_ c"), Ok(3));
    assert_eq!(split("_b_ c"), Ok(2));
    assert_eq!(split("a _b_"), Ok(2));
    assert_eq!(split("_b_"), Ok(1));
}

#[test]
fn odd_delimiter_count_is_a_syntax_error() {
    for text in ["`", "a ` b", "`a` `b` `", "```"] {
        assert_eq!(
            split_delimiter(&[Span::text(text)], "`", SpanKind::Code),
            Err(Error::UnmatchedDelimiter {
                delimiter: String::from("`"),
                text: String::from(text),
            })
        );
    }
}

#[test]
fn pipeline_classifies_inline_markup() {
    init_logger();
    assert_eq!(
        text_to_spans("Here is a `code block` word"),
        Ok(vec![
            Span::text("Here is a "),
            Span::new("code block", SpanKind::Code),
            Span::text(" word"),
        ])
    );
    assert_eq!(
        text_to_spans("**Bold _not italic inside_**"),
        Ok(vec![Span::new("Bold _not italic inside_", SpanKind::Bold)])
    );
    assert_eq!(
        text_to_spans("![cat](u1) and [dog](u2)"),
        Ok(vec![
            Span::with_url("cat", SpanKind::Image, "u1"),
            Span::text(" and "),
            Span::with_url("dog", SpanKind::Link, "u2"),
        ])
    );
}

#[test]
fn image_syntax_is_not_a_link() {
    assert_eq!(
        extract_images("![cat](u1)"),
        vec![(String::from("cat"), String::from("u1"))]
    );
    assert!(extract_links("![cat](u1)").is_empty());
}

#[test]
fn render_leaf_and_parent() {
    let link = LeafNode::new("a", "Click me")
        .with_attribute("href", "https://x")
        .with_attribute("target", "_blank");
    assert_eq!(
        link.to_html(),
        Ok(String::from(r#"<a href="https://x" target="_blank">Click me</a>"#))
    );

    let parent = ParentNode::new(
        "div",
        vec![
            LeafNode::new("span", "Hello").into(),
            LeafNode::new("span", "World").into(),
        ],
    );
    assert_eq!(
        parent.to_html(),
        Ok(String::from("<div><span>Hello</span><span>World</span></div>"))
    );
}

#[test]
fn render_rejects_invalid_shapes() {
    assert_eq!(
        HtmlNode::from(ParentNode::new("div", vec![])).to_html(),
        Err(Error::MissingChildren)
    );
    let valueless = LeafNode {
        tag: Some(String::from("p")),
        value: None,
        ..LeafNode::default()
    };
    assert_eq!(HtmlNode::from(valueless).to_html(), Err(Error::MissingValue));
}

#[test]
fn spans_render_inside_a_caller_supplied_parent() {
    init_logger();
    let children = text_to_spans("This is **bold** and `code` with a [link](https://boot.dev)")
        .unwrap()
        .iter()
        .map(span_to_node)
        .collect();
    assert_eq!(
        ParentNode::new("p", children).to_html(),
        Ok(String::from(
            "<p>This is <b>bold</b> and <code>code</code> with a <a href=\"https://boot.dev\">link</a></p>"
        ))
    );
    assert_eq!(
        translate("_unclosed"),
        Err(Error::UnmatchedDelimiter {
            delimiter: String::from("_"),
            text: String::from("_unclosed"),
        })
    );
}

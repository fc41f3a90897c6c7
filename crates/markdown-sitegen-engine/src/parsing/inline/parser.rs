use regex::Regex;

use super::{
    InlineError,
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link, Strong},
    types::{InlineKind, InlineNode},
};

/// Tokenizes a run of inline markdown into a flat sequence of [`InlineNode`]s.
///
/// The passes run in a fixed order and each one only looks at the `Plain`
/// nodes left behind by the previous passes:
///
/// 1. code spans (raw zone, so nothing inside backticks is styled)
/// 2. bold
/// 3. italic
/// 4. images
/// 5. links (after images, so `![..](..)` is never read as a link)
///
/// Styles do not nest. `**_x_**` yields a single bold node with text `_x_`.
///
/// # Errors
/// [`InlineError::MalformedInlineMarkup`] when a delimiter is opened and
/// never closed.
pub fn tokenize(text: &str) -> Result<Vec<InlineNode>, InlineError> {
    let nodes = vec![InlineNode::plain(text)];
    let nodes = split_delimiter(nodes, CodeSpan::TICK, InlineKind::Code)?;
    let nodes = split_delimiter(nodes, Strong::DELIM, InlineKind::Bold)?;
    let nodes = split_delimiter(nodes, Emphasis::DELIM, InlineKind::Italic)?;
    let nodes = split_images(nodes);
    Ok(split_links(nodes))
}

/// Splits every `Plain` node on `delimiter`, emitting the enclosed text as
/// `kind`. Non-plain nodes pass through untouched.
///
/// An empty pair (e.g. ` `` `) produces nothing at all.
pub fn split_delimiter(
    nodes: Vec<InlineNode>,
    delimiter: &'static str,
    kind: InlineKind,
) -> Result<Vec<InlineNode>, InlineError> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let mut cur = Cursor::new(&node.text);
        while !cur.eof() {
            let Some(open) = cur.find(delimiter) else {
                out.push(InlineNode::plain(cur.rest()));
                break;
            };

            if open > cur.pos() {
                out.push(InlineNode::plain(cur.slice(cur.pos(), open)));
            }

            let inner_start = open + delimiter.len();
            let close = match cur.find_from(inner_start, delimiter) {
                Some(close) => close,
                // A doubled delimiter closes itself. `find_from` already sees
                // the second copy, so in practice this arm never fires.
                None if cur.starts_with_at(inner_start, delimiter) => inner_start,
                None => return Err(InlineError::MalformedInlineMarkup { delimiter }),
            };

            let inner = cur.slice(inner_start, close);
            if !inner.is_empty() {
                out.push(InlineNode::new(inner, kind));
            }
            cur.seek(close + delimiter.len());
        }
    }

    Ok(out)
}

/// Splits `![alt](url)` occurrences out of `Plain` nodes into image nodes.
pub fn split_images(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split_pattern(nodes, Image::pattern(), |_, _| true, |caps| {
        InlineNode::image(&caps[2])
    })
}

/// Splits `[anchor](url)` occurrences out of `Plain` nodes into link nodes.
///
/// A match whose `[` directly follows `!` is skipped; the scan resumes one
/// byte later, as a negative look-behind would.
pub fn split_links(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split_pattern(
        nodes,
        Link::pattern(),
        |text, start| start == 0 || text.as_bytes()[start - 1] != Link::IMAGE_BANG,
        |caps| InlineNode::link(&caps[1], &caps[2]),
    )
}

fn split_pattern(
    nodes: Vec<InlineNode>,
    pattern: &Regex,
    accept: impl Fn(&str, usize) -> bool,
    build: impl Fn(&regex::Captures<'_>) -> InlineNode,
) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let text = node.text.as_str();
        let mut emitted = 0;
        let mut search = 0;

        while let Some(caps) = pattern.captures_at(text, search) {
            let Some(whole) = caps.get(0) else { break };
            if !accept(text, whole.start()) {
                // `[` is ASCII, so the next byte is a char boundary.
                search = whole.start() + 1;
                continue;
            }

            if whole.start() > emitted {
                out.push(InlineNode::plain(&text[emitted..whole.start()]));
            }
            out.push(build(&caps));
            emitted = whole.end();
            search = whole.end();
        }

        if emitted < text.len() {
            out.push(InlineNode::plain(&text[emitted..]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(t: &str) -> InlineNode {
        InlineNode::plain(t)
    }

    fn styled(t: &str, kind: InlineKind) -> InlineNode {
        InlineNode::new(t, kind)
    }

    #[test]
    fn plain_text_is_a_single_node() {
        let text = "just some words, nothing fancy.";
        assert_eq!(tokenize(text).unwrap(), vec![plain(text)]);
    }

    #[test]
    fn empty_text_yields_no_nodes() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[rstest]
    #[case("`", InlineKind::Code)]
    #[case("**", InlineKind::Bold)]
    #[case("_", InlineKind::Italic)]
    fn delimiter_split_extracts_styled_text(
        #[case] delimiter: &'static str,
        #[case] kind: InlineKind,
    ) {
        let text = format!("a {delimiter}b{delimiter} c");
        let nodes = split_delimiter(vec![plain(&text)], delimiter, kind).unwrap();
        assert_eq!(nodes, vec![plain("a "), styled("b", kind), plain(" c")]);
    }

    #[test]
    fn delimiter_split_handles_several_pairs() {
        let nodes = split_delimiter(
            vec![plain("**a** and **b**")],
            Strong::DELIM,
            InlineKind::Bold,
        )
        .unwrap();
        assert_eq!(
            nodes,
            vec![
                styled("a", InlineKind::Bold),
                plain(" and "),
                styled("b", InlineKind::Bold),
            ]
        );
    }

    #[test]
    fn delimiter_split_passes_non_plain_nodes_through() {
        let input = vec![styled("x_y_z", InlineKind::Code), plain("_it_")];
        let nodes = split_delimiter(input, Emphasis::DELIM, InlineKind::Italic).unwrap();
        assert_eq!(
            nodes,
            vec![styled("x_y_z", InlineKind::Code), styled("it", InlineKind::Italic)]
        );
    }

    #[test]
    fn doubled_delimiter_collapses_to_nothing() {
        assert_eq!(
            tokenize("Start `` end").unwrap(),
            vec![plain("Start "), plain(" end")]
        );
    }

    #[rstest]
    #[case("Start **bold", "**")]
    #[case("an `open code span", "`")]
    #[case("snake_case", "_")]
    fn unterminated_delimiter_is_an_error(#[case] text: &str, #[case] delimiter: &'static str) {
        let err = tokenize(text).unwrap_err();
        assert_eq!(err, InlineError::MalformedInlineMarkup { delimiter });
    }

    #[test]
    fn code_span_suppresses_other_markup() {
        assert_eq!(
            tokenize("run `**not bold** [x](y)` now").unwrap(),
            vec![
                plain("run "),
                styled("**not bold** [x](y)", InlineKind::Code),
                plain(" now"),
            ]
        );
    }

    #[test]
    fn styles_do_not_nest() {
        assert_eq!(
            tokenize("**_x_**").unwrap(),
            vec![styled("_x_", InlineKind::Bold)]
        );
    }

    #[test]
    fn full_pipeline_mixes_every_kind() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a \
                    [link](https://boot.dev)";
        assert_eq!(
            tokenize(text).unwrap(),
            vec![
                plain("This is "),
                styled("text", InlineKind::Bold),
                plain(" with an "),
                styled("italic", InlineKind::Italic),
                plain(" word and a "),
                styled("code block", InlineKind::Code),
                plain(" and an "),
                InlineNode::image("https://i.imgur.com/fJRm4Vk.jpeg"),
                plain(" and a "),
                InlineNode::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn images_are_not_read_as_links() {
        assert_eq!(
            tokenize("![a](/a.png) then [b](/b)").unwrap(),
            vec![
                InlineNode::image("/a.png"),
                plain(" then "),
                InlineNode::link("b", "/b"),
            ]
        );
    }

    #[test]
    fn link_split_skips_bang_prefixed_brackets() {
        // Images are normally gone before links run; feed one in directly.
        let nodes = split_links(vec![plain("x ![a](b) [c](d)")]);
        assert_eq!(
            nodes,
            vec![plain("x ![a](b) "), InlineNode::link("c", "d")]
        );
    }

    #[test]
    fn link_at_start_of_text() {
        assert_eq!(
            split_links(vec![plain("[home](/) end")]),
            vec![InlineNode::link("home", "/"), plain(" end")]
        );
    }

    #[test]
    fn consecutive_images() {
        assert_eq!(
            split_images(vec![plain("![a](1.png)![b](2.png)")]),
            vec![InlineNode::image("1.png"), InlineNode::image("2.png")]
        );
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        assert_eq!(
            tokenize("héllo **wörld** ✓").unwrap(),
            vec![
                plain("héllo "),
                styled("wörld", InlineKind::Bold),
                plain(" ✓"),
            ]
        );
    }
}

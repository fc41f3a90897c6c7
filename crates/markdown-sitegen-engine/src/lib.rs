//! Markdown to HTML conversion.
//!
//! A document is split into blank-line separated blocks, each block is
//! classified and turned into one HTML element, and the elements are wrapped
//! in a root `<div>`:
//!
//! ```
//! use markdown_sitegen_engine::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nSome **bold** text.").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>");
//! ```

pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{ConvertError, Error};
pub use html::{HtmlNode, Props, Render, RenderError, RootNode, render};
pub use parsing::{
    blocks::BlockKind,
    extract_title,
    inline::{InlineError, InlineKind, InlineNode, tokenize},
    markdown_to_html_node,
    title::TitleError,
};
pub use site::{SiteError, build_site, generate_page, generate_pages_recursive, render_page};

/// Converts a markdown document and renders it to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    Ok(markdown_to_html_node(markdown)?.render()?)
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_renders_empty_div() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn whitespace_document_has_no_blocks() {
        let root = markdown_to_html_node("  \n\n\n \t \n").unwrap();
        assert!(root.children().is_empty());
    }

    #[test]
    fn unterminated_bold_aborts_conversion() {
        let err = markdown_to_html("Start **bold").unwrap_err();
        assert!(matches!(
            err,
            Error::Convert(ConvertError::Block {
                index: 0,
                kind: BlockKind::Paragraph,
                source: InlineError::MalformedInlineMarkup { delimiter: "**" },
                ..
            })
        ));
    }

    #[test]
    fn empty_list_item_fails_at_render_time() {
        // `"- "` inside a block tokenizes to nothing, leaving an empty <li>.
        let err = markdown_to_html("- a\n- \n- c").unwrap_err();
        assert_eq!(
            err,
            Error::Render(RenderError::MissingChildren { tag: "li".into() })
        );
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_snapshot!(markdown_to_html(md).unwrap(), @r"
        <div><p>This is <b>bolded</b> paragraph
        text in a p
        tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>
        ");
    }

    #[test]
    fn codeblock() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><pre><code>\nThis is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn mixed_document() {
        let md = "\
# Heading

> A quote with **emphasis**
> on two lines

- first
- second

1. one
2. two

![alt](/img.png) and [a link](https://example.com)";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            concat!(
                "<div>",
                "<h1>Heading</h1>",
                "<blockquote>A quote with <b>emphasis</b>\non two lines</blockquote>",
                "<ul><li>first</li><li>second</li></ul>",
                "<ol><li>one</li><li>two</li></ol>",
                r#"<p><img src="/img.png" alt=""> </img> and <a href="https://example.com">a link</a></p>"#,
                "</div>",
            )
        );
    }
}

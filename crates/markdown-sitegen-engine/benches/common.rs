// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\n\n- Bullet point\n- Another [item](/item)\n\n1. First\n2. Second\n\n> Quoted **text**\n> over two lines\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n![logo](/logo.png) and more text\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(spans: usize) -> String {
    let mut content = String::new();
    for i in 0..spans {
        content.push_str(&format!(
            "word {i} **bold {i}** then _italic_ and `code` with [link {i}](/page/{i}) "
        ));
    }
    content
}

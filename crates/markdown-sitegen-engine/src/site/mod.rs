//! # Site Generation
//!
//! Turns a directory of markdown pages into HTML pages using a template, and
//! copies static assets alongside them.
//!
//! `render_page` is pure; everything else here touches the filesystem.

use std::path::{Path, PathBuf};

use markdown_sitegen_config::SiteConfig;
use relative_path::RelativePathBuf;
use thiserror::Error;

use crate::{
    error::Error as ConvertPipelineError,
    html::Render,
    io::{self, IoError},
    parsing::{extract_title, markdown_to_html_node},
};

/// Template placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Template placeholder replaced with the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Content directory not found: {0}")]
    ContentDirNotFound(PathBuf),
    #[error("Failed to generate page from {path}")]
    Page {
        path: PathBuf,
        #[source]
        source: ConvertPipelineError,
    },
    #[error("Path {0} is not inside the content directory")]
    OutsideContentDir(PathBuf),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Renders a full HTML page from markdown and a template.
///
/// Both placeholders are replaced everywhere they appear. Root-relative
/// `href="/` and `src="/` references in the finished page (template and body
/// alike) are then re-rooted under `base_path`.
pub fn render_page(
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String, ConvertPipelineError> {
    let content = markdown_to_html_node(markdown)?.render()?;
    let title = extract_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    Ok(rewrite_root_links(&page, base_path))
}

/// Prefixes root-relative `href`/`src` attribute values with `base_path`.
///
/// `base_path` gets a trailing `/` if it lacks one, so `"/blog"` and
/// `"/blog/"` behave the same.
pub fn rewrite_root_links(page: &str, base_path: &str) -> String {
    let base = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };

    page.replace(r#"href="/"#, &format!(r#"href="{base}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base}"#))
}

/// Generates one page from `from` into `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = io::read_file(from)?;
    let template = io::read_file(template_path)?;

    let page = render_page(&markdown, &template, base_path).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;

    io::write_file(dest, &page)?;
    log::info!("Wrote {}", dest.display());
    Ok(())
}

/// Generates an `.html` page for every markdown file under `content_dir`,
/// mirroring the directory layout under `dest_dir`.
///
/// Stops at the first page that fails. Returns the written paths.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::ContentDirNotFound(content_dir.to_path_buf()));
    }

    let mut written = Vec::new();
    for source in io::scan_markdown_files(content_dir)? {
        let page = page_path(content_dir, &source)?;
        let dest = page.to_path(dest_dir);
        generate_page(&source, template_path, &dest, base_path)?;
        written.push(dest);
    }

    Ok(written)
}

/// `content/blog/post.md` -> `blog/post.html`.
fn page_path(content_dir: &Path, source: &Path) -> Result<RelativePathBuf, SiteError> {
    let outside = || SiteError::OutsideContentDir(source.to_path_buf());
    let relative = source.strip_prefix(content_dir).map_err(|_| outside())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| outside())?;
    Ok(relative.with_extension("html"))
}

/// Copies static assets and generates every page, as configured.
///
/// A missing static directory is skipped; a missing content directory is an
/// error.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PathBuf>, SiteError> {
    if config.static_dir.is_dir() {
        let copied = io::copy_dir_recursive(&config.static_dir, &config.output_dir)?;
        log::info!(
            "Copied {} static file(s) from {}",
            copied.len(),
            config.static_dir.display()
        );
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            config.static_dir.display()
        );
    }

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )?;
    log::info!("Generated {} page(s)", pages.len());
    Ok(pages)
}

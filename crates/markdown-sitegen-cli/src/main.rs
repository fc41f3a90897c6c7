mod args;

use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{build_site, extract_title, markdown_to_html};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use args::{BuildArgs, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Build { build_args } => build(&build_args),
        Commands::Render { file } => {
            let markdown = read_input(file.as_deref())?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("Failed to convert {}", describe(file.as_deref())))?;
            println!("{html}");
            Ok(())
        }
        Commands::Title { file } => {
            let markdown = read_input(file.as_deref())?;
            let title = extract_title(&markdown)
                .with_context(|| format!("No title in {}", describe(file.as_deref())))?;
            println!("{title}");
            Ok(())
        }
    }
}

fn build(args: &BuildArgs) -> Result<()> {
    let config = resolve_config(args)?;
    log::debug!("Resolved config: {config:?}");

    let pages = build_site(&config).context("Site build failed")?;
    log::info!(
        "Built {} page(s) into {}",
        pages.len(),
        config.output_dir.display()
    );
    Ok(())
}

/// Config file values (or defaults when there is no file), then CLI overrides.
fn resolve_config(args: &BuildArgs) -> Result<SiteConfig> {
    let config_path = args.config.clone().unwrap_or_else(SiteConfig::config_path);
    let loaded = SiteConfig::load_from_path(&config_path)?;

    let mut config = match loaded {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None if args.config.is_some() => {
            anyhow::bail!("Config file not found: {}", config_path.display())
        }
        None => SiteConfig::default(),
    };

    apply_override(&mut config.content_dir, &args.content);
    apply_override(&mut config.static_dir, &args.static_dir);
    apply_override(&mut config.output_dir, &args.output);
    apply_override(&mut config.template_path, &args.template);
    if let Some(base_path) = &args.base_path {
        config.base_path = base_path.clone();
    }

    Ok(config)
}

fn apply_override(target: &mut PathBuf, value: &Option<PathBuf>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn describe(file: Option<&Path>) -> String {
    file.map_or_else(|| "stdin".to_string(), |path| path.display().to_string())
}

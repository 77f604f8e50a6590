// Category CLI: CSS Inliner
//
// Reads an HTML document, inlines its stylesheets and writes the result to
// stdout. Diagnostics go to the log as warnings.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_css_inliner::{Document, FilesystemProvider, InlinerConfig, ProviderList};

/// Inline the stylesheets of an HTML document into style attributes.
#[derive(Parser, Debug)]
#[command(name = "kodegen-css-inliner", version, about)]
struct Args {
    /// HTML document to inline.
    input: PathBuf,

    /// Extra stylesheet applied after the document's own styles. Repeatable.
    #[arg(long = "css", value_name = "FILE")]
    css_files: Vec<PathBuf>,

    /// Directory linked stylesheets are resolved against. Defaults to the
    /// directory of the input document.
    #[arg(long, value_name = "DIR")]
    asset_root: Option<PathBuf>,

    /// JSON inliner configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Leave elements with an unparseable style attribute untouched.
    #[arg(long)]
    strict: bool,
}

fn load_config(path: Option<&PathBuf>, strict: bool) -> Result<InlinerConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config: InlinerConfig = serde_json::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            revalidate(config)?
        }
        None => InlinerConfig::default(),
    };
    if strict {
        config.set_strict_inline_styles(true);
    }
    Ok(config)
}

/// Deserialized configs skip the builder, so run its checks again.
fn revalidate(config: InlinerConfig) -> Result<InlinerConfig> {
    let mut builder = InlinerConfig::builder()
        .strict_inline_styles(config.strict_inline_styles())
        .ignore_attribute(config.ignore_attribute())
        .improve_markup(config.improve_markup());
    if let Some(options) = config.url_options() {
        builder = builder.url_options(options.clone());
    }
    builder.build()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let input = &args.input;

    let html = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut document = Document::new(html);
    document.set_config(load_config(args.config.as_ref(), args.strict)?);

    let asset_root = match &args.asset_root {
        Some(root) => root.clone(),
        None => input
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    document.set_asset_providers(ProviderList::wrap(FilesystemProvider::new(asset_root)));

    for css_file in &args.css_files {
        let css = fs::read_to_string(css_file)
            .with_context(|| format!("Failed to read {}", css_file.display()))?;
        document.add_css(&css);
    }

    let result = document
        .transform()
        .with_context(|| format!("Failed to inline {}", input.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(result.html.as_bytes())?;
    stdout.flush()?;

    if result.has_diagnostics() {
        log::warn!(
            "{} rules or elements were skipped while inlining {}",
            result.diagnostics.len(),
            input.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_options() {
        let parsed = Args::try_parse_from([
            "kodegen-css-inliner",
            "mail.html",
            "--css",
            "a.css",
            "--css",
            "b.css",
            "--asset-root",
            "public",
            "--strict",
        ])
        .unwrap();
        assert_eq!(parsed.input, PathBuf::from("mail.html"));
        assert_eq!(parsed.css_files, vec![PathBuf::from("a.css"), PathBuf::from("b.css")]);
        assert_eq!(parsed.asset_root, Some(PathBuf::from("public")));
        assert_eq!(parsed.config, None);
        assert!(parsed.strict);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Args::try_parse_from(["kodegen-css-inliner"]).is_err());
        assert!(Args::try_parse_from(["kodegen-css-inliner", "a.html", "--css"]).is_err());
        assert!(Args::try_parse_from(["kodegen-css-inliner", "a.html", "b.html"]).is_err());
        assert!(Args::try_parse_from(["kodegen-css-inliner", "a.html", "--verbose"]).is_err());
    }

    #[test]
    fn test_help_is_a_display_request() {
        let err = Args::try_parse_from(["kodegen-css-inliner", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

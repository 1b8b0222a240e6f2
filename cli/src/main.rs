//! unwiki CLI - Wikipedia article extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;

use unwiki::{extract::extract, render, ArticlePage, Error, JsonFormat};

const USER_AGENT: &str = concat!("unwiki/", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(name = "unwiki")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract a Wikipedia article to Markdown and JSON", long_about = None)]
struct Cli {
    /// Article title to fetch (multiple words are joined with spaces)
    #[arg(value_name = "KEYWORD", required = true)]
    keyword: Vec<String>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Wikipedia language edition
    #[arg(long, value_name = "CODE", default_value = "en")]
    lang: String,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let keyword = cli.keyword.join(" ");

    if let Err(e) = run(&keyword, &cli.lang, &cli.output) {
        log::error!("error scraping '{}': {}", keyword, e);
        std::process::exit(1);
    }
}

fn run(keyword: &str, lang: &str, output: &Path) -> unwiki::Result<()> {
    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Fetching article...");
    let html = fetch_article(keyword, lang)?;
    pb.inc(1);

    pb.set_message("Extracting content...");
    let page = ArticlePage::parse(&html);
    let doc = extract(&page);
    if doc.is_empty() {
        log::warn!("no article content found for '{}'", keyword);
    }
    pb.inc(1);

    // Both renderings happen before either file is written.
    pb.set_message("Rendering...");
    let json = render::to_json(&doc, JsonFormat::Pretty)?;
    let markdown = render::to_markdown(&doc);
    pb.inc(1);

    pb.set_message("Writing output...");
    let (json_path, md_path) = write_outputs(output, keyword, &json, &markdown)?;
    pb.inc(1);

    pb.finish_with_message("Done!");
    log::info!("scraping completed for '{}'", keyword);

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), json_path.display());
    println!("  {} {}", "└─".dimmed(), md_path.display());
    println!(
        "\n{} {} sections, {} links, {} tables",
        "Extracted:".bold(),
        doc.sections.len(),
        doc.links.len(),
        doc.tables.len()
    );

    Ok(())
}

/// Fetch the article HTML for a keyword from the given language edition.
fn fetch_article(keyword: &str, lang: &str) -> unwiki::Result<String> {
    let base = format!("https://{lang}.wikipedia.org/wiki/");
    let url = Url::parse(&base)
        .and_then(|base| base.join(keyword))
        .map_err(|e| Error::Fetch(format!("invalid article URL: {e}")))?;

    log::debug!("fetching {url}");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Fetch(e.to_string()))?;

    client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| Error::Fetch(e.to_string()))
}

/// Derive the output file stem: spaces become underscores, nothing else is
/// sanitized.
fn safe_stem(keyword: &str) -> String {
    keyword.replace(' ', "_")
}

fn write_outputs(
    dir: &Path,
    keyword: &str,
    json: &str,
    markdown: &str,
) -> unwiki::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;

    let stem = safe_stem(keyword);
    let json_path = dir.join(format!("{stem}.json"));
    let md_path = dir.join(format!("{stem}.md"));

    fs::write(&json_path, json)?;
    fs::write(&md_path, markdown)?;

    Ok((json_path, md_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_replaces_spaces() {
        assert_eq!(safe_stem("Test Article"), "Test_Article");
        assert_eq!(safe_stem("Rust"), "Rust");
    }

    #[test]
    fn test_write_outputs_produces_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let (json_path, md_path) =
            write_outputs(dir.path(), "Test Article", "{}", "# Test\n").unwrap();

        assert!(json_path.ends_with("Test_Article.json"));
        assert!(md_path.ends_with("Test_Article.md"));
        assert_eq!(fs::read_to_string(&json_path).unwrap(), "{}");
        assert_eq!(fs::read_to_string(&md_path).unwrap(), "# Test\n");
    }
}

//! guidemark - render markdown guides to HTML with a synchronized TOC

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use guidemark::SourceDocument;

#[derive(Parser)]
#[command(name = "guidemark")]
#[command(version, about = "Render markdown guides to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    guidemark guide.md guide.html    Render a guide to an HTML fragment
    guidemark -i guide.md            Show front-matter metadata and TOC
    guidemark --json guide.md        Emit {html, toc} as JSON")]
struct Cli {
    /// Input markdown file with YAML front-matter
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output HTML file
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["info", "json"])]
    output: Option<String>,

    /// Show front-matter metadata and TOC without writing output
    #[arg(short, long)]
    info: bool,

    /// Print the rendered document as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.info {
        show_info(&cli.input)
    } else if cli.json {
        emit_json(&cli.input)
    } else {
        let output = cli.output.expect("output required");
        convert(&cli.input, &output, cli.quiet)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(path: &str) -> Result<SourceDocument, String> {
    let raw = fs::read(path).map_err(|e| format!("{path}: {e}"))?;
    let raw = String::from_utf8_lossy(&raw);
    let slug = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    SourceDocument::parse(slug, &raw).map_err(|e| format!("{path}: {e}"))
}

fn show_info(path: &str) -> Result<(), String> {
    let doc = load(path)?;
    let page = doc.render();
    let meta = &doc.frontmatter;

    println!("File: {path}");
    println!("Title: {}", meta.title);
    if !meta.author.is_empty() {
        println!("Author: {}", meta.author);
    }
    if !meta.date_published.is_empty() {
        println!("Published: {}", meta.date_published);
    }
    if !meta.description.is_empty() {
        let desc = meta.description.trim();
        if desc.len() > 200 {
            println!("Description: {}...", &desc[..200]);
        } else {
            println!("Description: {desc}");
        }
    }

    if meta.toc.is_some() {
        println!("TOC: {} entries (front-matter override)", page.toc.len());
        if doc.toc_is_stale() {
            println!("Warning: TOC override no longer matches body headings");
        }
    } else {
        println!("TOC: {} entries", page.toc.len());
    }
    for entry in &page.toc {
        let indent = if entry.level == 3 { "    " } else { "  " };
        println!("{indent}#{} {}", entry.id, entry.text);
    }

    Ok(())
}

fn emit_json(path: &str) -> Result<(), String> {
    let doc = load(path)?;
    let page = doc.render();

    let value = serde_json::json!({
        "slug": doc.slug,
        "html": page.html,
        "toc": page.toc,
    });
    let pretty = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
    println!("{pretty}");

    Ok(())
}

fn convert(input: &str, output: &str, quiet: bool) -> Result<(), String> {
    let doc = load(input)?;
    let page = doc.render();

    fs::write(output, &page.html).map_err(|e| format!("{output}: {e}"))?;
    if !quiet {
        println!("{input} -> {output} ({} headings)", page.toc.len());
    }

    Ok(())
}

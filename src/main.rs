//! # pagegrid CLI
//!
//! Usage:
//!   pagegrid site.json -o layout.json
//!   echo '{ ... }' | pagegrid --breakpoint mobile
//!   pagegrid --example > site.json

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use pagegrid::model::{Document, Page};
use pagegrid::{Breakpoint, GridLayout, LayoutConfig, LayoutEngine, PageGridError};

#[derive(Parser, Debug)]
#[command(
    name = "pagegrid",
    version,
    about = "Compute responsive grid layouts for page-builder documents"
)]
struct Cli {
    /// Document JSON. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write the layout here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only this breakpoint (desktop, tablet or mobile).
    #[arg(short, long)]
    breakpoint: Option<String>,

    /// Only the page with this slug.
    #[arg(long)]
    slug: Option<String>,

    /// Layout config JSON (reference widths, row tolerance).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Print an example document and exit.
    #[arg(long)]
    example: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.example {
        print!("{}", example_document_json());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PageGridError> {
    // Parse the breakpoint before touching any input.
    let breakpoint = cli
        .breakpoint
        .as_deref()
        .map(str::parse::<Breakpoint>)
        .transpose()?;

    let config = match &cli.config {
        Some(path) => LayoutConfig::from_json(&read_file(path)?)?,
        None => LayoutConfig::default(),
    };
    let engine = LayoutEngine::with_config(config)?;

    let input = match &cli.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| PageGridError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        }
    };
    let document: Document = serde_json::from_str(&input)?;

    let pages: Vec<&Page> = match &cli.slug {
        Some(slug) => {
            let page = document.page_by_slug(slug).ok_or_else(|| {
                PageGridError::InvalidArgument(format!("no page with slug '{}'", slug))
            })?;
            vec![page]
        }
        None => document.pages.iter().collect(),
    };

    let json = match breakpoint {
        Some(bp) => {
            // slug -> section id -> grid
            let by_page: BTreeMap<&str, BTreeMap<&str, GridLayout>> = pages
                .iter()
                .map(|page| {
                    let sections = page
                        .sections
                        .iter()
                        .map(|s| (s.id.as_str(), engine.layout_section(s, bp).grid))
                        .collect();
                    (page.slug.as_str(), sections)
                })
                .collect();
            to_json(&by_page, cli.pretty)?
        }
        None => {
            let layouts: Vec<_> = pages.iter().map(|p| engine.layout_page(p)).collect();
            to_json(&layouts, cli.pretty)?
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &json).map_err(|source| PageGridError::Io {
                path: path.clone(),
                source,
            })?;
            eprintln!("✓ Written {} bytes to {}", json.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, PageGridError> {
    fs::read_to_string(path).map_err(|source| PageGridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, PageGridError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn example_document_json() -> &'static str {
    r##"{
  "pages": [
    {
      "id": "page-home",
      "name": "Home",
      "slug": "home",
      "sections": [
        {
          "id": "hero",
          "background": { "type": "color", "value": "#0f172a" },
          "elements": [
            {
              "id": "headline",
              "type": "text",
              "content": "Build pages without code",
              "style": {
                "left": "5%", "top": "10%", "width": "50%", "height": "15%",
                "color": "#ffffff"
              }
            },
            {
              "id": "hero-image",
              "type": "image",
              "src": "https://example.com/hero.png",
              "alt": "Product screenshot",
              "style": { "left": "60%", "top": "10%", "width": "35%", "height": "60%" }
            },
            {
              "id": "cta",
              "type": "button",
              "content": "Get started",
              "style": { "left": "5%", "top": "35%", "width": "20%", "height": "8%" }
            }
          ]
        },
        {
          "id": "demo",
          "background": { "type": "image", "value": "https://example.com/bg.jpg" },
          "elements": [
            {
              "id": "demo-video",
              "type": "video",
              "src": "https://example.com/demo.mp4",
              "style": { "left": "10%", "top": "5%", "width": "80%", "height": "70%" }
            },
            {
              "id": "caption",
              "type": "text",
              "content": "See it in action",
              "style": { "left": "10%", "top": "80%", "width": "80%", "height": "10%" }
            }
          ]
        }
      ]
    }
  ]
}
"##
}

//! The `marko` command line: read a Markdown document, convert it, write
//! the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use marko::{AstRenderer, Markdown, RendererKind};

#[derive(Parser, Debug)]
#[command(
    name = "marko",
    about = "Convert Markdown documents to HTML, a serialized AST, or normalized Markdown.",
    disable_version_flag = true
)]
struct Cli {
    /// Print version information.
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Parser element set: `commonmark` or `gfm`.
    #[arg(short, long, default_value = "commonmark")]
    parser: String,

    /// Output renderer: `html`, `ast`, or `markdown`.
    #[arg(short, long, default_value = "html")]
    renderer: String,

    /// Extensions to register, by logical name. May be repeated.
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The document to convert; stdin when omitted.
    document: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("marko: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.version {
        println!("marko {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let text = match &cli.document {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let mut markdown = match cli.parser.as_str() {
        "commonmark" => Markdown::new(),
        "gfm" => Markdown::with_extensions([marko::load("gfm")?]),
        other => bail!("unknown parser `{other}` (expected `commonmark` or `gfm`)"),
    };
    for name in &cli.extensions {
        markdown.use_extension(marko::load(name)?);
    }

    let Some(renderer) = RendererKind::from_name(&cli.renderer) else {
        bail!("unknown renderer `{}` (expected `html`, `ast` or `markdown`)", cli.renderer);
    };

    debug!("converting {} bytes with the {} renderer", text.len(), cli.renderer);
    let doc = markdown.parse(&text);
    let output = match renderer {
        RendererKind::Html => markdown.render_html(&doc)?,
        RendererKind::Markdown => markdown.render_markdown(&doc)?,
        RendererKind::Ast => {
            // The AST renderer is non-delegating; extension overrides never
            // apply to it.
            let mut serialized = AstRenderer::new().render_string(&doc)?;
            serialized.push('\n');
            serialized
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("writing stdout")?,
    }
    Ok(())
}

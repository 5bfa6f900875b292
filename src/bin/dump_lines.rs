use std::path::PathBuf;

use clap::Parser;
use kondate_extract::render::render_lines;
use kondate_extract::segment::day_marker;
use kondate_extract::{PdfExtract, Pdftotext, Renderer};

/// Prints the rendered lines of a menu PDF, flagging the ones that open a day.
#[derive(Parser)]
#[command(name = "dump_lines")]
struct Args {
    /// Source PDF path
    pdf: PathBuf,

    /// Use the in-process renderer instead of pdftotext
    #[arg(long)]
    pdf_extract: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();
    let renderer: Box<dyn Renderer> = if args.pdf_extract {
        Box::new(PdfExtract)
    } else {
        Box::new(Pdftotext::default())
    };

    let lines = render_lines(renderer.as_ref(), &args.pdf)?;

    println!("=== {} lines via {} ===", lines.len(), renderer.name());
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match day_marker(line) {
            Some(day) => println!("{i:>4} [day {day:>2}] {line:?}"),
            None => println!("{i:>4}           {line:?}"),
        }
    }

    Ok(())
}

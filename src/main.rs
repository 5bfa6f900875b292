use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use kondate_extract::render::{self, build_client};
use kondate_extract::{
    MenuDocument, PdfExtract, Pdftotext, Renderer, Source, Vocabulary, extract_records,
    merge_menu_file, record::month_label,
};
use tracing::info;

const TEXT_FILE: &str = "_menu_extract.txt";
const DOWNLOAD_FILE: &str = "_menu_source.pdf";

#[derive(Parser)]
#[command(name = "kondate-extract")]
#[command(about = "Semi-automatically build school lunch menu JSON from a monthly PDF", long_about = None)]
struct Cli {
    /// Source PDF path or http(s) URL
    #[arg(long)]
    pdf: String,

    /// Target month, e.g. 2025-02
    #[arg(long)]
    month: String,

    /// Menu course, e.g. A
    #[arg(long)]
    course: String,

    /// Title shown on the menu page
    #[arg(long)]
    title: String,

    /// Link to the PDF as published alongside the data
    #[arg(long, default_value = "menu-source.pdf")]
    pdf_link: String,

    /// Menu collection to update
    #[arg(long, default_value = "data/menu-data.json")]
    out: PathBuf,

    /// Text rendering backend
    #[arg(long, value_enum, default_value_t = RendererKind::Pdftotext)]
    renderer: RendererKind,
}

#[derive(Clone, Copy, ValueEnum)]
enum RendererKind {
    Pdftotext,
    PdfExtract,
}

impl RendererKind {
    fn build(self) -> Box<dyn Renderer> {
        match self {
            RendererKind::Pdftotext => Box::new(Pdftotext::default()),
            RendererKind::PdfExtract => Box::new(PdfExtract),
        }
    }
}

async fn resolve_source(source: Source, work_dir: &Path) -> anyhow::Result<PathBuf> {
    match source {
        Source::Local(path) => {
            let path = std::path::absolute(&path)?;
            std::fs::metadata(&path)
                .with_context(|| format!("cannot read source document {}", path.display()))?;
            Ok(path)
        }
        Source::Remote(url) => {
            let dest = work_dir.join(DOWNLOAD_FILE);
            let client = build_client()?;
            render::download(&client, &url, &dest).await?;
            Ok(dest)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Fail on a bad period before doing any rendering work.
    month_label(&cli.month)?;

    let out = std::path::absolute(&cli.out)?;
    let work_dir = out
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&work_dir)?;

    let source = resolve_source(Source::parse(&cli.pdf), &work_dir).await?;
    let text_path = work_dir.join(TEXT_FILE);
    let renderer = cli.renderer;

    // Rendering spawns a process or parses the PDF in-process; keep it off the
    // async workers.
    let items = tokio::task::spawn_blocking(move || {
        extract_records(
            renderer.build().as_ref(),
            &source,
            &text_path,
            &Vocabulary::STANDARD,
        )
    })
    .await??;

    let menu = MenuDocument::new(&cli.month, &cli.course, &cli.title, &cli.pdf_link, items)?;
    info!("merging {} ({} days) into {}", menu.id, menu.items.len(), out.display());
    merge_menu_file(&out, &menu)?;

    println!("Updated: {}", out.display());
    println!("Note: dishes/staple are semi-automatic. Please review generated entries.");
    Ok(())
}

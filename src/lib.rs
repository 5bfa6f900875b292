pub mod error;
pub mod extract;
pub mod normalize;
pub mod record;
pub mod render;
pub mod segment;
pub mod store;
pub mod vocabulary;

use std::path::Path;

use tracing::info;

pub use error::{Error, Result};
pub use record::{DayRecord, MenuDocument, build_records};
pub use render::{PdfExtract, Pdftotext, Renderer, Source};
pub use store::merge_menu_file;
pub use vocabulary::Vocabulary;

/// Renders `source` to `text_path` and extracts the day records from it.
/// The rendered text is left in place for review.
pub fn extract_records(
    renderer: &dyn Renderer,
    source: &Path,
    text_path: &Path,
    vocab: &Vocabulary,
) -> Result<Vec<DayRecord>> {
    info!("rendering {} with {}", source.display(), renderer.name());
    renderer.render(source, text_path)?;
    let lines = render::read_lines(text_path)?;
    let records = build_records(&lines, vocab);
    info!("extracted {} day records from {} lines", records.len(), lines.len());
    Ok(records)
}

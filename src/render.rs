//! Turning a source document into the line sequence the segmenter reads.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Produces a layout-preserving plain-text rendering of `source` at `dest`.
pub trait Renderer {
    fn render(&self, source: &Path, dest: &Path) -> Result<()>;

    /// Backend name for diagnostics.
    fn name(&self) -> &str;
}

/// Poppler's `pdftotext -layout`.
#[derive(Debug, Clone)]
pub struct Pdftotext {
    pub program: String,
}

impl Default for Pdftotext {
    fn default() -> Self {
        Self {
            program: "pdftotext".to_string(),
        }
    }
}

impl Renderer for Pdftotext {
    fn render(&self, source: &Path, dest: &Path) -> Result<()> {
        debug!("running {} -layout {} {}", self.program, source.display(), dest.display());
        let status = Command::new(&self.program)
            .arg("-layout")
            .arg(source)
            .arg(dest)
            .status()
            .map_err(|err| Error::RendererUnavailable {
                program: self.program.clone(),
                source: err,
            })?;
        if !status.success() {
            return Err(Error::RenderFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// In-process rendering through the `pdf-extract` crate. Column alignment is
/// looser than poppler's, so day blocks may pick up more neighbouring text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtract;

impl Renderer for PdfExtract {
    fn render(&self, source: &Path, dest: &Path) -> Result<()> {
        let bytes = fs::read(source)?;
        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|err| Error::PdfExtract {
            path: source.to_path_buf(),
            message: err.to_string(),
        })?;
        fs::write(dest, text)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

/// Reads a rendered text file as lines. Invalid UTF-8 bytes are dropped, and
/// page breaks end a line.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    Ok(split_lines(&text))
}

/// Renders `source` into a scratch directory and returns its lines. The
/// directory is removed whether or not rendering succeeds.
pub fn render_lines(renderer: &dyn Renderer, source: &Path) -> Result<Vec<String>> {
    let scratch = tempfile::tempdir()?;
    let text_path = scratch.path().join("rendered.txt");
    renderer.render(source, &text_path)?;
    read_lines(&text_path)
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.split('\x0c'))
        .map(str::to_string)
        .collect()
}

/// Where the source document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Local(PathBuf),
    Remote(Url),
}

impl Source {
    /// `http(s)` URLs are fetched; anything else is a local path.
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Remote(url),
            _ => Source::Local(PathBuf::from(input)),
        }
    }
}

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .no_proxy()
        .user_agent("kondate-extract/0.1")
        .build()?;
    Ok(client)
}

/// Downloads a remote source document to `dest`.
pub async fn download(client: &Client, url: &Url, dest: &Path) -> Result<()> {
    info!("downloading {url}");
    let bytes = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    fs::write(dest, &bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(())
}

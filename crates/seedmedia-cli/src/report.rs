//! Run report: per-item records, totals, and console output.
//!
//! In text mode each item is printed as it finishes. In JSON mode nothing is
//! printed until the run ends, then the whole report goes to stdout.

use colored::Colorize;
use seedmedia_spec::GenerationError;
use serde::{Deserialize, Serialize};

/// What kind of file an item produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Artwork,
    Audio,
}

/// Outcome of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// File was written.
    Generated,
    /// File already existed with content and was left alone.
    Skipped,
    /// Generation or writing failed; nothing was written.
    Failed,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// File kind.
    pub kind: MediaKind,
    /// File name inside its directory.
    pub file: String,
    /// Outcome.
    pub status: ItemStatus,
    /// Genre used, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// BLAKE3 hash of the written bytes (PCM only for audio).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Error code for failed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Error message for failed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemRecord {
    /// A successfully written file.
    pub fn generated(kind: MediaKind, file: impl Into<String>, hash: String) -> Self {
        Self {
            kind,
            file: file.into(),
            status: ItemStatus::Generated,
            genre: None,
            hash: Some(hash),
            error_code: None,
            error: None,
        }
    }

    /// An existing file that was left alone.
    pub fn skipped(kind: MediaKind, file: impl Into<String>) -> Self {
        Self {
            kind,
            file: file.into(),
            status: ItemStatus::Skipped,
            genre: None,
            hash: None,
            error_code: None,
            error: None,
        }
    }

    /// A failed item.
    pub fn failed(kind: MediaKind, file: impl Into<String>, err: &GenerationError) -> Self {
        Self {
            kind,
            file: file.into(),
            status: ItemStatus::Failed,
            genre: None,
            hash: None,
            error_code: Some(err.code.to_string()),
            error: Some(err.message.clone()),
        }
    }

    /// Attaches the genre used.
    pub fn with_genre(mut self, genre: Option<&str>) -> Self {
        self.genre = genre.map(str::to_string);
        self
    }
}

/// Counts per media kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Full report of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// `basic` or `enhanced`.
    pub mode: String,
    /// Base seed.
    pub seed: u32,
    /// Artwork directory.
    pub artwork_dir: String,
    /// Audio directory.
    pub audio_dir: String,
    /// Every item in processing order.
    pub items: Vec<ItemRecord>,
    /// Artwork counts.
    pub artwork: Totals,
    /// Audio counts.
    pub audio: Totals,
}

impl RunReport {
    /// Starts an empty report.
    pub fn new(mode: &str, seed: u32, artwork_dir: String, audio_dir: String) -> Self {
        Self {
            mode: mode.to_string(),
            seed,
            artwork_dir,
            audio_dir,
            items: Vec::new(),
            artwork: Totals::default(),
            audio: Totals::default(),
        }
    }

    /// Appends a record and updates the totals.
    pub fn push(&mut self, record: ItemRecord) {
        let totals = match record.kind {
            MediaKind::Artwork => &mut self.artwork,
            MediaKind::Audio => &mut self.audio,
        };
        match record.status {
            ItemStatus::Generated => totals.generated += 1,
            ItemStatus::Skipped => totals.skipped += 1,
            ItemStatus::Failed => totals.failed += 1,
        }
        self.items.push(record);
    }

    /// Records of failed items.
    pub fn failures(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.iter().filter(|r| r.status == ItemStatus::Failed)
    }
}

/// Prints progress in the selected output mode and collects the report.
pub struct Reporter {
    json: bool,
    report: RunReport,
}

impl Reporter {
    /// Creates a reporter around an empty report.
    pub fn new(report: RunReport, json: bool) -> Self {
        Self { json, report }
    }

    /// Whether output is JSON.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Prints a section heading (text mode only).
    pub fn section(&self, title: &str) {
        if !self.json {
            println!();
            println!("{} {}", "INFO".blue().bold(), title);
        }
    }

    /// Records an item and prints its line (text mode only).
    pub fn record(&mut self, record: ItemRecord) {
        if !self.json {
            print_item(&record);
        }
        self.report.push(record);
    }

    /// Prints the banner for a run (text mode only).
    pub fn banner(&self, title: &str) {
        if self.json {
            return;
        }
        println!("{}", "======================================".cyan());
        println!("{}", format!("  {}", title).cyan());
        println!("{}", "======================================".cyan());
        println!();
        println!("{} {}", "Artwork directory:".blue().bold(), self.report.artwork_dir);
        println!("{} {}", "Audio directory:".blue().bold(), self.report.audio_dir);
        println!("{} {}", "Seed:".blue().bold(), self.report.seed);
    }

    /// Prints the summary (or the JSON report) and returns the report.
    pub fn finish(self) -> anyhow::Result<RunReport> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&self.report)?);
        } else {
            print_summary(&self.report);
        }
        Ok(self.report)
    }
}

fn print_item(record: &ItemRecord) {
    let genre = record
        .genre
        .as_deref()
        .map(|g| format!(" ({})", g))
        .unwrap_or_default();
    match record.status {
        ItemStatus::Generated => {
            println!("  {} {}{}", "SUCCESS".green(), record.file, genre.dimmed())
        }
        ItemStatus::Skipped => {
            println!("  {} {} (exists)", "SKIPPED".yellow(), record.file)
        }
        ItemStatus::Failed => println!(
            "  {} {} - [{}] {}",
            "FAILED".red(),
            record.file,
            record.error_code.as_deref().unwrap_or("UNKNOWN"),
            record.error.as_deref().unwrap_or("unknown error")
        ),
    }
}

fn print_summary(report: &RunReport) {
    println!();
    println!("{}", "======================================".cyan());
    println!("{}", "  Generation Summary".cyan());
    println!("{}", "======================================".cyan());
    println!();
    for (label, totals) in [("Artwork", report.artwork), ("Audio", report.audio)] {
        println!(
            "{} {} generated, {} skipped, {} failed",
            format!("{}:", label).blue().bold(),
            totals.generated,
            totals.skipped,
            totals.failed
        );
    }

    let failed: Vec<_> = report.failures().collect();
    if !failed.is_empty() {
        println!();
        println!("{}", "Failed items:".red().bold());
        for record in failed {
            println!(
                "  - {}: {}",
                record.file,
                record.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

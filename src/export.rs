use crate::summary::{Summary, SummaryRenderer, TextSummary};
use anyhow::Context;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Format du document exporté.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DocumentFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl DocumentFormat {
    /// Déduit le format de l'extension (`.json`, `.csv`, sinon texte).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("csv") => DocumentFormat::Csv,
            _ => DocumentFormat::Text,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Text => "txt",
            DocumentFormat::Json => "json",
            DocumentFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentFormat::Text => "text/plain; charset=utf-8",
            DocumentFormat::Json => "application/json",
            DocumentFormat::Csv => "text/csv",
        }
    }

    pub fn file_name(self) -> String {
        format!("last_working_day.{}", self.extension())
    }
}

/// Rendu du document en mémoire.
pub fn render_document(summary: &Summary, format: DocumentFormat) -> anyhow::Result<Vec<u8>> {
    match format {
        DocumentFormat::Text => Ok(TextSummary.render(summary).into_bytes()),
        DocumentFormat::Json => {
            serde_json::to_vec_pretty(summary).context("serializing summary to JSON")
        }
        DocumentFormat::Csv => render_csv(summary),
    }
}

/// CSV: header `reference,generated_at,resignation_date,notice_period_days,country,country_code,rule,custom_holidays,tentative_last_day,last_working_day`
fn render_csv(s: &Summary) -> anyhow::Result<Vec<u8>> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record([
        "reference",
        "generated_at",
        "resignation_date",
        "notice_period_days",
        "country",
        "country_code",
        "rule",
        "custom_holidays",
        "tentative_last_day",
        "last_working_day",
    ])?;
    let reference = s.reference.to_string();
    let generated_at = s.generated_at_rfc3339();
    let resignation = s.resignation_date.to_string();
    let notice = s.notice_period_days.to_string();
    let holidays = s.custom_holidays_joined(";");
    let tentative = s.tentative_last_day.to_string();
    let last = s.last_working_day.to_string();
    w.write_record([
        reference.as_str(),
        generated_at.as_str(),
        resignation.as_str(),
        notice.as_str(),
        s.country.as_str(),
        s.country_code.as_str(),
        s.rule.label(),
        holidays.as_str(),
        tentative.as_str(),
        last.as_str(),
    ])?;
    w.into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV document: {}", e.error()))
}

/// Écrit le document de manière atomique (fichier temporaire + rename).
pub fn export_summary<P: AsRef<Path>>(
    path: P,
    summary: &Summary,
    format: DocumentFormat,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let bytes = render_document(summary, format)?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("writing document {}", path.display()))?;
    tracing::info!(path = %path.display(), ?format, "summary exported");
    Ok(())
}

//! Report writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use crate::io::report::{Report, ReportFormat};

impl Report {
    /// Render as one line per country, towns in ascending order.
    pub fn to_text(&self) -> String {
        self.countries.iter()
            .map(|entry| {
                let towns = entry.towns.iter().map(|t| format!(" {t}")).collect::<String>();
                format!("Country {}:{}\n", entry.country, towns)
            })
            .collect()
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("[io::report] Failed to serialize report")
    }

    /// Render in the given format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Write the rendered report to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, format: ReportFormat) -> Result<()> {
        let rendered = self.render(format)?;
        writer.write_all(rendered.as_bytes()).context("[io::report] Failed to write report")?;
        if format == ReportFormat::Json { writeln!(writer).context("[io::report] Failed to write report")?; }
        Ok(())
    }

    /// Write the rendered report to a file at `path`.
    pub fn write_to_file(&self, path: &Path, format: ReportFormat) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[io::report] Failed to create report file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, format)?;
        writer.flush().with_context(|| format!("[io::report] Failed to flush {}", path.display()))?;
        Ok(())
    }
}

//! Output writers for the CLI.
//!
//! The shaped views serialize directly to JSON for machine consumers; the
//! terminal writer renders group labels, row-chunked item grids (honoring
//! the `columns` hint) and a progress table.

use crate::core::Objekt;
use crate::pipeline::{CatalogView, Cluster, OwnedView, ProgressScope};
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_catalog(&mut self, view: &CatalogView) -> anyhow::Result<()>;
    fn write_owned(&mut self, view: &OwnedView) -> anyhow::Result<()>;
    fn write_progress(&mut self, scopes: &[ProgressScope]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_catalog(&mut self, view: &CatalogView) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, view)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_owned(&mut self, view: &OwnedView) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, view)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_progress(&mut self, scopes: &[ProgressScope]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, scopes)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_group_label(&mut self, label: &str) -> anyhow::Result<()> {
        if !label.is_empty() {
            writeln!(self.writer, "\n{}", label.bold())?;
        }
        Ok(())
    }

    fn write_rows(&mut self, cells: &[String], columns: usize) -> anyhow::Result<()> {
        for row in cells.chunks(columns) {
            writeln!(self.writer, "  {}", row.join("  "))?;
        }
        Ok(())
    }
}

fn objekt_cell(objekt: &Objekt) -> String {
    match objekt.serial() {
        Some(serial) => format!("{} #{}", objekt.collection().collection_id, serial),
        None => objekt.collection().collection_id.clone(),
    }
}

fn cluster_cell(cluster: &Cluster) -> String {
    let base = objekt_cell(cluster.representative());
    if cluster.copies() > 1 {
        format!("{} x{}", base, cluster.copies())
    } else {
        base
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_catalog(&mut self, view: &CatalogView) -> anyhow::Result<()> {
        writeln!(self.writer, "{} total", view.total)?;
        for (label, objekts) in &view.groups {
            self.write_group_label(label)?;
            let cells: Vec<String> = objekts.iter().map(objekt_cell).collect();
            self.write_rows(&cells, view.columns)?;
        }
        Ok(())
    }

    fn write_owned(&mut self, view: &OwnedView) -> anyhow::Result<()> {
        writeln!(self.writer, "{} total ({} grouped)", view.total, view.clusters)?;
        for (label, clusters) in &view.groups {
            self.write_group_label(label)?;
            let cells: Vec<String> = clusters.iter().map(cluster_cell).collect();
            self.write_rows(&cells, view.columns)?;
        }
        Ok(())
    }

    fn write_progress(&mut self, scopes: &[ProgressScope]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Scope", "Owned", "Total", "Progress"]);
        for scope in scopes {
            table.add_row(vec![
                Cell::new(&scope.label),
                Cell::new(scope.stats.owned),
                Cell::new(scope.stats.total),
                Cell::new(format!("{}%", scope.stats.percentage)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

/// Build the writer for a format over any byte sink.
pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ProgressStats;

    #[test]
    fn progress_table_lists_every_scope() {
        let scopes = vec![ProgressScope {
            label: "SeoYeon".to_string(),
            stats: ProgressStats {
                owned: 5,
                total: 8,
                percentage: 62,
            },
            objekts: vec![],
        }];
        let mut buf = Vec::new();
        {
            let mut writer = TerminalWriter::new(&mut buf);
            writer.write_progress(&scopes).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("SeoYeon"));
        assert!(out.contains("62%"));
    }

    #[test]
    fn json_catalog_output_is_valid_json() {
        let view = CatalogView {
            groups: vec![(String::new(), vec![])],
            total: 0,
            columns: 7,
        };
        let mut buf = Vec::new();
        {
            let mut writer = JsonWriter::new(&mut buf);
            writer.write_catalog(&view).unwrap();
        }
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["total"], 0);
    }
}

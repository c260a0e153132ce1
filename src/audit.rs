//! Append-only audit log for actuator commands.
//!
//! Every committed command produces exactly one record; the log is flushed
//! once at mission end as a CSV-style file, one line per record:
//!
//! ```text
//! LIGAR,PAREDE,PAREDE,VAZIO,SEM CARGA
//! A,VAZIO,PAREDE,HUMANO,SEM CARGA
//! ```

use crate::core::{CargoStatus, Command, SensorReading};
use crate::error::Result;
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// One audit line: the command plus the post-command sensor triple and
/// cargo status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditRecord {
    pub command: Command,
    pub left: SensorReading,
    pub right: SensorReading,
    pub front: SensorReading,
    pub cargo: CargoStatus,
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.command.code(),
            self.left.token(),
            self.right.token(),
            self.front.token(),
            self.cargo.token()
        )
    }
}

/// Append-only record sink, immutable after the single mission-end save.
#[derive(Debug, Default)]
pub struct AuditLog {
    records: Vec<AuditRecord>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: AuditRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compact single-letter command string, power-on excluded.
    pub fn command_sequence(&self) -> String {
        self.records
            .iter()
            .map(|record| record.command.code())
            .filter(|code| code.len() == 1)
            .collect()
    }

    /// Log file location for a mission: `<log_dir>/<map_stem>.csv`.
    pub fn log_path(map_path: &Path, log_dir: &Path) -> PathBuf {
        let stem = map_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mission".to_string());
        log_dir.join(stem).with_extension("csv")
    }

    /// Write all records, creating the log directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(path)?);
        for record in &self.records {
            writeln!(writer, "{record}")?;
        }
        writer.flush()?;
        info!("audit log saved to {}", path.display());
        Ok(())
    }
}

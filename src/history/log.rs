//! Append-only completion log (delimited text format).

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;

use super::csv::{decode, encode_row, Row};
use super::{HistoryRecord, TIMESTAMP_FORMAT};
use crate::error::{LiftlogError, Result};
use crate::routine::format_weight;

/// Column headers of the history file.
pub const HEADER: [&str; 4] = ["Fecha", "Rutina", "Ejercicio", "Kg"];

/// Destination for completion records.
///
/// The session tracker writes through this trait so tests can collect
/// records in memory.
pub trait HistorySink {
    /// Durably record one completion.
    fn append(&mut self, record: &HistoryRecord) -> Result<()>;
}

impl HistorySink for Vec<HistoryRecord> {
    fn append(&mut self, record: &HistoryRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Completion history backed by a delimited text file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Default file name inside the data directory.
    pub const DEFAULT_FILE: &'static str = "progreso.csv";

    /// Create a log at the given path. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the log path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order.
    ///
    /// A missing or empty file yields no records.
    pub fn read_all(&self) -> Result<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let rows = decode(&content).map_err(|(line, message)| self.corrupt(line, &message))?;

        let mut rows = rows.into_iter();
        match rows.next() {
            None => return Ok(Vec::new()),
            Some(header) if header.fields == HEADER => {}
            Some(header) => {
                return Err(self.corrupt(header.line, "missing Fecha,Rutina,Ejercicio,Kg header"))
            }
        }

        rows.map(|row| self.parse_row(row)).collect()
    }

    fn parse_row(&self, row: Row) -> Result<HistoryRecord> {
        let line = row.line;
        let [timestamp, routine, exercise, weight]: [String; 4] =
            row.fields.try_into().map_err(|f: Vec<String>| {
                self.corrupt(line, &format!("expected 4 fields, found {}", f.len()))
            })?;

        let timestamp = NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT).map_err(|e| {
            self.corrupt(line, &format!("bad timestamp '{}': {}", timestamp, e))
        })?;
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| self.corrupt(line, &format!("bad weight '{}'", weight)))?;

        Ok(HistoryRecord {
            timestamp,
            routine,
            exercise,
            weight,
        })
    }

    fn corrupt(&self, line: usize, message: &str) -> LiftlogError {
        LiftlogError::CorruptData {
            path: self.path.clone(),
            message: format!("line {}: {}", line, message),
        }
    }
}

impl HistorySink for HistoryLog {
    /// Append one row, writing the header first if the file is new or empty.
    fn append(&mut self, record: &HistoryRecord) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {:?}", dir))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {:?}", self.path))?;

        let mut out = String::new();
        if file.metadata()?.len() == 0 {
            out.push_str(&encode_row(&HEADER));
            out.push('\n');
        } else if !ends_with_newline(&mut file)? {
            // Rows written by other tools may lack the final line break.
            out.push('\n');
        }
        let timestamp = record.formatted_timestamp();
        let weight = format_weight(record.weight);
        out.push_str(&encode_row(&[
            timestamp.as_str(),
            record.routine.as_str(),
            record.exercise.as_str(),
            weight.as_str(),
        ]));
        out.push('\n');

        // One write call per row keeps rows whole.
        file.write_all(out.as_bytes())?;

        tracing::debug!(
            "Logged '{}' from routine '{}' to {}",
            record.exercise,
            record.routine,
            self.path.display()
        );
        Ok(())
    }
}

fn ends_with_newline(file: &mut fs::File) -> Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::Exercise;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(routine: &str, name: &str, weight: f64, minute: u32) -> HistoryRecord {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 17)
            .unwrap()
            .and_hms_opt(18, minute, 0)
            .unwrap();
        HistoryRecord::at(ts, routine, &Exercise::new(name, weight))
    }

    #[test]
    fn read_all_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let log = HistoryLog::new(temp.path().join("progreso.csv"));

        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn read_all_empty_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progreso.csv");
        fs::write(&path, "").unwrap();

        assert!(HistoryLog::new(&path).read_all().unwrap().is_empty());
    }

    #[test]
    fn first_append_writes_header() {
        let temp = TempDir::new().unwrap();
        let mut log = HistoryLog::new(temp.path().join("progreso.csv"));

        log.append(&record("A", "Chest Press", 32.0, 5)).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "Fecha,Rutina,Ejercicio,Kg\n2026-03-17 18:05,A,Chest Press,32\n"
        );
    }

    #[test]
    fn appends_keep_prior_rows() {
        let temp = TempDir::new().unwrap();
        let mut log = HistoryLog::new(temp.path().join("progreso.csv"));

        log.append(&record("A", "Chest Press", 32.0, 5)).unwrap();
        let first = fs::read_to_string(log.path()).unwrap();
        log.append(&record("A", "Tríceps Polea", 14.7, 9)).unwrap();
        let second = fs::read_to_string(log.path()).unwrap();

        assert!(second.starts_with(&first));
        assert_eq!(second.matches("Fecha").count(), 1);
        assert!(second.ends_with("2026-03-17 18:09,A,Tríceps Polea,14.7\n"));
    }

    #[test]
    fn read_all_returns_file_order() {
        let temp = TempDir::new().unwrap();
        let mut log = HistoryLog::new(temp.path().join("nested/dir/progreso.csv"));

        let records = vec![
            record("A", "Chest Press", 32.0, 5),
            record("B", "Leg Extension", 36.0, 7),
            record("A", "Tríceps Polea", 14.7, 9),
        ];
        for r in &records {
            log.append(r).unwrap();
        }

        assert_eq!(log.read_all().unwrap(), records);
    }

    #[test]
    fn names_with_commas_and_quotes_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut log = HistoryLog::new(temp.path().join("progreso.csv"));
        let r = record("Upper, heavy", "Curl \"21s\"", 12.5, 0);

        log.append(&r).unwrap();

        assert_eq!(log.read_all().unwrap(), vec![r]);
    }

    #[test]
    fn reads_rows_written_elsewhere() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progreso.csv");
        fs::write(
            &path,
            "Fecha,Rutina,Ejercicio,Kg\n2025-11-02 09:30,C,Leg Press,63.0\n",
        )
        .unwrap();

        let records = HistoryLog::new(&path).read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].exercise, "Leg Press");
        assert_eq!(records[0].weight, 63.0);
    }

    #[test]
    fn bad_header_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progreso.csv");
        fs::write(&path, "Date,Routine\n").unwrap();

        let err = HistoryLog::new(&path).read_all().unwrap_err();
        assert!(matches!(err, LiftlogError::CorruptData { .. }));
    }

    #[test]
    fn bad_row_names_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progreso.csv");
        fs::write(
            &path,
            "Fecha,Rutina,Ejercicio,Kg\n2025-11-02 09:30,C,Leg Press,63\nyesterday,C,Leg Press,63\n",
        )
        .unwrap();

        let err = HistoryLog::new(&path).read_all().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn vec_sink_collects_records() {
        let mut sink: Vec<HistoryRecord> = Vec::new();
        HistorySink::append(&mut sink, &record("A", "Dip Chin", 32.0, 1)).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn append_after_unterminated_row_starts_new_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progreso.csv");
        fs::write(&path, "Fecha,Rutina,Ejercicio,Kg\n2025-11-02 09:30,C,Leg Press,63").unwrap();
        let mut log = HistoryLog::new(&path);

        log.append(&record("A", "Dip Chin", 32.0, 7)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Fecha,Rutina,Ejercicio,Kg\n2025-11-02 09:30,C,Leg Press,63\n2026-03-17 18:07,A,Dip Chin,32\n"
        );
        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].exercise, "Leg Press");
        assert_eq!(records[0].weight, 63.0);
        assert_eq!(records[1].exercise, "Dip Chin");
    }
}

//! Statistics file reader and summary.
//!
//! Parses the textual record format back into parallel series by scanning
//! exact line prefixes. Field order within a record block does not matter;
//! each prefix captures one value per block.

use std::path::Path;

use super::StatsError;

/// Parallel per-generation series recovered from a statistics file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSeries {
    pub generations: Vec<usize>,
    pub steps: Vec<usize>,
    pub scores: Vec<i64>,
    pub penalties: Vec<i64>,
    pub arrivals: Vec<bool>,
    pub times: Vec<f64>,
}

impl StatsSeries {
    /// Read and parse a statistics file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StatsError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse statistics text.
    pub fn parse(text: &str) -> Result<Self, StatsError> {
        let mut series = StatsSeries::default();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if let Some(value) = line.strip_prefix("Generación:") {
                series.generations.push(parse_field(value, line_no, "Generación")?);
            } else if let Some(value) = line.strip_prefix("Pasos:") {
                series.steps.push(parse_field(value, line_no, "Pasos")?);
            } else if let Some(value) = line.strip_prefix("Puntos:") {
                series.scores.push(parse_field(value, line_no, "Puntos")?);
            } else if let Some(value) = line.strip_prefix("Alcohol:") {
                series.penalties.push(parse_field(value, line_no, "Alcohol")?);
            } else if let Some(value) = line.strip_prefix("Llegó a la meta:") {
                series.arrivals.push(value.contains("Sí"));
            } else if let Some(value) = line.strip_prefix("Tiempo total:") {
                // The value reads "<seconds> segundos".
                let number = value.split_whitespace().next().unwrap_or("");
                series.times.push(parse_field(number, line_no, "Tiempo total")?);
            }
        }

        Ok(series)
    }

    /// Number of complete records (the shortest series).
    pub fn len(&self) -> usize {
        self.generations
            .len()
            .min(self.steps.len())
            .min(self.scores.len())
            .min(self.penalties.len())
            .min(self.arrivals.len())
            .min(self.times.len())
    }

    /// Whether no records were recovered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate summary, or `None` when the series are empty.
    pub fn summary(&self) -> Option<StatsSummary> {
        let n = self.len();
        if n == 0 {
            return None;
        }

        let goals_reached = self.arrivals[..n].iter().filter(|&&a| a).count();
        Some(StatsSummary {
            generations: n,
            max_score: self.scores[..n].iter().copied().max().unwrap_or(0),
            mean_score: self.scores[..n].iter().sum::<i64>() as f64 / n as f64,
            total_seconds: self.times[..n].iter().copied().fold(0.0, f64::max),
            mean_steps: self.steps[..n].iter().sum::<usize>() as f64 / n as f64,
            goals_reached,
            success_rate: goals_reached as f64 / n as f64 * 100.0,
        })
    }
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    line_no: usize,
    field: &str,
) -> Result<T, StatsError> {
    value.trim().parse().map_err(|_| StatsError::MalformedRecord {
        line: line_no + 1,
        field: field.to_string(),
    })
}

/// Aggregate view of a whole run, mirroring the original summary panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub generations: usize,
    pub max_score: i64,
    pub mean_score: f64,
    pub total_seconds: f64,
    pub mean_steps: f64,
    pub goals_reached: usize,
    pub success_rate: f64,
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total de generaciones: {}", self.generations)?;
        writeln!(f, "Puntuación máxima: {}", self.max_score)?;
        writeln!(f, "Puntuación promedio: {:.2}", self.mean_score)?;
        writeln!(
            f,
            "Tiempo total de simulación: {:.2} segundos",
            self.total_seconds
        )?;
        writeln!(
            f,
            "Promedio de pasos por generación: {:.2}",
            self.mean_steps
        )?;
        writeln!(f, "Veces que llegó a la meta: {}", self.goals_reached)?;
        writeln!(f, "Tasa de éxito: {:.2}%", self.success_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::GenerationRecord;
    use crate::sim::RecordSink;
    use crate::stats::StatsWriter;

    fn record(generation: usize, score: i64, arrived: bool) -> GenerationRecord {
        GenerationRecord {
            generation,
            steps: 10 * (generation + 1),
            score,
            penalty: 5,
            arrived,
            elapsed_seconds: generation as f64 + 0.5,
        }
    }

    #[test]
    fn test_writer_reader_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");
        let mut writer = StatsWriter::create(&path).unwrap();
        writer.emit(&record(0, 20, false)).unwrap();
        writer.emit(&record(1, 120, true)).unwrap();

        let series = StatsSeries::from_path(&path).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.generations, vec![0, 1]);
        assert_eq!(series.steps, vec![10, 20]);
        assert_eq!(series.scores, vec![20, 120]);
        assert_eq!(series.penalties, vec![5, 5]);
        assert_eq!(series.arrivals, vec![false, true]);
        assert_eq!(series.times, vec![0.50, 1.50]);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let text = "\
            Pasos: 42\n\
            Tiempo total: 3.25 segundos\n\
            Generación: 7\n\
            Llegó a la meta: Sí\n\
            Alcohol: 15\n\
            Puntos: 130\n";
        let series = StatsSeries::parse(text).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.generations, vec![7]);
        assert_eq!(series.steps, vec![42]);
        assert_eq!(series.scores, vec![130]);
        assert_eq!(series.penalties, vec![15]);
        assert_eq!(series.arrivals, vec![true]);
        assert_eq!(series.times, vec![3.25]);
    }

    #[test]
    fn test_malformed_numeric_field() {
        let err = StatsSeries::parse("Generación: uno\n").unwrap_err();
        match err {
            StatsError::MalformedRecord { line, field } => {
                assert_eq!(line, 1);
                assert_eq!(field, "Generación");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        let text = "=== Estadísticas de Simulación - 2026-08-24 10:00:00 ===\n\n\
                    ==================================================\n\n\
                    Generación: 0\nPasos: 3\nPuntos: 0\nAlcohol: 0\n\
                    Llegó a la meta: No\nTiempo total: 0.10 segundos\n";
        let series = StatsSeries::parse(text).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_summary() {
        let mut series = StatsSeries::default();
        for (i, (score, arrived)) in [(0, false), (50, false), (130, true)].iter().enumerate() {
            series.generations.push(i);
            series.steps.push(100);
            series.scores.push(*score);
            series.penalties.push(0);
            series.arrivals.push(*arrived);
            series.times.push(i as f64);
        }

        let summary = series.summary().unwrap();
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.max_score, 130);
        assert_eq!(summary.mean_score, 60.0);
        assert_eq!(summary.total_seconds, 2.0);
        assert_eq!(summary.mean_steps, 100.0);
        assert_eq!(summary.goals_reached, 1);
        assert!((summary.success_rate - 100.0 / 3.0).abs() < 1e-9);

        assert!(series.summary().unwrap().to_string().contains("Tasa de éxito: 33.33%"));
        assert!(StatsSeries::default().summary().is_none());
    }
}

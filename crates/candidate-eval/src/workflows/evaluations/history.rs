use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::ScoreSet;
use super::scoring::HistoricalEvaluation;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    technical: i32,
    problem: i32,
    safety: i32,
    communication: i32,
    culture: i32,
    percent: u8,
}

impl From<HistoryRow> for HistoricalEvaluation {
    fn from(row: HistoryRow) -> Self {
        Self {
            scores: ScoreSet {
                technical: row.technical,
                problem: row.problem,
                safety: row.safety,
                communication: row.communication,
                culture: row.culture,
            },
            percent: row.percent,
        }
    }
}

/// Parses `technical,problem,safety,communication,culture,percent` rows.
pub fn import_history<R: Read>(reader: R) -> Result<Vec<HistoricalEvaluation>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut history = Vec::new();
    for row in csv_reader.deserialize::<HistoryRow>() {
        history.push(row?.into());
    }

    Ok(history)
}

pub fn import_history_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<HistoricalEvaluation>, ImportError> {
    let file = File::open(path)?;
    import_history(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_trimmed_rows() {
        let csv = "technical, problem, safety, communication, culture, percent\n\
                   5, 4, 4, 3, 3, 84\n\
                   2, 3, 3, 3, 3, 56\n";

        let history = import_history(Cursor::new(csv)).expect("history parses");

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].scores.technical, 5);
        assert_eq!(history[0].percent, 84);
        assert_eq!(
            history[1].scores,
            ScoreSet {
                technical: 2,
                problem: 3,
                safety: 3,
                communication: 3,
                culture: 3,
            }
        );
    }

    #[test]
    fn header_only_file_is_empty_history() {
        let csv = "technical,problem,safety,communication,culture,percent\n";
        let history = import_history(Cursor::new(csv)).expect("history parses");
        assert!(history.is_empty());
    }

    #[test]
    fn rejects_non_numeric_ratings() {
        let csv = "technical,problem,safety,communication,culture,percent\nhigh,3,3,3,3,60\n";
        assert!(matches!(
            import_history(Cursor::new(csv)),
            Err(ImportError::Csv(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            import_history_from_path("/nonexistent/evaluations.csv"),
            Err(ImportError::Io(_))
        ));
    }
}

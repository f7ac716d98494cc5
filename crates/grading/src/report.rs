use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use tally_core::{DomainError, DomainResult};

use crate::learner::Learner;

/// Failures while producing a grade report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A record failed validation (missing field, bad id/score format).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The input or output file could not be read/written.
    #[error("report io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one `id,fullName,score` record; fields are trimmed.
pub fn parse_line(line: &str) -> DomainResult<Learner> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(DomainError::missing_field(format!(
            "line has {} field(s), expected 3: \"{line}\"",
            parts.len()
        )));
    }

    let id = parts[0].parse()?;
    let full_name = parts[1].trim().to_string();
    let score: i32 = parts[2]
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_format(format!("invalid score: \"{}\"", parts[2].trim())))?;

    Ok(Learner {
        id,
        full_name,
        score,
    })
}

/// Read and validate all learner records from `path`.
///
/// Blank lines are skipped; the first malformed record aborts the read.
pub fn read_learners(path: impl AsRef<Path>) -> Result<Vec<Learner>, ReportError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut learners = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        learners.push(parse_line(&line)?);
    }
    Ok(learners)
}

/// Write one formatted report line per learner to `path`.
pub fn write_report(learners: &[Learner], path: impl AsRef<Path>) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for learner in learners {
        writeln!(writer, "{}", learner.report_line())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read `input`, grade every learner, and write the report to `output`.
pub fn generate_report(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<usize, ReportError> {
    let learners = read_learners(input)?;
    write_report(&learners, output)?;
    tracing::info!(count = learners.len(), "grade report written");
    Ok(learners.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tally_core::EntityId;

    #[test]
    fn parses_a_well_formed_line_with_whitespace() {
        let learner = parse_line(" 1 , Kofi Mensah , 82 ").unwrap();
        assert_eq!(learner.id, EntityId::new(1));
        assert_eq!(learner.full_name, "Kofi Mensah");
        assert_eq!(learner.score, 82);
    }

    #[test]
    fn wrong_field_count_is_missing_field() {
        let err = parse_line("1,Name").unwrap_err();
        assert!(matches!(err, DomainError::MissingField(_)), "{err:?}");

        let err = parse_line("1,Name,80,extra").unwrap_err();
        assert!(matches!(err, DomainError::MissingField(_)), "{err:?}");
    }

    #[test]
    fn non_numeric_id_is_invalid_format() {
        let err = parse_line("abc,Name,80").unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat(_)), "{err:?}");
    }

    #[test]
    fn non_numeric_score_is_invalid_format() {
        let err = parse_line("1,Name,eighty").unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat(_)), "{err:?}");
    }

    #[test]
    fn generate_report_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("learners.txt");
        let output = dir.path().join("grade_report.txt");

        std::fs::write(&input, "1,Kofi Mensah,82\n2,Ama Serwaa,58\n\n").unwrap();

        let count = generate_report(&input, &output).unwrap();
        assert_eq!(count, 2);

        let mut report = String::new();
        File::open(&output)
            .unwrap()
            .read_to_string(&mut report)
            .unwrap();
        assert_eq!(
            report,
            "Kofi Mensah (ID: 1): Score = 82, Grade = A\n\
             Ama Serwaa (ID: 2): Score = 58, Grade = D\n"
        );
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_learners(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)), "{err:?}");
    }
}

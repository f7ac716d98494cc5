use std::fs;

use tally_grading::{generate_report, ReportError};

/// Write a sample input file, generate the grade report, and print it.
///
/// Parse failures are reported per kind; a missing input file is reported
/// and survived, matching the rest of the demos.
pub fn run() -> anyhow::Result<()> {
    println!("=== Grading ===");

    let dir = std::env::temp_dir();
    let input = dir.join("tally_learners.txt");
    let output = dir.join("tally_grade_report.txt");

    fs::write(
        &input,
        "1,Kofi Mensah,82\n2,Ama Serwaa,74\n3,Yaw Boateng,61\n4,Esi Dadzie,55\n5,Kojo Antwi,43\n",
    )?;

    match generate_report(&input, &output) {
        Ok(count) => {
            println!("Report generated for {count} learner(s):");
            print!("{}", fs::read_to_string(&output)?);
        }
        Err(ReportError::Io(err)) => println!("Input file not found or unreadable: {err}"),
        Err(ReportError::Domain(err)) => println!("[Error] {err}"),
    }

    println!();
    Ok(())
}

//! Tracker CLI - prints the summary line for each demo sensor packet
//!
//! Packets are processed in input order; the first failing packet stops the
//! run with the error on stderr.

use std::process::ExitCode;

use fittrack::pipeline::summary_line;

/// Captured packets from the three supported sensor types
const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> ExitCode {
    for (code, data) in PACKAGES {
        match summary_line(code, data) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

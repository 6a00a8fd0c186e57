//! The `run` command: parse and evaluate a MiniC source file.

use super::{parse_reported, read_file, report, CommandError};

/// Run `main` from the file at `path` and print its result.
///
/// Unbound reads do not stop evaluation; their warnings are rendered on
/// stderr after the program finishes, before the value is printed.
pub fn run_file(path: &str) -> Result<i64, CommandError> {
    let source = read_file(path)?;
    let program = parse_reported(path, &source)?;

    let evaluation = minic_eval::eval_program(Some(&program));
    report(path, &source, &evaluation.diagnostics);

    println!("{}", evaluation.value);
    Ok(evaluation.value)
}

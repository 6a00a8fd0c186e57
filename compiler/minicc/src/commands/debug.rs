//! Debug commands: `parse` and `lex` for inspecting the front end.

use super::{parse_reported, read_file, report, CommandError};

/// Parse a file without running it; prints `OK` on success.
pub fn parse_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = parse_reported(path, &source)?;
    tracing::debug!(declarations = program.items().map_or(0, <[_]>::len), "parsed");
    println!("OK");
    Ok(())
}

/// Lex a file and print one token per line, `Eof` included.
pub fn lex_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let tokens = minic_lexer::lex(&source).map_err(|err| {
        report(path, &source, &[err.to_diagnostic()]);
        CommandError::Parse {
            path: path.to_string(),
            source: err.into(),
        }
    })?;

    for token in &tokens {
        println!("{token}");
    }
    Ok(())
}

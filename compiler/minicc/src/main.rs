//! MiniC CLI
//!
//! Tree-walking interpreter and AST diagram tool for MiniC.

use minicc::commands::{
    dot_file, lex_file, parse_file, png_file, run_file, CommandError, DotOptions, PngOptions,
};

fn main() {
    minicc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprint!("{USAGE}");
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => run_file(file_arg(&args, "run")).map(|_| ()),
        "dot" => {
            let mut options = DotOptions::default();
            if let Some(output) = output_arg(&args) {
                options.output = output.into();
            }
            dot_file(file_arg(&args, "dot"), &options)
        }
        "png" => {
            let mut options = PngOptions::default();
            if let Some(output) = output_arg(&args) {
                options = options.with_output(output);
            }
            png_file(file_arg(&args, "png"), &options)
        }
        "parse" => parse_file(file_arg(&args, "parse")),
        "lex" => lex_file(file_arg(&args, "lex")),
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
            return;
        }
        "version" | "--version" => {
            println!("minic {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        flag if flag.starts_with('-') => {
            eprintln!("unknown option '{flag}'");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
        // `minic <file.mc> [--run | --dot | --png]`
        path => match args.get(2).map(String::as_str) {
            Some("--run") => run_file(path).map(|_| ()),
            Some("--dot") => dot_file(path, &DotOptions::default()),
            Some("--png") => png_file(path, &PngOptions::default()),
            _ => parse_file(path),
        },
    };

    if let Err(err) = result {
        report_failure(&err);
        std::process::exit(err.exit_code());
    }
}

fn report_failure(err: &CommandError) {
    if !err.is_reported() {
        eprintln!("error: {err}");
    }
    if let Some(hint) = err.hint() {
        eprintln!("hint: {hint}");
    }
}

/// The file operand of `minic <command> <file.mc>`; exits with usage if absent.
fn file_arg<'a>(args: &'a [String], command: &str) -> &'a str {
    let file = args
        .iter()
        .skip(2)
        .scan(false, |after_flag, arg| {
            let operand = (!*after_flag && !arg.starts_with('-')).then_some(arg);
            *after_flag = arg == "-o";
            Some(operand)
        })
        .flatten()
        .next();

    let Some(file) = file else {
        eprintln!("error: missing file path");
        eprintln!("Usage: minic {command} <file.mc>");
        std::process::exit(1);
    };
    file
}

/// The value of `-o <path>`, if given.
fn output_arg(args: &[String]) -> Option<&str> {
    let at = args.iter().position(|arg| arg == "-o")?;
    match args.get(at + 1) {
        Some(path) => Some(path),
        None => {
            eprintln!("error: `-o` needs a path");
            std::process::exit(1);
        }
    }
}

const USAGE: &str = "\
MiniC interpreter and AST visualizer

Usage: minic <command> [options]
       minic <file.mc> [--run | --dot | --png]

Commands:
  run <file.mc>              Parse and execute, print main's result
  dot <file.mc> [-o <path>]  Write the AST as Graphviz text (default tree.dot)
  png <file.mc> [-o <path>]  Write the AST and render it with Graphviz (default tree.png)
  parse <file.mc>            Parse only, print OK
  lex <file.mc>              Print the token stream
  help                       Show this message
  version                    Show version information

Environment:
  MINIC_LOG    Tracing filter (falls back to RUST_LOG), e.g. minic_eval=debug
  MINIC_DOT    Graphviz executable used by `png` (default: dot)
  NO_COLOR     Disable colored diagnostics

Exit codes: 1 usage or unreadable input, 2 parse failure,
            3 diagram not writable, 4 Graphviz failed
";

//! The `dot` and `png` commands: draw a program's syntax tree.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use minic_ir::Node;

use super::{parse_reported, read_file, CommandError};

/// Options for `minic dot`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotOptions {
    /// Where the Graphviz text is written.
    pub output: PathBuf,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            output: PathBuf::from("tree.dot"),
        }
    }
}

/// Options for `minic png`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PngOptions {
    /// Intermediate Graphviz text.
    pub dot_path: PathBuf,
    /// Rendered image.
    pub png_path: PathBuf,
    /// Graphviz executable, from `MINIC_DOT` or `dot` on the `PATH`.
    pub graphviz: String,
}

impl Default for PngOptions {
    fn default() -> Self {
        PngOptions {
            dot_path: PathBuf::from("tree.dot"),
            png_path: PathBuf::from("tree.png"),
            graphviz: std::env::var("MINIC_DOT")
                .ok()
                .filter(|program| !program.is_empty())
                .unwrap_or_else(|| "dot".to_string()),
        }
    }
}

impl PngOptions {
    /// Render to `png_path`, keeping the `.dot` file next to it.
    pub fn with_output(mut self, png_path: impl Into<PathBuf>) -> Self {
        self.png_path = png_path.into();
        self.dot_path = self.png_path.with_extension("dot");
        self
    }
}

/// Write the syntax tree of the file at `path` as Graphviz text.
pub fn dot_file(path: &str, options: &DotOptions) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = parse_reported(path, &source)?;

    write_diagram(&program, &options.output)?;
    println!("AST saved to {}", options.output.display());
    Ok(())
}

/// Write the Graphviz text, then render it to PNG with the `dot` tool.
///
/// The `.dot` file is left in place when rendering fails, so it can be
/// rendered by hand.
pub fn png_file(path: &str, options: &PngOptions) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let program = parse_reported(path, &source)?;

    write_diagram(&program, &options.dot_path)?;
    render_png(options)?;
    println!(
        "AST saved to {} and {}",
        options.dot_path.display(),
        options.png_path.display()
    );
    Ok(())
}

fn write_diagram(program: &Node, path: &Path) -> Result<(), CommandError> {
    let write_error = |source: std::io::Error| CommandError::WriteDiagram {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);
    minic_dot::emit_dot(Some(program), &mut out).map_err(write_error)?;
    out.flush().map_err(write_error)?;
    tracing::debug!(path = %path.display(), "diagram written");
    Ok(())
}

fn render_png(options: &PngOptions) -> Result<(), CommandError> {
    let failed = |detail: String| CommandError::Graphviz {
        program: options.graphviz.clone(),
        detail,
    };

    let status = Command::new(&options.graphviz)
        .arg("-Tpng")
        .arg(&options.dot_path)
        .arg("-o")
        .arg(&options.png_path)
        .status()
        .map_err(|e| failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(failed(status.to_string()))
    }
}

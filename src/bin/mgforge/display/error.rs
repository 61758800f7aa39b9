use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self {
            hints: Vec::new(),
            has_typed_hints: false,
        };

        // Encoding errors wrap reader errors.
        collector.collect_encode_hints(err);
        if !collector.has_typed_hints {
            collector.collect_io_hints(err);
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_encode_hints(&mut self, err: &Error) {
        use molgraph_forge::Error as EncodeError;

        let Some(encode_err) = err.downcast_ref::<EncodeError>() else {
            return;
        };

        self.mark_typed();

        match encode_err {
            EncodeError::Structure { input, source } => {
                self.add(format!(
                    "Could not read the structure '{}'",
                    crate::util::text::truncate(input, 40)
                ));
                self.collect_reader_hints(source);
            }

            EncodeError::InvalidBond { i, j, detail } => {
                self.add(format!("Invalid bond between atoms {} and {}", i, j));
                self.add(format!("Issue: {}", detail));
                self.add("Check the bond block for out-of-range or repeated atom indices");
            }

            EncodeError::Config(_) => {
                self.add("Feature configuration file has invalid TOML");
                self.add("Allowed tables: [atom], [bond], [perception]");
                self.add("Check for misspelled keys; unknown keys are rejected");
            }
        }
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use molgraph_forge::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();
        self.collect_reader_hints(io_err);
    }

    fn collect_reader_hints(&mut self, io_err: &molgraph_forge::io::Error) {
        use molgraph_forge::io::Error as IoError;

        match io_err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::Parse {
                format, location, ..
            } => {
                self.add(format!(
                    "Parser encountered an issue at {} in {} input",
                    location, format
                ));
                self.add_format_specific_parse_hints(*format);
            }

            IoError::UnsupportedReadFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for input", fmt));
                self.add("Supported input formats: smiles, sdf");
            }

            IoError::Json(_) => {
                self.add("Input is not a valid graph batch");
                self.add("Expected a JSON object of the form {\"graphs\": [...]}");
                self.add("Every graph needs matching edge index and edge feature lengths");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid data (not UTF-8 text?)");
                self.add("Verify the file is not truncated or binary");
            }

            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn add_format_specific_parse_hints(&mut self, format: molgraph_forge::io::Format) {
        use molgraph_forge::io::Format;

        match format {
            Format::Smiles => {
                self.add("SMILES: Check that brackets, branches and ring digits are balanced");
                self.add("SMILES: Labels must be numbers separated from the SMILES by whitespace");
            }

            Format::Sdf => {
                self.add("SDF: Only V2000 connection tables are read");
                self.add("SDF: Check atom block and bond block column alignment");
            }

            Format::Json => {
                self.add("JSON: Encoded graphs are produced by `mgforge encode`");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
            self.add("Input appears to be from a terminal");
            self.add("Provide input via -i/--input or pipe data to stdin");
            return;
        }

        if msg.contains("--infmt") || msg.contains("format") {
            self.add("Pass --infmt smiles or --infmt sdf explicitly");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = err.to_string();

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

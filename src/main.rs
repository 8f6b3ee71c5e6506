//! CLI tool to inspect, validate, and format YCL files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use ycl::Parsed;

const SAMPLE: &str = "\
my_value = 1234,
my_object {
  field1 = 'YCL',
  field2 = true,
  field3 = null,
  field4 = [ 'item1', 42, 'item3' ]
},
another_value = `Hello $(my_object.field1) World!`
";

#[derive(Parser)]
#[command(name = "ycl", version, about = "Inspect, validate, and format YCL files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed tree
    Dump {
        /// Input file, `-` for stdin; parses a built-in sample when omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print the parsed tree as JSON
    Json {
        /// Input file, `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Check that files parse without diagnostics
    Validate {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
    /// Print files in canonical formatting
    Fmt {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
    /// Check that files are already in canonical formatting
    Check {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ok = match cli.command {
        Command::Dump { input } => dump(input.as_deref()),
        Command::Json { input } => json(&input),
        Command::Validate { files } => files.iter().fold(true, |ok, path| validate(path) && ok),
        Command::Fmt { files } => files.iter().fold(true, |ok, path| fmt(path) && ok),
        Command::Check { files } => files.iter().fold(true, |ok, path| check(path) && ok),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_source(path: &Path) -> Result<String, ycl::Error> {
    if is_stdin(path) {
        return Ok(io::read_to_string(io::stdin())?);
    }
    fs::read_to_string(path).map_err(|source| ycl::Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load(path: &Path) -> Result<Parsed, ycl::Error> {
    if is_stdin(path) {
        ycl::parse_reader(io::stdin().lock())
    } else {
        ycl::parse_file(path)
    }
}

/// Print every diagnostic; returns whether there were none.
fn report(path: &Path, parsed: &Parsed) -> bool {
    for error in &parsed.errors {
        eprintln!("{}: {error}", path.display());
    }
    parsed.is_ok()
}

fn dump(input: Option<&Path>) -> bool {
    let (path, parsed) = match input {
        Some(path) => match load(path) {
            Ok(parsed) => (path, parsed),
            Err(e) => {
                eprintln!("{e}");
                return false;
            }
        },
        None => (Path::new("<sample>"), ycl::parse(SAMPLE)),
    };

    print!("{}", ycl::dump(&parsed.file));
    report(path, &parsed)
}

fn json(path: &Path) -> bool {
    let parsed = match load(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };

    match serde_json::to_string_pretty(&parsed.file) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return false;
        }
    }
    report(path, &parsed)
}

fn validate(path: &Path) -> bool {
    let parsed = match load(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };

    if !report(path, &parsed) {
        return false;
    }

    let statements = parsed.file.statements.len();
    eprintln!("{}: valid ({statements} statement(s))", path.display());
    true
}

fn fmt(path: &Path) -> bool {
    let parsed = match load(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };

    // Formatting a partial tree would silently drop input.
    if !report(path, &parsed) {
        return false;
    }

    print!("{}", ycl::format(&parsed.file));
    true
}

fn check(path: &Path) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };

    let parsed = ycl::parse(&source);
    if !report(path, &parsed) {
        return false;
    }

    if ycl::format(&parsed.file) == source {
        eprintln!("{}: formatted", path.display());
        true
    } else {
        eprintln!("{}: not formatted", path.display());
        false
    }
}

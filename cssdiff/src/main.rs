use cssdiff_lib::compare;
use std::env;
use std::fs;
use thiserror::Error;

/// The only two user-facing failures. File content never fails, only file
/// presence and arguments; both messages go to stdout, matching the report
/// stream.
#[derive(Debug, Error)]
enum UsageError {
    #[error("Please specify an original file with the -v1 parameter and the comparison file with the -v2 parameter.")]
    MissingArgument,
    #[error("File \"{0}\" not found.")]
    FileNotFound(String),
}

/// Resolved stylesheet paths: the original (v1) and the revision (v2).
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    v1file: String,
    v2file: String,
}

/// Pairwise argument scan: a path is taken from the token following a
/// recognized flag, flags match case-insensitively, unrecognized tokens are
/// ignored, and the last occurrence of a flag wins.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Args {
    let mut parsed = Args::default();
    let mut last_arg = String::new();

    for arg in args {
        match last_arg.as_str() {
            "-v1" | "-v1file" | "-file1" => parsed.v1file = arg.clone(),
            "-v2" | "-v2file" | "-file2" => parsed.v2file = arg.clone(),
            _ => {}
        }
        last_arg = arg.to_lowercase();
    }

    parsed
}

fn read_stylesheet(path: &str) -> Result<String, UsageError> {
    // Missing and unreadable files are reported the same way.
    fs::read_to_string(path).map_err(|_| UsageError::FileNotFound(path.to_string()))
}

fn run() -> Result<String, UsageError> {
    let args = parse_args(env::args().skip(1));

    if args.v1file.is_empty() || args.v2file.is_empty() {
        return Err(UsageError::MissingArgument);
    }

    let original = read_stylesheet(&args.v1file)?;
    let revised = read_stylesheet(&args.v2file)?;
    log::info!(
        "comparing {} ({} bytes) against {} ({} bytes)",
        args.v1file,
        original.len(),
        args.v2file,
        revised.len()
    );

    Ok(compare(&original, &revised))
}

fn main() {
    env_logger::init();

    match run() {
        Ok(report) => print!("{report}"),
        Err(error) => println!("{error}"),
    }
}

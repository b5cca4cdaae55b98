//! CLI binary for the RKD parser
//!
//! Parses Race-Keeper (.rkd) telemetry files and exports Telemetry
//! Overlay CSV (30 Hz) and/or GPX 1.1 tracks (~5 Hz).

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use glob::{glob_with, MatchOptions};
use rkd_parser::{
    compute_export_path, export_to_gpx, parse_rkd_file, print_session_info, write_sample_rkd,
};
use std::path::{Path, PathBuf};

struct CliOptions {
    info_only: bool,
    csv: bool,
    gpx: bool,
    output_dir: Option<PathBuf>,
    sample: Option<usize>,
}

fn main() -> Result<()> {
    let matches = Command::new("RKD Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse Race-Keeper RKD telemetry files and export to CSV/GPX.")
        .arg(
            Arg::new("files")
                .help(".rkd files to parse (supports globbing)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("all-in")
                .long("all-in")
                .help("Process every .rkd file under DIR recursively")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help("Print the session summary only, export nothing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-csv")
                .long("no-csv")
                .help("Skip CSV export")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-gpx")
                .long("no-gpx")
                .help("Skip GPX export")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Write a truncated sample containing the first N GPS fixes, instead of exporting")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .get_matches();

    let options = CliOptions {
        info_only: matches.get_flag("info"),
        csv: !matches.get_flag("no-csv"),
        gpx: !matches.get_flag("no-gpx"),
        output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
        sample: matches.get_one::<usize>("sample").copied(),
    };

    let mut paths: Vec<PathBuf> = Vec::new();

    if let Some(patterns) = matches.get_many::<String>("files") {
        for pattern in patterns {
            if pattern.contains('*') || pattern.contains('?') {
                let expanded = glob_with(pattern, case_insensitive())
                    .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;
                for entry in expanded {
                    paths.push(entry?);
                }
            } else {
                paths.push(PathBuf::from(pattern));
            }
        }
    }

    if let Some(dir) = matches.get_one::<String>("all-in") {
        paths.extend(find_rkd_files(Path::new(dir))?);
    }

    if paths.is_empty() {
        bail!("No input files; pass .rkd files or --all-in DIR");
    }
    paths.sort();
    paths.dedup();

    if let Some(dir) = &options.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let mut processed = 0usize;
    let mut failed = 0usize;
    for path in &paths {
        match process_file(path, &options) {
            Ok(()) => processed += 1,
            Err(err) => {
                eprintln!("Error processing {}: {:#}", path.display(), err);
                failed += 1;
            }
        }
    }

    println!("Processed {} file(s), {} failed", processed, failed);
    if processed == 0 {
        bail!("All input files failed");
    }
    Ok(())
}

fn process_file(path: &Path, options: &CliOptions) -> Result<()> {
    let session = parse_rkd_file(path)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    print_session_info(&session);

    if options.info_only {
        return Ok(());
    }

    if let Some(max_fixes) = options.sample {
        let out = compute_export_path(&session, options.output_dir.as_deref(), "sample.rkd");
        let info = write_sample_rkd(path, &out, max_fixes)?;
        println!(
            "  Sample: {} ({} bytes, {} GPS fixes)",
            out.display(),
            info.bytes_written,
            info.gps_fixes
        );
        return Ok(());
    }

    if options.csv {
        #[cfg(feature = "csv")]
        {
            let out = compute_export_path(&session, options.output_dir.as_deref(), "csv");
            let rows = rkd_parser::export_to_csv(&session, &out)?;
            if rows > 0 {
                println!("  CSV: {} ({} rows at 30 Hz)", out.display(), rows);
            }
        }
        #[cfg(not(feature = "csv"))]
        eprintln!("  CSV export not compiled in (enable the `csv` feature)");
    }

    if options.gpx {
        let out = compute_export_path(&session, options.output_dir.as_deref(), "gpx");
        let points = export_to_gpx(&session, &out)?;
        if points > 0 {
            println!("  GPX: {} ({} trackpoints)", out.display(), points);
        }
    }

    Ok(())
}

/// Recursively collect .rkd files under `dir`, case-insensitive extension.
fn find_rkd_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.rkd", dir.display());
    let mut files = Vec::new();
    for entry in glob_with(&pattern, case_insensitive())
        .with_context(|| format!("Failed to scan directory {}", dir.display()))?
    {
        files.push(entry?);
    }
    Ok(files)
}

fn case_insensitive() -> MatchOptions {
    MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    }
}

// File: crates/mst-report/src/report.rs
// Summary: Orchestrates a report run: load results, then generate every chart in order.

use std::io::Write;
use std::path::PathBuf;

use crate::charts::ChartKind;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::loader::load_results;
use crate::summary::log_summary;

/// Load `cfg.input` and write all charts into `cfg.output_dir`, with status lines on stdout.
///
/// The first failure aborts the run; charts written before it stay on disk.
pub fn run(cfg: &ReportConfig) -> Result<Vec<PathBuf>> {
    run_with_output(cfg, &mut std::io::stdout().lock())
}

/// [`run`], writing the status lines to `out`.
pub fn run_with_output(cfg: &ReportConfig, out: &mut impl Write) -> Result<Vec<PathBuf>> {
    let data = load_results(&cfg.input)?;

    writeln!(out, "Generating plots...").map_err(ReportError::Output)?;
    let graphs = log_summary(&data);
    log::debug!("summarised {graphs} graphs from {}", cfg.input.display());

    let mut written = Vec::with_capacity(ChartKind::ALL.len());
    for kind in ChartKind::ALL {
        let path = kind.generate(&data, cfg)?;
        writeln!(out, "Saved {}", kind.file_name()).map_err(ReportError::Output)?;
        written.push(path);
    }

    writeln!(out, "\nAll plots generated successfully!").map_err(ReportError::Output)?;
    Ok(written)
}

/// Console line for a failed run.
pub fn error_line(err: &ReportError) -> String {
    format!("Error: {err}")
}

/// Binary entry point: run, then report any failure on `out` as an `Error: ` line.
///
/// Returns the process exit code, which is 0 whether or not the run succeeded.
pub fn report_main(cfg: &ReportConfig, out: &mut impl Write) -> i32 {
    if let Err(e) = run_with_output(cfg, &mut *out) {
        log::debug!("report run failed: {e:?}");
        if let Err(io) = writeln!(out, "{}", error_line(&e)) {
            log::warn!("could not print error: {io}");
        }
    }
    0
}

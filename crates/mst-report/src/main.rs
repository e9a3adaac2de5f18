// File: crates/mst-report/src/main.rs
// Summary: Renders the MST benchmark charts from ./output.json into the current directory.

use mst_report::{report, ReportConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Errors are reported on stdout; the exit status stays 0.
    let code = report::report_main(&ReportConfig::default(), &mut std::io::stdout().lock());
    std::process::exit(code);
}

use std::io::{self, Write};

use anyhow::Context;
use dat_engine::{load_thread, render_report, write_json_export, ExportOptions, LoadedThread};
use dat_logging::{dat_info, dat_warn};

use super::args::Args;
use super::logging;

pub fn run(args: &Args) -> anyhow::Result<()> {
    logging::initialize(args.log, args.log_level());

    let loaded = load_thread(&args.path, args.encoding.as_deref(), &args.parse_options())
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    log_summary(&loaded);

    let records = loaded.report.records();
    match &args.json {
        Some(dir) => {
            let path = write_json_export(dir, records, &ExportOptions::default())
                .with_context(|| format!("failed to export into {}", dir.display()))?;
            println!("{}", path.display());
        }
        None => {
            let report = render_report(records, &args.report_options());
            io::stdout()
                .lock()
                .write_all(report.as_bytes())
                .context("failed to write report")?;
        }
    }
    Ok(())
}

fn log_summary(loaded: &LoadedThread) {
    dat_info!(
        "{} posts from {} lines ({})",
        loaded.report.records().len(),
        loaded.line_count,
        loaded.encoding_label
    );
    if loaded.had_replacements {
        dat_warn!("some bytes could not be decoded and were replaced");
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn json_export_lands_in_requested_dir() {
        let temp = TempDir::new().unwrap();
        let dat = temp.path().join("thread.dat");
        fs::write(&dat, "a<>b<>2024/01/01 ID:x<>hello<>title\nbroken\n").unwrap();
        let out = temp.path().join("out");

        let argv: Vec<OsString> = vec![
            "dat_app".into(),
            dat.into_os_string(),
            "--encoding".into(),
            "utf-8".into(),
            "--json".into(),
            out.clone().into_os_string(),
        ];
        let args = Args::try_parse_from(argv).unwrap();
        run(&args).unwrap();

        let written = fs::read_to_string(out.join("thread.json")).unwrap();
        assert!(written.contains("\"post_count\": 1"));
        assert!(written.contains("\"user_id\": \"x\""));
    }

    #[test]
    fn missing_input_is_reported_with_context() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.dat");
        let argv: Vec<OsString> = vec!["dat_app".into(), missing.into_os_string()];
        let args = Args::try_parse_from(argv).unwrap();

        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("failed to load"));
    }
}

//! userdirs - CLI directory resolver
//!
//! Resolves the current user's config or data directory, or individual
//! Windows special folders given with --folder or a --request JSON file.
//! Results are reported as JSON messages on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use userdirs::models::{DirectoryKind, FolderId, LogLevel, ResolveRequest};
use userdirs::reporter::Reporter;
use userdirs::{Directory, Platform, Win32Directory};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "userdirs")]
#[command(about = "Resolve per-user directories and Windows special folders")]
#[command(version)]
struct Args {
    /// Special folder to resolve, by CSIDL name or alias (repeatable)
    #[arg(long = "folder")]
    folders: Vec<FolderId>,

    /// Per-user directory to resolve when no folder is given
    #[arg(long, value_enum)]
    kind: Option<DirectoryKind>,

    /// Path to a JSON request file listing folders to resolve
    #[arg(long)]
    request: Option<PathBuf>,

    /// Emit debug log messages
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    let reporter = Reporter::new(level);

    let result = run(&args, &reporter, Directory::for_user, &Win32Directory::native());
    ExitCode::from(finish(result, &reporter))
}

/// Report the outcome and return the process exit status.
fn finish(result: Result<()>, reporter: &Reporter) -> u8 {
    match result {
        Ok(()) => {
            reporter.send_complete(true);
            0
        }
        Err(e) => {
            reporter.send_error(&format!("{:#}", e));
            reporter.send_complete(false);
            1
        }
    }
}

fn run<F>(args: &Args, reporter: &Reporter, for_user: F, resolver: &Win32Directory) -> Result<()>
where
    F: FnOnce() -> userdirs::Result<Directory>,
{
    let mut folders = args.folders.clone();
    let mut kind = args.kind;

    if let Some(path) = &args.request {
        reporter.send_log(LogLevel::Debug, &format!("Loading request file: {:?}", path));
        let request = load_request(path)?;
        folders.extend(request.folders);
        kind = kind.or(request.kind);
    }

    reporter.send_log(
        LogLevel::Debug,
        &format!("Platform: {}", Platform::current().as_str()),
    );

    if folders.is_empty() {
        let kind = kind.unwrap_or_default();
        let directory = for_user().context("No directory layout for this platform")?;
        let path = directory
            .get(kind)
            .with_context(|| format!("Failed to resolve {} directory", kind.as_str()))?;
        reporter.send_resolved(kind.as_str(), &path);
        return Ok(());
    }

    reporter.send_log(
        LogLevel::Debug,
        &format!("Resolving {} folder(s) via {}", folders.len(), resolver.mechanism()),
    );

    for folder in folders {
        let resolution = resolver
            .resolve(folder)
            .with_context(|| format!("Failed to resolve {}", folder))?;

        if resolution.short_path {
            reporter.send_log(
                LogLevel::Debug,
                &format!("{}: using short path name", folder),
            );
        }
        reporter.send_resolved(folder.as_str(), &resolution.path);
    }

    Ok(())
}

fn load_request(path: &Path) -> Result<ResolveRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| "Failed to parse request file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use userdirs::directory::XdgDirectory;
    use userdirs::env_lookup::{EnvSource, EnvVarLookup};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn messages(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    fn xdg_home() -> userdirs::Result<Directory> {
        Ok(Directory::Xdg(XdgDirectory::new(EnvSource::fixed([("HOME", "/home/alice")]))))
    }

    fn env_resolver() -> Win32Directory {
        Win32Directory::new(
            None,
            None,
            Box::new(EnvVarLookup::new(EnvSource::fixed([
                ("APPDATA", r"C:\Users\Alice\AppData\Roaming"),
                ("USERPROFILE", r"C:\Users\Alice"),
            ]))),
        )
    }

    fn execute(argv: &[&str], resolver: &Win32Directory) -> (u8, Vec<serde_json::Value>) {
        let args = Args::try_parse_from(argv).unwrap();
        let out = Captured::default();
        let reporter = Reporter::to_writer(out.clone(), LogLevel::Info);

        let result = run(&args, &reporter, xdg_home, resolver);
        let status = finish(result, &reporter);
        (status, out.messages())
    }

    #[test]
    fn test_run_reports_each_folder_then_complete() {
        let (status, messages) = execute(
            &["userdirs", "--folder", "appdata", "--folder", "CSIDL_DOWNLOADS"],
            &env_resolver(),
        );

        assert_eq!(status, 0);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["type"], "resolved");
        assert_eq!(messages[0]["folder"], "CSIDL_APPDATA");
        assert_eq!(messages[0]["path"], r"C:\Users\Alice\AppData\Roaming");
        assert_eq!(messages[1]["folder"], "CSIDL_DOWNLOADS");
        assert_eq!(messages[1]["path"], r"C:\Users\Alice\Downloads");
        assert_eq!(messages[2]["type"], "complete");
        assert_eq!(messages[2]["success"], true);
    }

    #[test]
    fn test_run_failure_exits_with_error() {
        let (status, messages) = execute(&["userdirs", "--folder", "common-appdata"], &env_resolver());

        assert_eq!(status, 1);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["type"], "error");
        assert!(messages[0]["message"]
            .as_str()
            .unwrap()
            .contains("ALLUSERSPROFILE"));
        assert_eq!(messages[1]["type"], "complete");
        assert_eq!(messages[1]["success"], false);
    }

    #[test]
    fn test_kind_flag_overrides_request_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"kind": "config"}}"#).unwrap();
        let request = file.path().to_str().unwrap();

        let (status, messages) = execute(
            &["userdirs", "--kind", "data", "--request", request],
            &env_resolver(),
        );

        assert_eq!(status, 0);
        assert_eq!(messages[0]["folder"], "data");
        assert_eq!(messages[0]["path"], "/home/alice/.local/share");
    }

    #[test]
    fn test_request_kind_used_without_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"kind": "config"}}"#).unwrap();
        let request = file.path().to_str().unwrap();

        let (_, messages) = execute(&["userdirs", "--request", request], &env_resolver());

        assert_eq!(messages[0]["folder"], "config");
        assert_eq!(messages[0]["path"], "/home/alice/.config");
    }

    #[test]
    fn test_args_parse_names_and_aliases() {
        let args = Args::try_parse_from([
            "userdirs",
            "--folder",
            "CSIDL_APPDATA",
            "--folder",
            "downloads",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.folders, vec![FolderId::AppData, FolderId::Downloads]);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_reject_unknown_folder() {
        assert!(Args::try_parse_from(["userdirs", "--folder", "CSIDL_FONTS"]).is_err());
    }

    #[test]
    fn test_args_kind() {
        let args = Args::try_parse_from(["userdirs", "--kind", "data"]).unwrap();
        assert_eq!(args.kind, Some(DirectoryKind::Data));
    }

    #[test]
    fn test_load_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"folders": ["CSIDL_MYMUSIC"]}}"#).unwrap();

        let request = load_request(file.path()).unwrap();
        assert_eq!(request.folders, vec![FolderId::MyMusic]);
    }

    #[test]
    fn test_load_request_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_request(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse request file"));
    }
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use event_handlers_core::error::HandlerError;
use event_handlers_lambda::adapters::env::{
    load_greeting_config, load_result_status, ProcessEnvironment,
};
use event_handlers_lambda::handlers::greeting::GreetingHandler;
use event_handlers_lambda::handlers::storage_notification::handle_storage_notification_payload;
use event_handlers_lambda::handlers::upstream_result::UpstreamResultHandler;
use event_handlers_lambda::telemetry::init_tracing;
use lambda_runtime::Context;
use serde_json::Value;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_BINARIES: [&str; 3] = [
    "storage_notification_lambda",
    "upstream_result_lambda",
    "greeting_lambda",
];

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the event handlers workspace",
    long_about = "A unified CLI for invoking handlers locally, packaging Lambda\n\
                  artifacts, and running CI checks in the event handlers workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one handler against a JSON event file and print its response
    Invoke {
        /// Handler to run
        #[arg(value_enum, long)]
        handler: HandlerKind,
        /// Event payload file; omitted means `{}`
        #[arg(long)]
        event: Option<PathBuf>,
    },
    /// Build and package Rust Lambda artifacts as bootstrap zips
    Package {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
        /// Output directory for zip artifacts
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,
    },
    /// Run CI checks (fmt, clippy, tests)
    Ci,
}

#[derive(Clone, Copy, ValueEnum)]
enum HandlerKind {
    /// S3 object-created notification
    StorageNotification,
    /// Second stage of a step-function pipeline (reads RESULT_STATUS)
    UpstreamResult,
    /// Direct invocation (reads FUNCTION_TYPE and STAGE)
    Greeting,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── local invocation ───────────────────────────────────────────────

fn read_event(path: Option<&Path>) -> Value {
    let Some(path) = path else {
        return Value::Object(Default::default());
    };
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|error| panic!("failed to read event file '{}': {error}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|error| panic!("event file '{}' is not JSON: {error}", path.display()))
}

fn invoke_handler(handler: HandlerKind, event: Value) -> Result<Value, HandlerError> {
    let response = match handler {
        HandlerKind::StorageNotification => {
            serde_json::to_value(handle_storage_notification_payload(event)?)
        }
        HandlerKind::UpstreamResult => {
            let handler = UpstreamResultHandler::new(load_result_status(&ProcessEnvironment)?);
            serde_json::to_value(handler.handle_payload(event)?)
        }
        HandlerKind::Greeting => {
            let handler = GreetingHandler::new(load_greeting_config(&ProcessEnvironment)?);
            serde_json::to_value(handler.handle(&event, &Context::default()))
        }
    };
    Ok(response.expect("handler responses always serialize"))
}

// ── packaging ──────────────────────────────────────────────────────

fn package_lambdas(target: &str, profile: BuildProfile, dist_dir: &Path) {
    ensure_rust_target_installed(target);
    ensure_c_linker_available(target);

    step("Build lambda binaries");

    let mut cargo_args = vec!["build", "-p", "event_handlers_lambda", "--target", target];
    for bin in LAMBDA_BINARIES {
        cargo_args.extend(["--bin", bin]);
    }
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package lambda zip artifacts");
    let target_dir = Path::new("target").join(target).join(profile.dir_name());
    fs::create_dir_all(dist_dir).expect("failed to create lambda dist directory");

    let mut packaged = Vec::with_capacity(LAMBDA_BINARIES.len());
    for bin in LAMBDA_BINARIES {
        let zip_path = dist_dir.join(format!("{bin}.zip"));
        package_lambda_zip(&target_dir.join(binary_name(bin, target)), &zip_path);
        packaged.push(zip_path);
    }

    eprintln!("\nPackaged artifacts:");
    for path in packaged {
        eprintln!("- {}", path.display());
    }
}

fn ensure_rust_target_installed(target: &str) {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output();

    let output = match output {
        Ok(value) => value,
        Err(error) => {
            eprintln!(
                "warning: failed to run `rustup target list --installed` ({error}); continuing without target preflight"
            );
            return;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "failed to list installed rust targets; run `rustup target list --installed` manually. details: {}",
            stderr.trim()
        );
    }

    let installed = String::from_utf8_lossy(&output.stdout);
    if !installed.lines().any(|line| line.trim() == target) {
        panic!(
            "required rust target `{target}` is not installed. install it with `rustup target add {target}` and re-run `cargo run -p xtask -- package`"
        );
    }
}

fn ensure_c_linker_available(target: &str) {
    if !cfg!(windows) || !target.ends_with("unknown-linux-gnu") {
        return;
    }

    let env_override_keys = [
        format!("CC_{}", target.replace('-', "_")),
        format!("CC_{target}"),
        "TARGET_CC".to_string(),
        "CC".to_string(),
    ];

    for key in env_override_keys {
        if let Ok(value) = std::env::var(&key) {
            let candidate = value.trim();
            if !candidate.is_empty() && tool_works(candidate) {
                return;
            }
        }
    }

    let canonical = "x86_64-linux-gnu-gcc";
    if tool_works(canonical) {
        return;
    }

    panic!(
        "missing C cross-linker for target `{target}`. install `{canonical}` (or set CC_x86_64_unknown_linux_gnu) before running `cargo run -p xtask -- package`."
    );
}

fn tool_works(program: &str) -> bool {
    let mut parts = program.split_whitespace();
    let Some(bin) = parts.next() else {
        return false;
    };
    let args: Vec<&str> = parts.collect();

    Command::new(bin)
        .args(&args)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn binary_name(bin_name: &str, target: &str) -> String {
    if target.contains("windows") {
        format!("{bin_name}.exe")
    } else {
        bin_name.to_string()
    }
}

fn package_lambda_zip(binary_path: &Path, zip_path: &Path) {
    if !binary_path.exists() {
        panic!("expected lambda binary at '{}'", binary_path.display());
    }

    let binary = fs::read(binary_path).expect("failed to read lambda binary");
    let file = fs::File::create(zip_path).expect("failed to create lambda zip");
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .expect("failed to start bootstrap entry in lambda zip");
    zip.write_all(&binary)
        .expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish lambda zip");
}

// ── CI ─────────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test event_handlers_core");
    run_cargo(&["test", "-p", "event_handlers_core"]);

    step("Test event_handlers_lambda");
    run_cargo(&["test", "-p", "event_handlers_lambda"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke { handler, event } => {
            init_tracing();
            let payload = read_event(event.as_deref());
            match invoke_handler(handler, payload) {
                Ok(response) => {
                    let rendered = serde_json::to_string_pretty(&response)
                        .expect("response value should render");
                    println!("{rendered}");
                }
                Err(error) => {
                    eprintln!("invocation failed: {error}");
                    exit(1);
                }
            }
        }
        Commands::Package {
            target,
            profile,
            out_dir,
        } => {
            package_lambdas(&target, profile, &out_dir);
        }
        Commands::Ci => {
            ci_check();
            eprintln!("\nCI job passed.");
        }
    }
}

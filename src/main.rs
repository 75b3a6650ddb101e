//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg` and
//! serves `static/` locally. The port comes from `RIPPLES_PORT` (default 8000).

use std::env;
use std::process::{Command, ExitCode};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    match env::var("RIPPLES_PORT") {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("ignoring invalid RIPPLES_PORT `{}`", value);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn main() -> ExitCode {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return ExitCode::SUCCESS;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    let port = port();
    println!("Serving static/ at http://127.0.0.1:{} …", port);
    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .status();
    match status {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("failed to start http server: {}", err);
            ExitCode::FAILURE
        }
    }
}

use std::env;
use std::process::Command;

fn main() {
    // Record the compiler version so the banner can show what built the binary
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = match Command::new(&rustc).arg("--version").output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "rustc (unknown)".to_string(),
    };

    println!("cargo:rustc-env=SYSFETCH_RUSTC_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=RUSTC");
}

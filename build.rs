//! Build script: embeds the version string as `RECASE_VERSION`.

use std::process::Command;

fn main() {
    // RECASE_VERSION wins (release builds set it), then git describe.
    if let Ok(version) = std::env::var("RECASE_VERSION") {
        println!("cargo:rustc-env=RECASE_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=RECASE_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=RECASE_VERSION");
}

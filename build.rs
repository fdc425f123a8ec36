use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    let package_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let version = match output {
        Ok(o) if o.status.success() => {
            let git_output = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Strip 'v' prefix if present (e.g., "v1.0.0" -> "1.0.0")
            let version = git_output.strip_prefix('v').unwrap_or(&git_output);

            // Only tag-shaped output is a usable version; a bare commit hash is not
            if version.is_empty() || !version.starts_with(|c: char| c.is_ascii_digit()) {
                package_version
            } else {
                version.to_string()
            }
        }
        // Not a git checkout (e.g. a published crate): use the manifest version
        _ => package_version,
    };

    println!("cargo:rustc-env=PROOF_SDK_VERSION={}", version);
}

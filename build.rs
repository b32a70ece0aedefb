fn main() {
    // Rebuild when the checked-out commit changes so the version string stays current.
    if let Some(git_dir) = git_stdout(&["rev-parse", "--git-dir"]) {
        for path in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            let full = std::path::Path::new(&git_dir).join(path);
            if full.exists() {
                println!("cargo:rerun-if-changed={}", full.display());
            }
        }
    }

    if let Some(describe) = git_stdout(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={describe}");
    }
}

fn git_stdout(args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git").args(args).output().ok()?;
    let text = std::str::from_utf8(&output.stdout).ok()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

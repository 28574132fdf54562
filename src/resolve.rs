//! Import-path to directory resolution and its inverse.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::{environ_pairs, Env};
use crate::error::{Error, Result};
use crate::util::{clean, from_slash, search_roots, to_slash};

/// Returns the filesystem directory containing `import_path`.
///
/// `go list` is asked first, with the child environment set exactly to
/// `env.environ()`, so GOPATH and module settings are honored as the caller
/// configured them. The listing fails when the target directory exists but
/// holds no buildable sources, so any listing failure falls back to scanning
/// `<root>/src/<import_path>` across the GOPATH roots in priority order.
pub fn dir(env: &dyn Env, import_path: &str) -> Result<PathBuf> {
    match go_list_dir(env, import_path) {
        Ok(listed) => return Ok(listed),
        Err(err) => {
            tracing::debug!(import_path, error = %err, "go list failed, scanning GOPATH roots");
        }
    }

    let relative = from_slash(import_path);
    for root in search_roots(env) {
        let candidate = root.join("src").join(&relative);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }
    Err(Error::DirNotFound(import_path.to_string()))
}

/// Returns the import path that resolves to `package_dir`.
///
/// The directory is cleaned lexically, then matched against each search
/// root's `src` tree in priority order. The first root for which the
/// directory is a proper descendant wins; the root's `src` directory itself
/// never maps to an import path.
pub fn path(env: &dyn Env, package_dir: &Path) -> Result<String> {
    let package_dir = clean(package_dir);
    for root in search_roots(env) {
        let src = clean(&root.join("src"));
        if let Ok(relative) = package_dir.strip_prefix(&src) {
            if let Some(import_path) = to_slash(relative) {
                return Ok(import_path);
            }
        }
    }
    Err(Error::PathNotFound(package_dir))
}

/// One `go list -f {{.Dir}} <import_path>` invocation, blocking until exit.
/// Every failure mode is reported as [`Error::GoList`] so the caller can
/// fall back to the filesystem scan.
fn go_list_dir(env: &dyn Env, import_path: &str) -> Result<PathBuf> {
    let go = which::which("go").map_err(|err| Error::GoList {
        import_path: import_path.to_string(),
        reason: err.to_string(),
    })?;

    let mut command = Command::new(go);
    command
        .args(["list", "-f", "{{.Dir}}", import_path])
        .env_clear();
    let environ = env.environ();
    for (key, value) in environ_pairs(&environ) {
        command.env(key, value);
    }

    let output = command.output().map_err(|err| Error::GoList {
        import_path: import_path.to_string(),
        reason: format!("spawn failed: {err}"),
    })?;
    if !output.status.success() {
        let status = output
            .status
            .code()
            .map_or_else(|| "terminated by signal".to_string(), |code| format!("exit {code}"));
        return Err(Error::GoList {
            import_path: import_path.to_string(),
            reason: format!(
                "{status}: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let listed = stdout.trim();
    if listed.is_empty() {
        return Err(Error::GoList {
            import_path: import_path.to_string(),
            reason: "empty directory output".to_string(),
        });
    }
    Ok(PathBuf::from(listed))
}

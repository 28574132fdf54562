//! Declared-package-name resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::util::{from_slash, search_roots};

/// Returns the package name declared by the source files at `import_path`.
///
/// `source_dir` picks which on-disk copy of `import_path` is meant: vendor
/// trees are searched upward from `source_dir` before the GOPATH roots, so
/// two directories vendoring the same logical path can resolve to different
/// packages. The declared name may differ from the last path segment.
pub fn name(env: &dyn Env, import_path: &str, source_dir: &Path) -> Result<String> {
    let meta = fs::metadata(source_dir).map_err(|source| Error::SourceDir {
        dir: source_dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(Error::SourceDir {
            dir: source_dir.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let package_dir = candidate_dirs(env, import_path, source_dir)
        .into_iter()
        .find(|dir| has_sources(dir))
        .ok_or_else(|| Error::Resolution {
            import_path: import_path.to_string(),
            reason: "no package directory with Go sources found".to_string(),
        })?;

    declared_name(&package_dir, import_path)
}

/// Candidate directories in priority order: `vendor/<path>` for each
/// ancestor of `source_dir` (nearest first), then `<root>/src/<path>` for
/// each search root.
fn candidate_dirs(env: &dyn Env, import_path: &str, source_dir: &Path) -> Vec<PathBuf> {
    let relative = from_slash(import_path);
    let mut dirs = Vec::new();
    let mut ancestor = Some(source_dir);
    while let Some(dir) = ancestor {
        dirs.push(dir.join("vendor").join(&relative));
        ancestor = dir.parent();
    }
    for root in search_roots(env) {
        dirs.push(root.join("src").join(&relative));
    }
    dirs
}

fn has_sources(dir: &Path) -> bool {
    go_sources(dir).map(|files| !files.is_empty()).unwrap_or(false)
}

/// Buildable `.go` files in `dir`, sorted by file name. Test files and
/// files the Go toolchain ignores (leading `.` or `_`) are skipped.
fn go_sources(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if file_name.ends_with(".go")
            && !file_name.ends_with("_test.go")
            && !file_name.starts_with('.')
            && !file_name.starts_with('_')
        {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn declared_name(package_dir: &Path, import_path: &str) -> Result<String> {
    let files = go_sources(package_dir).map_err(|err| Error::Resolution {
        import_path: import_path.to_string(),
        reason: format!("reading {}: {err}", package_dir.display()),
    })?;

    let mut declared: Option<String> = None;
    for file in files {
        let source = fs::read_to_string(&file).map_err(|err| Error::Resolution {
            import_path: import_path.to_string(),
            reason: format!("reading {}: {err}", file.display()),
        })?;
        let Some(clause) = package_clause(&source) else {
            continue;
        };
        match &declared {
            None => declared = Some(clause),
            Some(existing) if *existing != clause => {
                return Err(Error::Resolution {
                    import_path: import_path.to_string(),
                    reason: format!(
                        "conflicting package clauses {existing} and {clause} in {}",
                        package_dir.display()
                    ),
                });
            }
            Some(_) => {}
        }
    }

    declared.ok_or_else(|| Error::Resolution {
        import_path: import_path.to_string(),
        reason: format!("no package clause in {}", package_dir.display()),
    })
}

/// Extracts the identifier from a source file's package clause. Only
/// comments and whitespace may precede the clause, so skipping those and
/// matching the next token is sufficient.
fn package_clause(source: &str) -> Option<String> {
    static CLAUSE: OnceLock<Regex> = OnceLock::new();
    let clause = CLAUSE
        .get_or_init(|| Regex::new(r"^package\s+([A-Za-z_][A-Za-z0-9_]*)").expect("static regex"));

    let mut rest = source;
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("//") {
            rest = after.split_once('\n').map(|(_, tail)| tail).unwrap_or("");
        } else if let Some(after) = rest.strip_prefix("/*") {
            // an unterminated block comment means no clause
            rest = after.split_once("*/").map(|(_, tail)| tail)?;
        } else {
            break;
        }
    }
    clause.captures(rest).map(|captures| captures[1].to_string())
}

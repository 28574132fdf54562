//! Shared fixture for building throwaway GOPATH trees.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use gosrc::MapEnv;

/// One or more temporary GOPATH roots, listed in priority order.
pub struct GopathFixture {
    roots: Vec<TempDir>,
}

impl GopathFixture {
    pub fn new(root_count: usize) -> Result<Self> {
        let roots = (0..root_count)
            .map(|_| TempDir::new().context("create gopath root"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { roots })
    }

    pub fn root(&self, index: usize) -> &Path {
        self.roots[index].path()
    }

    /// An environment whose GOPATH lists every root in fixture order.
    pub fn env(&self) -> MapEnv {
        let gopath = env::join_paths(self.roots.iter().map(|root| root.path()))
            .expect("join gopath roots")
            .into_string()
            .expect("utf-8 gopath");
        MapEnv::new().with("GOPATH", gopath)
    }

    /// Creates `<root>/src/<import_path>` and returns it.
    pub fn package_dir(&self, root: usize, import_path: &str) -> Result<PathBuf> {
        let dir = self
            .root(root)
            .join("src")
            .join(import_path.split('/').collect::<PathBuf>());
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(dir)
    }

    /// Creates a vendored copy of `import_path` under `base/vendor`.
    #[allow(dead_code)]
    pub fn vendor_dir(&self, base: &Path, import_path: &str) -> Result<PathBuf> {
        let dir = base
            .join("vendor")
            .join(import_path.split('/').collect::<PathBuf>());
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(dir)
    }
}

/// Writes a minimal Go source file declaring `package_name`.
pub fn write_source(dir: &Path, file: &str, package_name: &str) -> Result<()> {
    let path = dir.join(file);
    fs::write(&path, format!("package {package_name}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

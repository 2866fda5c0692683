// File: src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

// Allow injecting a base path (from the mobile shell)
static MOBILE_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub struct AppPaths;

impl AppPaths {
    /// Initialize the mobile data directory. Must be called once at startup.
    pub fn init_mobile_path(path: String) {
        let _ = MOBILE_DATA_DIR.set(PathBuf::from(path));
    }

    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "rmdex", "rmdex")
    }

    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    fn resolve_base(subdir: &str) -> Option<PathBuf> {
        // 1. Mobile override: everything lives in the app's private files directory.
        if let Some(root) = MOBILE_DATA_DIR.get() {
            return Some(root.join(subdir));
        }

        // 2. Test override
        if let Ok(test_dir) = env::var("RMDEX_TEST_DIR") {
            return Some(PathBuf::from(test_dir).join(subdir));
        }

        // 3. Standard OS location
        let proj = Self::get_proj_dirs()?;
        let dir = match subdir {
            "config" => proj.config_dir(),
            "cache" => proj.cache_dir(),
            _ => return None,
        };
        Some(dir.to_path_buf())
    }

    pub fn get_config_dir() -> Result<PathBuf> {
        let path = Self::resolve_base("config")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::ensure_exists(path)
    }

    pub fn get_cache_dir() -> Result<PathBuf> {
        let path = Self::resolve_base("cache")
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))?;
        Self::ensure_exists(path)
    }

    pub fn get_config_file_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn get_log_dir() -> Result<PathBuf> {
        Self::ensure_exists(Self::get_cache_dir()?.join("logs"))
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration, loadable from TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root of the servable static tree extraction targets.
    pub static_root: PathBuf,
    /// Path of the embedded registry database.
    pub registry_path: PathBuf,
    /// Maximum accepted upload size in bytes.
    pub max_upload_size: u64,
    /// Which archive backend to run against.
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
            static_root: PathBuf::from("static"),
            registry_path: PathBuf::from("registry.db"),
            max_upload_size: 256 * 1024 * 1024,
            storage: StorageConfig::default(),
        }
    }
}

/// Archive backend selection.
///
/// Chosen by configuration at construction time; the server never switches
/// backends at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Archives on local disk under `archive_root`.
    Local { archive_root: PathBuf },
    /// Archives in an S3-compatible bucket under `prefix`.
    ///
    /// Credentials come from the environment; `endpoint` points at a
    /// non-AWS S3-compatible service when set.
    S3 {
        bucket: String,
        prefix: String,
        endpoint: Option<String>,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::Local {
            archive_root: PathBuf::from("archives"),
        }
    }
}

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use docshelf_backend::{ArchiveBackend, LocalBackend, RemoteBackend};
use docshelf_registry::{Registry, SledRegistry};
use docshelf_server::{DocServer, ServerConfig, StorageConfig};
use docshelf_storage::{DocStorage, Extractor};
use object_store::aws::AmazonS3Builder;

use crate::cli::{Cli, Command, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let registry: Arc<dyn Registry> = Arc::new(
        SledRegistry::open(&config.registry_path)
            .with_context(|| format!("opening registry at {}", config.registry_path.display()))?,
    );
    let backend = build_backend(&config.storage)?;
    let extractor = Extractor::new(&config.static_root)?;
    let storage = Arc::new(DocStorage::new(registry, backend, extractor));

    // Re-extract everything durable so the registry reflects the archives,
    // not whatever the previous process left behind.
    let indexed = storage
        .initialize()
        .await
        .context("bootstrapping from durable archives")?;
    tracing::info!(indexed, "bootstrap re-index complete");

    DocServer::new(config, storage).serve().await?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(ServerConfig::default()),
    }
}

fn build_backend(storage: &StorageConfig) -> anyhow::Result<Arc<dyn ArchiveBackend>> {
    match storage {
        StorageConfig::Local { archive_root } => {
            let backend = LocalBackend::new(archive_root)
                .with_context(|| format!("opening archive root {}", archive_root.display()))?;
            Ok(Arc::new(backend))
        }
        StorageConfig::S3 {
            bucket,
            prefix,
            endpoint,
        } => {
            let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
            if let Some(endpoint) = endpoint {
                builder = builder.with_endpoint(endpoint).with_allow_http(true);
            }
            let store = builder
                .build()
                .with_context(|| format!("connecting to S3 bucket {bucket}"))?;
            Ok(Arc::new(RemoteBackend::new(
                Arc::new(store),
                prefix.clone(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_path_falls_back_to_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docshelf.toml");
        std::fs::write(
            &path,
            r#"
                bind_addr = "127.0.0.1:9999"
                static_root = "static"
                registry_path = "registry.db"
                max_upload_size = 1024

                [storage]
                kind = "local"
                archive_root = "archives"
            "#,
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9999".parse().unwrap());
        assert_eq!(config.max_upload_size, 1024);
    }

    #[test]
    fn local_backend_is_built_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageConfig::Local {
            archive_root: dir.path().join("archives"),
        };
        assert!(build_backend(&storage).is_ok());
    }
}

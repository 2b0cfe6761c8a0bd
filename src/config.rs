// file: src/config.rs
// description: environment configuration and embeddings manifest loading
// reference: https://docs.rs/dotenvy

use crate::error::{ReindexError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const ENDPOINT_VAR: &str = "DGRAPH_GRPC";
pub const ADMIN_KEY_VAR: &str = "DGRAPH_ADMIN_KEY";

/// Substring marking an endpoint as Dgraph Cloud. Fragile heuristic, kept
/// because the cluster exposes no better signal.
const CLOUD_HOST_MARKER: &str = "cloud.dgraph";

#[derive(Debug, Clone)]
pub struct DgraphConfig {
    pub grpc_endpoint: String,
    pub admin_key: Option<String>,
}

impl DgraphConfig {
    /// Reads `DGRAPH_GRPC` and `DGRAPH_ADMIN_KEY` from the environment,
    /// honoring a `.env` file when present. The admin key is required only
    /// for cloud endpoints.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let endpoint = std::env::var(ENDPOINT_VAR).ok();
        let admin_key = std::env::var(ADMIN_KEY_VAR).ok();
        Self::from_values(endpoint, admin_key)
    }

    fn from_values(endpoint: Option<String>, admin_key: Option<String>) -> Result<Self> {
        let grpc_endpoint = endpoint
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ReindexError::Config(format!("{ENDPOINT_VAR} must be defined")))?;

        let config = Self {
            grpc_endpoint,
            admin_key: admin_key.filter(|k| !k.is_empty()),
        };

        if config.is_cloud() && config.admin_key.is_none() {
            return Err(ReindexError::Config(format!(
                "{ADMIN_KEY_VAR} must be defined for cloud endpoint {}",
                config.grpc_endpoint
            )));
        }

        Ok(config)
    }

    pub fn is_cloud(&self) -> bool {
        self.grpc_endpoint.contains(CLOUD_HOST_MARKER)
    }

    /// Endpoint in URI form for the gRPC channel. Self-hosted clusters are
    /// usually given as bare `host:port`, which the tonic channel rejects
    /// without a scheme.
    pub fn channel_endpoint(&self) -> String {
        if self.grpc_endpoint.contains("://") {
            self.grpc_endpoint.clone()
        } else {
            format!("http://{}", self.grpc_endpoint)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingDefinition {
    pub entity_type: String,
    pub attribute: String,
    pub index: String,
}

impl EmbeddingDefinition {
    /// Predicate name as stored in the Dgraph schema.
    pub fn predicate(&self) -> String {
        format!("{}.{}", self.entity_type, self.attribute)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingManifest {
    pub embeddings: Vec<EmbeddingDefinition>,
}

impl EmbeddingManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| ReindexError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&data).map_err(|e| ReindexError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn def(entity_type: &str, attribute: &str, index: &str) -> EmbeddingDefinition {
        EmbeddingDefinition {
            entity_type: entity_type.to_string(),
            attribute: attribute.to_string(),
            index: index.to_string(),
        }
    }

    #[test]
    fn test_predicate_derivation() {
        let d = def("Doc", "vec", "hnsw(metric:cosine)");
        assert_eq!(d.predicate(), "Doc.vec");
    }

    #[test]
    fn test_missing_endpoint_is_fatal() {
        let err = DgraphConfig::from_values(None, None).unwrap_err();
        assert!(err.to_string().contains("DGRAPH_GRPC"));
    }

    #[test]
    fn test_on_prem_needs_no_admin_key() {
        let config = DgraphConfig::from_values(Some("localhost:9080".into()), None).unwrap();
        assert!(!config.is_cloud());
        assert!(config.admin_key.is_none());
    }

    #[test]
    fn test_cloud_endpoint_requires_admin_key() {
        let endpoint = "frozen-leaf.grpc.eu-central-1.aws.cloud.dgraph.io";
        let err = DgraphConfig::from_values(Some(endpoint.into()), None).unwrap_err();
        assert!(err.to_string().contains("DGRAPH_ADMIN_KEY"));

        let config =
            DgraphConfig::from_values(Some(endpoint.into()), Some("key".into())).unwrap();
        assert!(config.is_cloud());
    }

    #[test]
    fn test_channel_endpoint_gets_scheme() {
        let config = DgraphConfig::from_values(Some("localhost:9080".into()), None).unwrap();
        assert_eq!(config.channel_endpoint(), "http://localhost:9080");

        let config = DgraphConfig::from_values(Some("https://db.example.com:443".into()), None)
            .unwrap();
        assert_eq!(config.channel_endpoint(), "https://db.example.com:443");
    }

    #[test]
    fn test_manifest_parsing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"embeddings":[
                {{"entityType":"Doc","attribute":"vec","index":"hnsw(metric:cosine)"}},
                {{"entityType":"Product","attribute":"embedding","index":"hnsw(metric:euclidean)"}}
            ]}}"#
        )
        .unwrap();

        let manifest = EmbeddingManifest::load(file.path()).unwrap();
        assert_eq!(manifest.embeddings.len(), 2);
        assert_eq!(
            manifest.embeddings[0],
            def("Doc", "vec", "hnsw(metric:cosine)")
        );
        assert_eq!(manifest.embeddings[1].predicate(), "Product.embedding");
    }

    #[test]
    fn test_manifest_missing_file() {
        let err = EmbeddingManifest::load(Path::new("./does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ReindexError::Manifest { .. }));
    }

    #[test]
    fn test_manifest_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"embeddings\": [{{\"entityType\": 1}}]}}").unwrap();

        let err = EmbeddingManifest::load(file.path()).unwrap_err();
        assert!(matches!(err, ReindexError::Manifest { .. }));
    }
}

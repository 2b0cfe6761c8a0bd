// file: src/database/client.rs
// description: Dgraph client wrapper with on-prem and cloud connection paths
// reference: https://docs.rs/dgraph-tonic

use crate::config::DgraphConfig;
use crate::error::{ReindexError, Result};
use dgraph_tonic::{Client, Operation, Payload, SlashQlClient, TlsClient};
use tracing::{debug, info};

/// The cloud and on-prem handshakes yield distinct client types in
/// dgraph-tonic, so the handle keeps whichever variant was opened.
enum ClientHandle {
    Default(Client),
    SlashQl(SlashQlClient),
}

pub struct DgraphClient {
    client: ClientHandle,
}

impl DgraphClient {
    /// Builds the single client handle for the run. An admin key selects the
    /// cloud handshake; otherwise a plain gRPC channel is opened to the
    /// endpoint, which is assumed reachable without further authentication.
    pub fn connect(config: &DgraphConfig) -> Result<Self> {
        let client = match &config.admin_key {
            Some(admin_key) => {
                info!("Connecting to Dgraph Cloud at {}", config.grpc_endpoint);
                TlsClient::for_slash_ql(config.grpc_endpoint.as_str(), admin_key.as_str())
                    .map(ClientHandle::SlashQl)
            }
            None => {
                info!("Connecting to Dgraph at {}", config.grpc_endpoint);
                Client::new(config.channel_endpoint()).map(ClientHandle::Default)
            }
        }
        .map_err(|e| ReindexError::Connection {
            endpoint: config.grpc_endpoint.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { client })
    }

    /// Issues one schema alteration and waits for the server to acknowledge
    /// it. Index drops return immediately; index builds block until the
    /// server has scheduled the rebuild.
    pub async fn alter_schema(&self, predicate: &str, schema: String) -> Result<Payload> {
        debug!("Altering schema: {}", schema);

        let op = Operation {
            schema,
            ..Default::default()
        };

        match &self.client {
            ClientHandle::Default(client) => client.alter(op).await,
            ClientHandle::SlashQl(client) => client.alter(op).await,
        }
        .map_err(|e| ReindexError::Schema {
            predicate: predicate.to_string(),
            message: e.to_string(),
        })
    }
}

// file: src/database/schema.rs
// description: vector predicate schema statements and index mutations
// reference: https://dgraph.io/docs/query-language/schema

use crate::database::client::DgraphClient;
use crate::error::Result;
use tracing::info;

/// Schema statement declaring `predicate` as an unindexed vector. Altering
/// to this drops any existing index structures for the predicate.
pub fn unindexed_statement(predicate: &str) -> String {
    format!("{predicate}: float32vector .")
}

/// Schema statement declaring `predicate` as a vector indexed with `index`,
/// an opaque descriptor such as `hnsw(metric: "cosine")`. The descriptor is
/// passed through verbatim; the server validates it.
pub fn indexed_statement(predicate: &str, index: &str) -> String {
    format!("{predicate}: float32vector @index({index}) .")
}

pub struct SchemaManager<'a> {
    client: &'a DgraphClient,
}

impl<'a> SchemaManager<'a> {
    pub fn new(client: &'a DgraphClient) -> Self {
        Self { client }
    }

    pub async fn drop_index(&self, predicate: &str) -> Result<()> {
        info!("Removing index for {}", predicate);

        let payload = self
            .client
            .alter_schema(predicate, unindexed_statement(predicate))
            .await?;

        info!("Server response: {:?}", payload);
        Ok(())
    }

    pub async fn create_index(&self, predicate: &str, index: &str) -> Result<()> {
        info!("Creating index for {} {}", predicate, index);

        let payload = self
            .client
            .alter_schema(predicate, indexed_statement(predicate, index))
            .await?;

        info!("Server response: {:?}", payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unindexed_statement() {
        assert_eq!(unindexed_statement("Doc.vec"), "Doc.vec: float32vector .");
    }

    #[test]
    fn test_indexed_statement() {
        assert_eq!(
            indexed_statement("Doc.vec", "hnsw(metric:cosine)"),
            "Doc.vec: float32vector @index(hnsw(metric:cosine)) ."
        );
    }

    #[test]
    fn test_index_descriptor_passed_verbatim() {
        let descriptor = "hnsw(metric: \"euclidean\", exponent: \"6\")";
        assert_eq!(
            indexed_statement("Product.embedding", descriptor),
            "Product.embedding: float32vector @index(hnsw(metric: \"euclidean\", exponent: \"6\")) ."
        );
    }
}

// file: src/reindex.rs
// description: predicate selection and the drop-then-create driver loop
// reference: internal orchestration

use crate::config::EmbeddingDefinition;
use crate::database::{DgraphClient, SchemaManager};
use crate::error::Result;
use tracing::info;

/// Resolves which embedding definitions a run targets: all of them when no
/// predicate was requested, otherwise exactly those whose derived predicate
/// matches. Manifest order is preserved.
pub fn select_definitions<'a>(
    definitions: &'a [EmbeddingDefinition],
    target: Option<&str>,
) -> Vec<&'a EmbeddingDefinition> {
    definitions
        .iter()
        .filter(|def| match target {
            Some(predicate) => def.predicate() == predicate,
            None => true,
        })
        .collect()
}

/// Gate in front of every mutating run. `yes` pre-answers the prompt for
/// scripted use; otherwise `prompt` is consulted and only an affirmative
/// answer lets the run proceed to connect and alter.
pub fn should_proceed<E>(
    yes: bool,
    prompt: impl FnOnce() -> std::result::Result<bool, E>,
) -> std::result::Result<bool, E> {
    if yes {
        return Ok(true);
    }
    prompt()
}

pub struct Reindexer<'a> {
    schema: SchemaManager<'a>,
}

impl<'a> Reindexer<'a> {
    pub fn new(client: &'a DgraphClient) -> Self {
        Self {
            schema: SchemaManager::new(client),
        }
    }

    /// Drops and recreates the index for one definition. The drop is awaited
    /// before the create is issued; a failure in between leaves the
    /// predicate unindexed and aborts the run.
    pub async fn reindex(&self, definition: &EmbeddingDefinition) -> Result<()> {
        let predicate = definition.predicate();
        self.schema.drop_index(&predicate).await?;
        self.schema.create_index(&predicate, &definition.index).await?;
        Ok(())
    }

    /// Reindexes each definition in order, stopping at the first failure.
    /// Definitions already processed stay reindexed; no rollback.
    pub async fn run(&self, definitions: &[&EmbeddingDefinition]) -> Result<usize> {
        for definition in definitions {
            self.reindex(definition).await?;
        }

        info!("Reindexed {} predicate(s)", definitions.len());
        Ok(definitions.len())
    }
}

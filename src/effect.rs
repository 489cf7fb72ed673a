//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::catalog::{CatalogClient, PAGE_LOAD_FAILED};

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch one page of the listing
    LoadPage { seq: u64, offset: u32, limit: u32 },
    /// Resolve a creature by name
    LookupCreature { seq: u64, name: String },
}

impl Effect {
    /// Run the effect against the catalog and turn the outcome into an action.
    pub async fn resolve(self, catalog: &dyn CatalogClient) -> Action {
        match self {
            Effect::LoadPage { seq, offset, limit } => {
                match catalog.list_entries(offset, limit).await {
                    Ok(entries) => {
                        tracing::info!(offset, count = entries.len(), "page loaded");
                        Action::PageDidLoad {
                            seq,
                            offset,
                            entries,
                        }
                    }
                    Err(err) => {
                        tracing::warn!(offset, error = %err, "page load failed");
                        Action::PageDidError {
                            seq,
                            error: PAGE_LOAD_FAILED.to_string(),
                        }
                    }
                }
            }
            Effect::LookupCreature { seq, name } => match catalog.get_by_name(&name).await {
                Ok(detail) => {
                    tracing::info!(name = %detail.name, id = detail.id, "creature loaded");
                    Action::CreatureDidLoad { seq, detail }
                }
                Err(err) => {
                    tracing::warn!(%name, error = %err, "lookup failed");
                    Action::CreatureDidError {
                        seq,
                        error: err.user_message(),
                    }
                }
            },
        }
    }
}

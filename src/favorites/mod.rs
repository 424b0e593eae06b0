//! Favorite workflows
//!
//! Favorites are persisted under a single fixed key as a JSON-encoded list of
//! workflow identifiers. The store is injected so the toggle and view logic
//! run against any `KeyValueStore` implementation.

use tracing::debug;

use crate::{error::DispatchError, github::Workflow, ports::storage::KeyValueStore};

/// Fixed store key holding the JSON-encoded favorite workflow ids.
pub const FAVORITES_KEY: &str = "favorite-workflows";

/// Load the persisted favorite ids. An absent key is an empty list.
pub async fn favorite_ids(store: &dyn KeyValueStore) -> Result<Vec<u64>, DispatchError> {
    match store.get(FAVORITES_KEY).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new())
    }
}

/// Flip favorite membership for one workflow id and persist the result.
///
/// Read-modify-write against the single entry: read the current set, flip
/// membership, write once. Returns the updated id list.
pub async fn toggle(store: &dyn KeyValueStore, workflow_id: u64) -> Result<Vec<u64>, DispatchError> {
    let mut ids = favorite_ids(store).await?;

    match ids.iter().position(|id| *id == workflow_id) {
        Some(index) => {
            ids.remove(index);
            debug!(workflow_id, "removed favorite");
        }
        None => {
            ids.push(workflow_id);
            debug!(workflow_id, "added favorite");
        }
    }

    store.put(FAVORITES_KEY, &serde_json::to_string(&ids)?).await?;
    Ok(ids)
}

pub fn is_favorite(workflow: &Workflow, ids: &[u64]) -> bool {
    ids.contains(&workflow.id)
}

/// Project favorite ids onto the known workflow set, sorted by display name.
///
/// Ids that no longer match a known workflow are dropped silently; they come
/// back if the workflow reappears in the listing.
pub fn favorites_view(workflows: &[Workflow], ids: &[u64]) -> Vec<Workflow> {
    let mut favorites: Vec<Workflow> =
        ids.iter().filter_map(|id| workflows.iter().find(|workflow| workflow.id == *id).cloned()).collect();

    sort_by_name(&mut favorites);
    favorites
}

/// Sort workflows by name, case-sensitive ascending.
pub fn sort_by_name(workflows: &mut [Workflow]) {
    workflows.sort_by(|a, b| a.name.cmp(&b.name));
}

//! PokeAPI catalog client

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::state::{BaseStat, CreatureDetail, ListEntry, SpriteUrls};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Entries per listing page, and the offset step between pages.
pub const PAGE_SIZE: u32 = 20;

/// Shown when a page of the listing could not be loaded.
pub const PAGE_LOAD_FAILED: &str = "Could not load the list. Check your connection.";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Pokémon \"{0}\" not found.")]
    NotFound(String),
    #[error("Could not reach the catalog: {0}")]
    Network(String),
}

impl CatalogError {
    fn network(err: impl fmt::Display) -> Self {
        CatalogError::Network(err.to_string())
    }

    /// Single line shown inline when a lookup fails.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::NotFound(_) => self.to_string(),
            CatalogError::Network(_) => "Could not fetch that Pokémon. Check your connection.".into(),
        }
    }
}

/// Read-only access to the creature catalog
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// One page of the listing, in upstream order, at most `limit` entries long.
    async fn list_entries(&self, offset: u32, limit: u32) -> Result<Vec<ListEntry>, CatalogError>;

    /// Case-insensitive lookup by name.
    async fn get_by_name(&self, name: &str) -> Result<CreatureDetail, CatalogError>;
}

/// Lowercased, trimmed form used for lookups.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStatSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    sprites: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

fn decode_page(bytes: &[u8], limit: u32) -> Result<Vec<ListEntry>, CatalogError> {
    let response: ListResponse = serde_json::from_slice(bytes)
        .map_err(|err| CatalogError::Network(format!("unreadable listing: {err}")))?;
    Ok(response
        .results
        .into_iter()
        .take(limit as usize)
        .map(|entry| ListEntry {
            name: entry.name,
            url: entry.url,
        })
        .collect())
}

fn decode_creature(bytes: &[u8]) -> Result<CreatureDetail, CatalogError> {
    let response: PokemonResponse = serde_json::from_slice(bytes)
        .map_err(|err| CatalogError::Network(format!("unreadable creature: {err}")))?;

    let sprites = SpriteUrls {
        default: pointer_string(&response.sprites, "/front_default"),
        official_artwork: pointer_string(
            &response.sprites,
            "/other/official-artwork/front_default",
        ),
    };

    Ok(CreatureDetail {
        id: response.id,
        name: response.name,
        sprites,
        types: response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect(),
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| BaseStat {
                name: slot.stat.name,
                base_value: slot.base_stat,
            })
            .collect(),
        height: response.height,
        weight: response.weight,
    })
}

/// Map a response status to the two-kind error contract.
/// `lookup` names the creature when a 404 means "no such creature".
fn check_status(status: StatusCode, lookup: Option<&str>) -> Result<(), CatalogError> {
    if status.is_success() {
        return Ok(());
    }
    match lookup {
        Some(name) if status == StatusCode::NOT_FOUND => Err(CatalogError::NotFound(name.to_string())),
        _ => Err(CatalogError::Network(format!("HTTP {status}"))),
    }
}

// ============================================================================
// HTTP client
// ============================================================================

/// `reqwest` implementation; one best-effort GET per call, no retries or caching
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn page_url(&self, offset: u32, limit: u32) -> String {
        format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url)
    }

    fn creature_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, urlencoding::encode(name))
    }

    async fn get_bytes(&self, url: &str, lookup: Option<&str>) -> Result<Vec<u8>, CatalogError> {
        tracing::debug!(%url, "catalog request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CatalogError::network)?;
        let status = response.status();
        tracing::debug!(%url, %status, "catalog response");
        check_status(status, lookup)?;
        let bytes = response.bytes().await.map_err(CatalogError::network)?;
        Ok(bytes.to_vec())
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn list_entries(&self, offset: u32, limit: u32) -> Result<Vec<ListEntry>, CatalogError> {
        let url = self.page_url(offset, limit);
        let bytes = self.get_bytes(&url, None).await?;
        decode_page(&bytes, limit)
    }

    async fn get_by_name(&self, name: &str) -> Result<CreatureDetail, CatalogError> {
        let name = normalize_name(name);
        let url = self.creature_url(&name);
        let bytes = self.get_bytes(&url, Some(&name)).await?;
        decode_creature(&bytes)
    }
}

//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::PAGE_SIZE;

/// One row of the paginated catalog listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
}

impl ListEntry {
    /// Catalog id, taken from the trailing segment of the resource URL.
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// Sprite URLs reported by the catalog (either may be missing)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteUrls {
    pub default: Option<String>,
    pub official_artwork: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BaseStat {
    pub name: String,
    pub base_value: u16,
}

/// Fully resolved record for a single creature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    pub sprites: SpriteUrls,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<BaseStat>,
    /// Tenths of a metre
    pub height: u32,
    /// Tenths of a kilogram
    pub weight: u32,
}

impl CreatureDetail {
    /// Official artwork wins over the small default sprite.
    pub fn display_sprite(&self) -> Option<&str> {
        self.sprites
            .official_artwork
            .as_deref()
            .or(self.sprites.default.as_deref())
    }

    pub fn title(&self) -> String {
        format!("{} #{:03}", display_name(&self.name), self.id)
    }

    pub fn height_label(&self) -> String {
        format!("{:.1} m", self.height as f32 / 10.0)
    }

    pub fn weight_label(&self) -> String {
        format!("{:.1} kg", self.weight as f32 / 10.0)
    }
}

/// Largest base stat by domain convention; bars are drawn relative to it.
pub const MAX_BASE_STAT: u16 = 255;

/// Fraction of the stat bar to fill, clamped to `[0, 1]`.
pub fn stat_fraction(base_value: u16) -> f64 {
    (f64::from(base_value) / f64::from(MAX_BASE_STAT)).clamp(0.0, 1.0)
}

/// `"mr-mime"` -> `"Mr Mime"`
pub fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Which view is on top. The detail variant owns the navigation parameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Screen {
    #[default]
    List,
    Detail(CreatureDetail),
}

/// The last catalog request issued from the list view, kept for retry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum PendingRequest {
    Page { offset: u32 },
    Lookup { name: String },
}

pub const LOADING_TICK_MS: u64 = 120;
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Navigation", label = "Screen", debug_fmt)]
    pub screen: Screen,

    #[debug(section = "List", label = "Offset")]
    pub offset: u32,

    #[debug(section = "List", label = "Entries", debug_fmt)]
    pub entries: Vec<ListEntry>,

    #[debug(section = "List", label = "Selected")]
    pub selected: usize,

    /// A catalog request is in flight; kept apart from `entries` so the old page survives a reload
    #[debug(section = "Request", label = "Loading")]
    pub loading: bool,

    #[debug(section = "Request", label = "Error", debug_fmt)]
    pub error: Option<String>,

    #[debug(section = "Request", label = "Pending", debug_fmt)]
    pub pending: Option<PendingRequest>,

    /// Token of the most recently issued request; older results are dropped
    #[debug(section = "Request", label = "Sequence")]
    pub request_seq: u64,

    #[debug(section = "Search", label = "Query")]
    pub search_query: String,

    #[debug(section = "Search", label = "Focused")]
    pub search_active: bool,

    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn page_number(&self) -> u32 {
        self.offset / PAGE_SIZE + 1
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.entries.get(self.selected)
    }

    pub fn detail(&self) -> Option<&CreatureDetail> {
        match &self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::List => None,
        }
    }

    pub fn on_list(&self) -> bool {
        matches!(self.screen, Screen::List)
    }

    /// Paging is offered only over a settled page with an empty search box.
    fn paging_allowed(&self) -> bool {
        self.on_list()
            && !self.loading
            && self.error.is_none()
            && self.search_query.trim().is_empty()
    }

    pub fn can_page_next(&self) -> bool {
        self.paging_allowed() && !self.entries.is_empty()
    }

    pub fn can_page_prev(&self) -> bool {
        self.paging_allowed() && self.offset > 0
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

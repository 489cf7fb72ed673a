pub mod detail_view;
pub mod dex_list;
pub mod loading_error;
pub mod pokedex_view;
pub mod search_bar;
pub mod title_banner;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_view::{stat_bar_fill, DetailView, DetailViewProps, NO_IMAGE};
pub use dex_list::{DexList, DexListProps, EMPTY_PAGE};
pub use loading_error::{LoadingError, LoadingErrorProps, ERROR_ICON};
pub use pokedex_view::{PokedexView, PokedexViewProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use title_banner::{TitleBanner, TitleBannerProps, TITLE};

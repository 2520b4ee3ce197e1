//! UI components for the card gallery app.
//!
//! Generic pieces (buttons, badges, pills) come from `cardgallery-ui`; these
//! are the app-specific ones that talk to the gallery state.

mod card_board;
mod card_list;
mod card_popup;
mod card_tile;
mod charts;
mod filter_bar;
mod loading;

pub use card_board::CardBoard;
pub use card_list::CardList;
pub use card_popup::CardPopup;
pub use card_tile::CardTile;
pub use charts::{BarChart, PieChart};
pub use filter_bar::FilterBar;
pub use loading::LoadingState;

mod controller;
mod params;
mod store;

pub use controller::{BoardController, BoardView, CardVm};
pub use params::{board_href, BoardParams};

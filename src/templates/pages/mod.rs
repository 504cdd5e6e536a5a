pub mod board;
pub mod detail;
pub mod error;

pub use board::board_page;
pub use detail::detail_page;
pub use error::error_page;

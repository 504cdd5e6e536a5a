mod board_tests;
mod detail_tests;

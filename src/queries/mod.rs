pub mod board_queries;

pub mod constants;
pub mod error;
pub mod swap_matcher;
pub mod swap_parser;
pub mod transfer_extractor;

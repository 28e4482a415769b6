pub mod book;
pub mod builder;
pub mod collector;
pub mod config;
pub mod csv_sink;
pub mod error;
pub mod export;
pub mod label_parser;
pub mod merge;
pub mod overlay;
pub mod pipeline;
pub mod postgres;
pub mod supabase;
pub mod types;
pub mod utils;

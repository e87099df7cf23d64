pub mod episode;
pub mod store_file;

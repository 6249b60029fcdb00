pub mod export;
pub mod sheet_file;

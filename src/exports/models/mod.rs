pub mod export_file;

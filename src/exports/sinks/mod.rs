pub mod directory_sink;

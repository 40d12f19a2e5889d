pub mod fetch_file;

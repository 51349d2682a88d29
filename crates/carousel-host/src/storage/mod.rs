pub mod file_settings;

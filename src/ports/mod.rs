pub mod metadata_port;
pub mod script_port;

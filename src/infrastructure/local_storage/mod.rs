pub mod script_adapter;

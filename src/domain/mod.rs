pub mod column_formatter;
pub mod constraint_assembler;
pub mod entities;
pub mod errors;
pub mod identifier;
pub mod mapping;
pub mod rewrite_rules;
pub mod table_assembler;

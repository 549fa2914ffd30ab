//! sheetseek_engine - Case-insensitive substring search over decoded sheets.

pub mod engine;

//! Output formatting for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use pksuid::Pksuid;
use serde::Serialize;
use tabled::{Table, Tabled};
use time::format_description::well_known::Rfc3339;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Decoded view of a single PKSUID.
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub id: String,
    pub prefix: String,
    pub ksuid: String,
    pub timestamp: String,
    pub raw_timestamp: u32,
    pub payload: String,
    pub bytes: String,
    pub is_nil: bool,
    pub is_fully_nil: bool,
}

impl Inspection {
    pub fn new(id: &Pksuid) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            prefix: id.prefix().to_string(),
            ksuid: id.id_string(),
            timestamp: id.timestamp().format(&Rfc3339)?,
            raw_timestamp: id.raw_timestamp(),
            payload: hex::encode(id.payload()),
            bytes: hex::encode(id.as_bytes()),
            is_nil: id.is_nil(),
            is_fully_nil: id.is_fully_nil(),
        })
    }

    fn rows(&self) -> Vec<Field> {
        vec![
            Field::new("id", &self.id),
            Field::new("prefix", &self.prefix),
            Field::new("ksuid", &self.ksuid),
            Field::new("timestamp", &self.timestamp),
            Field::new("raw_timestamp", self.raw_timestamp),
            Field::new("payload", &self.payload),
            Field::new("bytes", &self.bytes),
            Field::new("nil", self.is_nil),
            Field::new("fully_nil", self.is_fully_nil),
        ]
    }
}

#[derive(Debug, Tabled)]
struct Field {
    field: &'static str,
    value: String,
}

impl Field {
    fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Print generated identifiers, one per line or as a JSON array.
pub fn print_ids(ids: &[Pksuid], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for id in ids {
                println!("{id}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ids)?),
    }
    Ok(())
}

/// Print a decoded identifier.
pub fn print_inspection(inspection: &Inspection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", Table::new(inspection.rows()));
            if inspection.is_nil {
                println!("{}", "Note: nil PKSUIDs are stored as NULL.".dimmed());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(inspection)?),
    }
    Ok(())
}

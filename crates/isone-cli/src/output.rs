use std::io::{self, Write};

use isone_core::Table;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(table: &Table, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(table)?
            } else {
                serde_json::to_string(table)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(table)?,
    }

    Ok(())
}

fn render_table(table: &Table) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let rendered: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(render_cell).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns().iter().map(String::len).collect();
    for row in &rendered {
        for (index, cell) in row.iter().enumerate() {
            if cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    let header = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| format!("{column:<width$}", width = widths[index]))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", header.trim_end())?;

    for row in &rendered {
        let line = row
            .iter()
            .enumerate()
            .map(|(index, cell)| format!("{cell:<width$}", width = widths[index]))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

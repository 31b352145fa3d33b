//! Print the declared equivalence table

use crate::lookup::Equivalence;
use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use tfbridge_dtype::TypeMapper;

/// Arguments for the `table` command
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Print the table as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute the `table` command
pub fn execute(args: TableArgs) -> Result<()> {
    let rows = equivalences(TypeMapper::global());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", render_table(&rows));
    }
    Ok(())
}

fn equivalences(mapper: &TypeMapper) -> Vec<Equivalence> {
    mapper
        .pairs()
        .iter()
        .map(|&(engine, framework)| Equivalence::new(engine, framework))
        .collect()
}

fn render_table(rows: &[Equivalence]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Engine", "TensorFlow", "Native code"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.engine),
            Cell::new(row.framework),
            Cell::new(row.native_code),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_declaration_order() {
        let rows = equivalences(TypeMapper::global());
        let engines: Vec<&str> = rows.iter().map(|r| r.engine.as_str()).collect();
        assert_eq!(engines, ["float32", "float64", "int32", "int64", "uint8"]);
    }

    #[test]
    fn test_render_contains_every_pair() {
        let rows = equivalences(TypeMapper::global());
        let rendered = render_table(&rows).to_string();
        assert!(rendered.contains("Native code"));
        assert!(rendered.contains("float32"));
        assert!(rendered.contains("double"));
        assert!(rendered.contains("uint8"));
    }
}

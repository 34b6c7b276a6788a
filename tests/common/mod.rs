use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes a seed cart JSON file from `(id, unit_price, quantity)` triples.
pub fn write_seed(path: &Path, items: &[(&str, &str, u32)]) -> io::Result<()> {
    let entries: Vec<serde_json::Value> = items
        .iter()
        .map(|(id, price, quantity)| {
            serde_json::json!({
                "id": id,
                "name": format!("Item {id}"),
                "color": "Orange/Gray",
                "unit_price": price,
                "quantity": quantity,
                "image": format!("images/{id}.jpg"),
                "link": format!("product_pages/{id}.html"),
            })
        })
        .collect();

    let body = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
    let mut file = File::create(path)?;
    file.write_all(body.as_bytes())
}

/// Writes an event CSV file from `[type, item, quantity]` rows.
pub fn write_events(path: &Path, rows: &[[&str; 3]]) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(File::create(path)?);
    wtr.write_record(["type", "item", "quantity"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

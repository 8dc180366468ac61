use crate::layout::Layout;
use crate::models::DatasetNode;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the dataset as pretty JSON (same schema as the feed).
pub fn save_json<P: AsRef<Path>>(dataset: &DatasetNode, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(dataset)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Load a dataset saved with [`save_json`] (or any document in the feed's schema).
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<DatasetNode> {
    let path = path.as_ref();
    crate::api::load_dataset(path).with_context(|| format!("load {}", path.display()))
}

/// Save laid-out leaves as CSV with header `name,category,value,x0,y0,x1,y1`.
pub fn save_tiles_csv<P: AsRef<Path>>(layout: &Layout, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("name", "category", "value", "x0", "y0", "x1", "y1"))?;
    for t in &layout.leaves {
        wtr.serialize((
            defuse_formula(t.name.trim()),
            defuse_formula(&t.category),
            t.value,
            t.rect.x0,
            t.rect.y0,
            t.rect.x1,
            t.rect.y1,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prefix cells that spreadsheets would evaluate as formulas with `'`.
fn defuse_formula(cell: &str) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{cell}"),
        _ => cell.to_string(),
    }
}

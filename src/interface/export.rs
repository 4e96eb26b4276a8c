use std::path::Path;

use crate::error::Result;
use crate::models::BasketLine;

/// Write a basket to CSV, one row per line, header included.
///
/// An empty basket produces an empty file.
pub fn write_basket_csv(path: &Path, basket: &[BasketLine]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for line in basket {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

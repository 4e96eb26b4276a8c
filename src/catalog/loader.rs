use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::models::CatalogItem;

/// Header prefix of spurious index columns left by spreadsheet exports.
const INDEX_ARTIFACT_PREFIX: &str = "Unnamed";

/// Cell contents read as missing, matching the usual dataframe export markers.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Positions of the required columns in the source header.
#[derive(Debug)]
struct ColumnMap {
    item_name: usize,
    category: usize,
    classification: usize,
    price: usize,
    protein: usize,
    fat: usize,
    carbs: usize,
    fiber: usize,
    calories: usize,
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Result<Self> {
        // Index artifacts never take part in the lookup.
        let columns: Vec<(usize, &str)> = header
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.trim().starts_with(INDEX_ARTIFACT_PREFIX))
            .collect();

        let find = |wanted: &str| -> Result<usize> {
            columns
                .iter()
                .find(|(_, name)| name.trim() == wanted)
                .map(|(idx, _)| *idx)
                .ok_or_else(|| ShopError::MissingColumn(wanted.to_string()))
        };

        Ok(Self {
            item_name: find("item_name")?,
            category: find("category")?,
            classification: find("classification")?,
            price: find("price_per_100g")?,
            protein: find("protein_per_100g")?,
            fat: find("fat_per_100g")?,
            carbs: find("carbs_per_100g")?,
            fiber: find("fiber_per_100g")?,
            calories: find("calories_per_100g")?,
        })
    }
}

/// A source row after type coercion but before any rows are dropped.
#[derive(Debug, Default)]
struct RawRow {
    item_name: Option<String>,
    category: Option<String>,
    classification: Option<String>,
    price: Option<f64>,
    protein: Option<f64>,
    fat: Option<f64>,
    carbs: Option<f64>,
    fiber: Option<f64>,
    calories: Option<f64>,
}

fn text_cell(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|cell| !MISSING_TOKENS.contains(cell))
        .map(str::to_string)
}

/// Unparseable, empty and NaN cells all count as missing.
fn numeric_cell(record: &StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)
        .and_then(|cell| cell.trim().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
}

impl RawRow {
    fn from_record(record: &StringRecord, columns: &ColumnMap) -> Self {
        Self {
            item_name: text_cell(record, columns.item_name),
            category: text_cell(record, columns.category),
            classification: text_cell(record, columns.classification),
            price: numeric_cell(record, columns.price),
            protein: numeric_cell(record, columns.protein),
            fat: numeric_cell(record, columns.fat),
            carbs: numeric_cell(record, columns.carbs),
            fiber: numeric_cell(record, columns.fiber),
            calories: numeric_cell(record, columns.calories),
        }
    }

    /// Apply the row-level cleaning rules.
    ///
    /// Rows without a name, category, classification or price are dropped.
    /// Price is clamped at zero and missing nutrients become zero.
    fn normalize(self) -> Option<CatalogItem> {
        Some(CatalogItem {
            item_name: self.item_name?,
            category: self.category?,
            classification: self.classification?,
            price: self.price?.max(0.0),
            protein: self.protein.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
            carbs: self.carbs.unwrap_or(0.0),
            fiber: self.fiber.unwrap_or(0.0),
            calories: self.calories.unwrap_or(0.0),
        })
    }
}

/// Load and normalize a catalog CSV.
///
/// Loading is idempotent: a catalog written by [`save_catalog`] reloads to an
/// identical table.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ShopError::CatalogNotFound(path.to_path_buf()));
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = ColumnMap::from_header(rdr.headers()?)?;

    let mut items = Vec::new();
    let mut dropped = 0usize;
    for record in rdr.records() {
        let record = record?;
        match RawRow::from_record(&record, &columns).normalize() {
            Some(item) => items.push(item),
            None => {
                dropped += 1;
                debug!(line = ?record.position().map(|p| p.line()), "dropped incomplete row");
            }
        }
    }

    info!(path = %path.display(), kept = items.len(), dropped, "catalog loaded");
    Ok(Catalog::new(items))
}

/// Write a normalized catalog back out as CSV.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for item in catalog.items() {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Unnamed: 0,item_name,category,classification,price_per_100g,protein_per_100g,fat_per_100g,carbs_per_100g,fiber_per_100g,calories_per_100g";

    fn write_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_basic_row() {
        let file = write_csv("0,Chicken Breast,Meat,Poultry,1.10,31,3.6,0,0,165\n");
        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        let item = &catalog.items()[0];
        assert_eq!(item.item_name, "Chicken Breast");
        assert_eq!(item.price, 1.10);
        assert_eq!(item.protein, 31.0);
        assert_eq!(item.calories, 165.0);
    }

    #[test]
    fn test_drops_rows_missing_required_fields() {
        let file = write_csv(
            "0,,Meat,Poultry,1.0,1,1,1,1,1\n\
             1,Beef,,Red,1.0,1,1,1,1,1\n\
             2,Pork,Meat,,1.0,1,1,1,1,1\n\
             3,Lamb,Meat,Red,,1,1,1,1,1\n\
             4,Veal,Meat,Red,n/a,1,1,1,1,1\n\
             5,Duck,Meat,Poultry,2.5,1,1,1,1,1\n",
        );
        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].item_name, "Duck");
    }

    #[test]
    fn test_missing_markers_in_text_drop_row() {
        let file = write_csv(
            "0,Mystery,Pantry,N/A,1.0,1,1,1,1,1\n\
             1,NA,Pantry,Grain,1.0,1,1,1,1,1\n\
             2,Rice,null,Grain,1.0,1,1,1,1,1\n\
             3,Barley,Pantry,Grain,1.0,1,1,1,1,1\n",
        );
        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].item_name, "Barley");
    }

    #[test]
    fn test_padded_index_artifact_header_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            " Unnamed: 0,item_name,category,classification,price_per_100g,protein_per_100g,fat_per_100g,carbs_per_100g,fiber_per_100g,calories_per_100g, Unnamed: 0"
        )
        .unwrap();
        writeln!(file, "0,Oats,Pantry,Grain,0.3,13,6.5,68,10,379,9").unwrap();
        file.flush().unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].item_name, "Oats");
    }

    #[test]
    fn test_clamps_price_and_fills_nutrients() {
        let file = write_csv("0,Coupon Bread,Bakery,Bread,-0.5,,abc,49,,\n");
        let catalog = load_catalog(file.path()).unwrap();

        let item = &catalog.items()[0];
        assert_eq!(item.price, 0.0);
        assert_eq!(item.protein, 0.0);
        assert_eq!(item.fat, 0.0);
        assert_eq!(item.carbs, 49.0);
        assert_eq!(item.fiber, 0.0);
        assert_eq!(item.calories, 0.0);
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let err = load_catalog("definitely/not/here.csv").unwrap_err();
        match err {
            ShopError::CatalogNotFound(path) => {
                assert_eq!(path, PathBuf::from("definitely/not/here.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "item_name,category,classification,price_per_100g").unwrap();
        writeln!(file, "Milk,Dairy,Beverage,0.2").unwrap();
        file.flush().unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, ShopError::MissingColumn(ref c) if c == "protein_per_100g"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "brand,item_name,category,classification,price_per_100g,protein_per_100g,fat_per_100g,carbs_per_100g,fiber_per_100g,calories_per_100g,notes"
        )
        .unwrap();
        writeln!(file, "Acme,Oats,Pantry,Grain,0.3,13,6.5,68,10,379,bulk").unwrap();
        file.flush().unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.items()[0].item_name, "Oats");
        assert_eq!(catalog.items()[0].fiber, 10.0);
    }
}

//! CSV-backed record store for the stock file.
//!
//! The whole file is loaded into memory, mutated there, and written back as a
//! full replace. Writes go to a temp file in the same directory which is then
//! renamed over the stock file, so a crash mid-write leaves the old content
//! intact.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{StockError, StockResult};
use crate::models::Item;

/// Handle to the stock file. Cheap to construct; every operation opens the
/// file fresh so callers always see the latest saved content.
#[derive(Debug, Clone)]
pub struct StockStore {
    path: PathBuf,
}

impl StockStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        StockStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all items from the stock file.
    ///
    /// Fails with `FileAccess` if the file is missing or unreadable and with
    /// `Parse` if a row cannot be decoded into an [`Item`].
    pub fn load_all(&self) -> StockResult<Vec<Item>> {
        let file = File::open(&self.path).map_err(StockError::FileAccess)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut items = Vec::new();
        for result in rdr.deserialize() {
            let item: Item = result?;
            items.push(item);
        }

        log::debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Overwrites the stock file with the header followed by all given items
    /// in their given order.
    pub fn save_all(&self, items: &[Item]) -> StockResult<()> {
        let tmp = self.tmp_path();
        let file = File::create(&tmp).map_err(StockError::FileAccess)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        // Header is written explicitly so even an empty stock file keeps it.
        wtr.write_record(["name", "quantity", "price", "size", "availability"])?;
        for item in items {
            wtr.serialize(item)?;
        }
        wtr.flush().map_err(StockError::FileAccess)?;
        drop(wtr);

        std::fs::rename(&tmp, &self.path).map_err(StockError::FileAccess)?;
        log::debug!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Sibling path the new content is written to before the rename.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        let mut tmp = self.path.clone();
        tmp.set_file_name(name);
        tmp
    }
}

/// Linear scan for the first item matching the (name, size) key.
pub fn find_by_key<'a>(items: &'a [Item], name: &str, size: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.matches_key(name, size))
}

/// Mutable variant of [`find_by_key`], used by the update operations.
pub fn find_by_key_mut<'a>(
    items: &'a mut [Item],
    name: &str,
    size: &str,
) -> Option<&'a mut Item> {
    items.iter_mut().find(|item| item.matches_key(name, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("Red Shirt", "M", 20.0, 5),
            Item::new("Red Shirt", "L", 22.0, 2),
            Item::new("Blue Jeans", "S", 35.5, 0),
        ]
    }

    #[test]
    fn test_find_by_key_returns_first_match() {
        let items = sample_items();
        let found = find_by_key(&items, "Red Shirt", "L").unwrap();
        assert_eq!(found.price, "22");
    }

    #[test]
    fn test_find_by_key_none_for_unknown_size() {
        let items = sample_items();
        assert!(find_by_key(&items, "Red Shirt", "XL").is_none());
    }

    #[test]
    fn test_find_by_key_mut_allows_update() {
        let mut items = sample_items();
        find_by_key_mut(&mut items, "blue jeans", "s")
            .unwrap()
            .set_quantity(4);
        assert_eq!(items[2].quantity, "4");
        assert!(items[2].is_available());
    }
}

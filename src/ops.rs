//! Mutation operations against the stock file.
//!
//! Every operation follows the same protocol: reload the whole file, validate
//! and apply the change in memory, then write the whole file back. Failures
//! leave the file untouched. A [`Session`] carries the store handle and the
//! undo history for one sitting of the program; operations are methods on it
//! rather than free functions over shared globals.

use crate::error::{StockError, StockResult};
use crate::matching::{find_similar_name, SimilarName};
use crate::models::{Item, Operation};
use crate::store::{find_by_key, find_by_key_mut, StockStore};
use crate::validate;

/// Raw form input for the add-stock operation.
#[derive(Debug, Clone, Default)]
pub struct AddItemInput {
    pub name: String,
    pub size: String,
    pub price: String,
    pub quantity: String,
}

/// One undoable mutation: what happened plus the full pre-mutation content.
#[derive(Debug)]
struct HistoryEntry {
    description: String,
    before: Vec<Item>,
}

/// One sitting of the program: the stock file handle plus the undo history.
pub struct Session {
    store: StockStore,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(store: StockStore) -> Self {
        Session {
            store,
            history: Vec::new(),
        }
    }

    pub fn store(&self) -> &StockStore {
        &self.store
    }

    /// Adds a new stock item.
    ///
    /// If an existing item's name scores at or above the similarity threshold
    /// and that item also exists in the requested size, `confirm_existing` is
    /// called with the suggestion. Returning `true` means "yes, I meant that
    /// item" and the add aborts with [`StockError::UseUpdateInstead`];
    /// returning `false` adds the new item anyway.
    pub fn add_item<F>(&mut self, input: &AddItemInput, confirm_existing: F) -> StockResult<Item>
    where
        F: FnOnce(&SimilarName) -> bool,
    {
        let name = validate::item_name(&input.name).map_err(StockError::Validation)?;
        let size = validate::catalog_size(&input.size).map_err(StockError::Validation)?;
        let price = validate::positive_price(&input.price).map_err(StockError::Validation)?;
        let quantity =
            validate::positive_quantity(&input.quantity).map_err(StockError::Validation)?;

        let mut items = self.store.load_all()?;

        let similar = find_similar_name(&name, items.iter().map(|i| i.name.as_str()));
        if let Some(similar) = similar {
            if find_by_key(&items, &similar.name, size.as_str()).is_some()
                && confirm_existing(&similar)
            {
                log::info!(
                    "Add of '{}' ({}) aborted: user meant existing item '{}'",
                    name,
                    size.as_str(),
                    similar.name
                );
                return Err(StockError::UseUpdateInstead {
                    name: similar.name,
                    size: size.as_str().to_string(),
                });
            }
        }

        let item = Item::new(&name, size.as_str(), price, quantity);
        let before = items.clone();
        items.push(item.clone());
        self.store.save_all(&items)?;
        self.push_history(format!("add {} ({})", name, size.as_str()), before);

        log::info!(
            "Added new stock item: {} ({}) with quantity {} and price ${}",
            name,
            size.as_str(),
            quantity,
            price
        );
        Ok(item)
    }

    /// Adds or sells copies of an existing item. Returns the new quantity.
    ///
    /// Selling more copies than are in stock fails with
    /// [`StockError::InsufficientStock`] and changes nothing.
    pub fn adjust_quantity(
        &mut self,
        name: &str,
        size: &str,
        operation: &str,
        quantity: &str,
    ) -> StockResult<u32> {
        let name = validate::item_name(name).map_err(StockError::Validation)?;
        let size = validate::selected_size(size).map_err(StockError::Validation)?;
        let delta = validate::positive_quantity(quantity).map_err(StockError::Validation)?;
        let operation = validate::operation(operation).map_err(StockError::Validation)?;

        let mut items = self.store.load_all()?;
        let before = items.clone();

        let item =
            find_by_key_mut(&mut items, &name, &size).ok_or_else(|| StockError::NotFound {
                name: name.clone(),
                size: size.clone(),
            })?;
        let current = item.quantity_u32();

        let new_quantity = match operation {
            Operation::AddCopies => current + delta,
            Operation::SellCopies => {
                if delta > current {
                    return Err(StockError::InsufficientStock {
                        name,
                        size,
                        available: current,
                        requested: delta,
                    });
                }
                current.saturating_sub(delta)
            }
        };
        item.set_quantity(new_quantity);

        self.store.save_all(&items)?;
        self.push_history(
            format!("{} x{} for {} ({})", operation.as_str(), delta, name, size),
            before,
        );

        match operation {
            Operation::AddCopies => log::info!(
                "Added {} copies to '{}' ({}). New quantity: {}",
                delta,
                name,
                size,
                new_quantity
            ),
            Operation::SellCopies => log::info!(
                "Sold {} copies of '{}' ({}). New quantity: {}",
                delta,
                name,
                size,
                new_quantity
            ),
        }
        Ok(new_quantity)
    }

    /// Sets a new price for an existing item. Returns the price as stored.
    pub fn set_price(&mut self, name: &str, size: &str, price: &str) -> StockResult<f64> {
        let name = validate::item_name(name).map_err(StockError::Validation)?;
        let size = validate::selected_size(size).map_err(StockError::Validation)?;
        let new_price = validate::positive_price(price).map_err(StockError::Validation)?;

        let mut items = self.store.load_all()?;
        let before = items.clone();

        let item =
            find_by_key_mut(&mut items, &name, &size).ok_or_else(|| StockError::NotFound {
                name: name.clone(),
                size: size.clone(),
            })?;
        item.set_price(new_price);

        self.store.save_all(&items)?;
        self.push_history(format!("set price of {} ({})", name, size), before);

        log::info!("Updated price for '{}' ({}) to ${}", name, size, new_price);
        Ok(new_price)
    }

    /// All items currently marked available. Pure projection, no mutation.
    pub fn list_available(&self) -> StockResult<Vec<Item>> {
        let items = self.store.load_all()?;
        Ok(items.into_iter().filter(|i| i.is_available()).collect())
    }

    /// Case-insensitive substring search on the item name.
    pub fn search(&self, term: &str) -> StockResult<Vec<Item>> {
        let term = term.trim().to_lowercase();
        let items = self.store.load_all()?;
        Ok(items
            .into_iter()
            .filter(|i| i.name.to_lowercase().contains(&term))
            .collect())
    }

    /// Reverts the most recent mutation of this session by writing its
    /// pre-mutation content back. Returns the description of the undone
    /// mutation, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> StockResult<Option<String>> {
        let entry = match self.history.pop() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        self.store.save_all(&entry.before)?;
        log::info!("Undid mutation: {}", entry.description);
        Ok(Some(entry.description))
    }

    /// Number of mutations that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    fn push_history(&mut self, description: String, before: Vec<Item>) {
        self.history.push(HistoryEntry {
            description,
            before,
        });
    }
}

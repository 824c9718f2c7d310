pub mod error;
pub mod formatters;
pub mod matching;
pub mod models;
pub mod ops;
pub mod store;
pub mod validate;

// Re-export commonly used items
pub use error::{StockError, StockResult};
pub use formatters::format_item_list;
pub use matching::{find_similar_name, SimilarName, SIMILARITY_THRESHOLD};
pub use models::{Item, Operation, Size};
pub use ops::{AddItemInput, Session};
pub use store::{find_by_key, StockStore};

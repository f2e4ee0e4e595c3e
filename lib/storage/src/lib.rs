pub mod loader;
pub mod store;

pub use loader::{load_dataset, LoadedFile};
pub use store::{DatasetStats, DatasetStore};

pub mod folder;
pub mod takeout;

pub use folder::{cluster_entries, index_folder};
pub use takeout::open_takeout;

pub mod data_uri;
pub mod loader;
pub mod reader;
pub mod store;

pub use data_uri::DataUri;
pub use loader::load_batch;
pub use reader::files_from_input;
pub use store::{BatchSequence, GalleryAction, GalleryStore};

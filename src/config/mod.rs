pub mod load;
pub mod types;

pub use types::{
    Config, DEFAULT_BASE_NAME, FileTypeTable, Language, RunConfig, SortMethod, TransferMode,
};

pub mod builder;
pub mod clean;

pub use builder::{chunk, group_by_concept, Deck};
pub use clean::{clean_detail, sanitize_filename};

pub mod core;
pub mod deck;
pub mod export;
pub mod workbook;

pub use crate::{
    core::{Flashcard, MazoError},
    deck::Deck,
    export::OutputMode,
    workbook::Workbook,
};

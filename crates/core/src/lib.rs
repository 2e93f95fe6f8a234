pub mod category;
pub mod currency;
pub mod expenses;
pub mod phrasebook;
pub mod pipeline;
pub mod shared;
pub mod transcript;
pub mod translation;

//! Text preparation before extraction

pub mod cleaner;
pub mod contact;

pub use cleaner::TextCleaner;
pub use contact::ContactSweep;

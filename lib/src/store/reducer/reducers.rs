pub mod edit;
pub mod items;
pub mod saved;

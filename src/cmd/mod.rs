pub mod collect;
pub mod extract;
pub mod rank;

// Command handlers module
// One handler per dispatch operation, all working on a loaded alias store

pub mod cd;
pub mod common;
pub mod list;
pub mod remove;
pub mod set;

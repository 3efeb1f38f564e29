pub mod cli;
pub mod shared;

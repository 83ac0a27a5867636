pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod regions;
pub mod unifier;
pub mod writer;

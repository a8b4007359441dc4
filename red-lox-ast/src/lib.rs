pub mod error;
pub mod expr;
pub mod printer;
pub mod reporter;
pub mod stmt;
pub mod token;
pub mod visitor;

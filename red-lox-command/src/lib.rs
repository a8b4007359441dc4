pub mod printer;
pub mod sample;

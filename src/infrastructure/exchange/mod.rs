pub mod thalex;

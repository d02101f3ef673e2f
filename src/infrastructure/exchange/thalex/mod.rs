pub mod client;
pub mod models;
pub mod parsers;

pub use client::ThalexRestClient;
pub use parsers::LadderParser;

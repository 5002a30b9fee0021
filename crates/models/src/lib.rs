pub mod errors;
pub mod db;
pub mod service;

#[cfg(test)]
mod tests;

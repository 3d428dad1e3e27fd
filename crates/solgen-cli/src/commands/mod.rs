pub mod generate;
pub mod list;

#[cfg(test)]
mod list_tests;

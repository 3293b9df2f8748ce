pub mod args;
pub mod dump;
pub mod format;
pub mod render;
pub mod run;

#[cfg(test)]
mod args_test;

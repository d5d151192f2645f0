pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod view;
pub mod widget;

#[cfg(test)]
mod test;

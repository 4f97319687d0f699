//! Terminal front end for the swap form

pub mod prices;
pub mod setup;
pub mod swap;
pub mod tokens;
pub mod ui;

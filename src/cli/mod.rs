//! Terminal front end: one-shot commands and the interactive shell

pub mod convert;
pub mod rates;
pub mod setup;
pub mod shell;
pub mod ui;

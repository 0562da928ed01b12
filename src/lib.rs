pub mod app;
pub mod banner;
pub mod config;
pub mod consts;
pub mod flow;
pub mod form;
pub mod kundali;
pub mod prompt;
pub mod source;
pub mod spinner;

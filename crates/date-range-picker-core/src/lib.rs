pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod overlay;
pub mod picker;
pub mod rules;
pub mod selection;
pub mod value;

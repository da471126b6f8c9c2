pub mod clean;
pub mod config;
pub mod minutize;
pub mod run;

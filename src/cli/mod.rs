mod browse;
mod input;
mod root;
mod show;

pub use root::Cli;

pub mod check;
pub mod config;
pub mod level;
pub mod run;
pub mod watch;

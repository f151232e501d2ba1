//! Integration tests for npt

mod helpers;

mod cli_test;
mod config_test;
mod property_test;
mod replay_test;
mod session_test;

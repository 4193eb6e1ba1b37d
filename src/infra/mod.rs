pub mod config;
pub mod evm;

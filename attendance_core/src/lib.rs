//! Browser-independent core of the attendance web client: the loading
//! redirect state machine, the application flags, the daily clock-in/out
//! record, the one-shot bootstrap sequence and the runtime configuration.

pub mod attendance;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod redirect;
pub mod state;
pub mod update_worker;

pub mod filter_mode;
pub mod state;
pub mod transitions;

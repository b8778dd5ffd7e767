pub mod action;
pub mod confirm;
pub mod effect;
pub mod effect_runner;
pub mod hooks_state;
pub mod input_mode;
pub mod keybindings;
pub mod load_state;
pub mod message_state;
pub mod mode;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod settings_state;
pub mod state;
pub mod ui_state;

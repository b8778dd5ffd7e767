pub mod confirm_dialog;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod hooks;
pub mod layout;
pub mod overlay;
pub mod settings_form;

pub use layout::MainLayout;

//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "^R", "j/k")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Ctrl+R", "j / ↓")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Scroll")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
        pub const HELP: usize = 1;
        pub const TABS: usize = 2;
        pub const RELOAD: usize = 3;
        pub const EDIT: usize = 4;
    }

    pub mod general {
        pub const REMOVE: usize = 0;
        pub const TRANSFER: usize = 1;
    }

    pub mod hooks {
        pub const DETAIL: usize = 0;
        pub const DELETE: usize = 1;
        pub const BACK: usize = 2;
    }

    pub mod nav {
        pub const SCROLL: usize = 0;
        pub const TOP_BOTTOM: usize = 1;
    }

    pub mod field_edit {
        pub const SAVE: usize = 0;
        pub const CANCEL: usize = 1;
    }

    pub mod confirm {
        pub const YES: usize = 0;
        pub const NO: usize = 1;
        pub const TOGGLE: usize = 2;
    }

    pub mod help {
        pub const SCROLL: usize = 0;
        pub const CLOSE: usize = 1;
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
    // idx 1: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::OpenHelp,
    },
    // idx 2: TABS
    KeyBinding {
        key_short: "Tab",
        key: "Tab / ⇧Tab",
        desc_short: "Screen",
        description: "Switch between General Settings and Service Hooks",
        action: Action::NextTab,
    },
    // idx 3: RELOAD
    KeyBinding {
        key_short: "r",
        key: "r",
        desc_short: "Reload",
        description: "Reload settings and hooks from the server",
        action: Action::Reload,
    },
    // idx 4: EDIT
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Edit",
        description: "Edit selected field (toggles flip in place)",
        action: Action::BeginFieldEdit,
    },
];

pub const GENERAL_KEYS: &[KeyBinding] = &[
    // idx 0: REMOVE
    KeyBinding {
        key_short: "x",
        key: "x",
        desc_short: "Remove",
        description: "Remove this project (asks for confirmation)",
        action: Action::RequestRemoveProject,
    },
    // idx 1: TRANSFER
    KeyBinding {
        key_short: "t",
        key: "t",
        desc_short: "Transfer",
        description: "Transfer this project to another organization owner",
        action: Action::RequestTransferProject,
    },
];

pub const HOOKS_KEYS: &[KeyBinding] = &[
    // idx 0: DETAIL
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Detail",
        description: "Open hook detail",
        action: Action::OpenHookDetail,
    },
    // idx 1: DELETE
    KeyBinding {
        key_short: "d",
        key: "d / Del",
        desc_short: "Delete",
        description: "Delete selected hook (asks for confirmation)",
        action: Action::RequestDeleteHook,
    },
    // idx 2: BACK
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Back",
        description: "Back to hook list",
        action: Action::CloseHookDetail,
    },
];

/// Navigation keys for Footer (combined key display)
pub const NAVIGATION_KEYS: &[KeyBinding] = &[
    // idx 0: SCROLL
    KeyBinding {
        key_short: "j/k / ↑↓",
        key: "j / k / ↑ / ↓",
        desc_short: "Navigate",
        description: "Move down/up",
        action: Action::None,
    },
    // idx 1: TOP_BOTTOM
    KeyBinding {
        key_short: "g/G",
        key: "g / G",
        desc_short: "Top/Bottom",
        description: "First/Last item",
        action: Action::None,
    },
];

// =============================================================================
// Field Edit
// =============================================================================

pub const FIELD_EDIT_KEYS: &[KeyBinding] = &[
    // idx 0: SAVE
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Save",
        description: "Save field",
        action: Action::FieldSubmit,
    },
    // idx 1: CANCEL
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Cancel",
        description: "Discard edit",
        action: Action::FieldCancel,
    },
];

// =============================================================================
// Confirm Dialog
// =============================================================================

pub const CONFIRM_DIALOG_KEYS: &[KeyBinding] = &[
    // idx 0: YES
    KeyBinding {
        key_short: "Enter/y",
        key: "Enter / y",
        desc_short: "Confirm",
        description: "Confirm",
        action: Action::ConfirmDialogConfirm,
    },
    // idx 1: NO
    KeyBinding {
        key_short: "Esc/n",
        key: "Esc / n",
        desc_short: "Cancel",
        description: "Cancel",
        action: Action::Escape,
    },
    // idx 2: TOGGLE
    KeyBinding {
        key_short: "Space",
        key: "Space",
        desc_short: "Toggle",
        description: "Toggle the dialog (open / cancel)",
        action: Action::ConfirmDialogToggle,
    },
];

// =============================================================================
// Help
// =============================================================================

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: SCROLL
    KeyBinding {
        key_short: "j/k / ↑↓",
        key: "j / k / ↑ / ↓",
        desc_short: "Scroll",
        description: "Scroll down / up",
        action: Action::HelpScrollDown,
    },
    // idx 1: CLOSE
    KeyBinding {
        key_short: "?/Esc",
        key: "? / Esc",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
];

// =============================================================================
// Help Overlay Layout
// =============================================================================

/// Total lines in help overlay content (6 sections + 5 blank lines + key entries)
pub const HELP_TOTAL_LINES: usize = 6
    + 5
    + GLOBAL_KEYS.len()
    + GENERAL_KEYS.len()
    + HOOKS_KEYS.len()
    + NAVIGATION_KEYS.len()
    + FIELD_EDIT_KEYS.len()
    + CONFIRM_DIALOG_KEYS.len();

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that idx constants are valid indexes into their respective arrays.
    /// This catches errors when array entries are reordered or removed.
    #[test]
    fn idx_constants_are_within_bounds() {
        assert!(idx::global::QUIT < GLOBAL_KEYS.len());
        assert!(idx::global::HELP < GLOBAL_KEYS.len());
        assert!(idx::global::TABS < GLOBAL_KEYS.len());
        assert!(idx::global::RELOAD < GLOBAL_KEYS.len());
        assert!(idx::global::EDIT < GLOBAL_KEYS.len());

        assert!(idx::general::REMOVE < GENERAL_KEYS.len());
        assert!(idx::general::TRANSFER < GENERAL_KEYS.len());

        assert!(idx::hooks::DETAIL < HOOKS_KEYS.len());
        assert!(idx::hooks::DELETE < HOOKS_KEYS.len());
        assert!(idx::hooks::BACK < HOOKS_KEYS.len());

        assert!(idx::nav::SCROLL < NAVIGATION_KEYS.len());
        assert!(idx::nav::TOP_BOTTOM < NAVIGATION_KEYS.len());

        assert!(idx::field_edit::SAVE < FIELD_EDIT_KEYS.len());
        assert!(idx::field_edit::CANCEL < FIELD_EDIT_KEYS.len());

        assert!(idx::confirm::YES < CONFIRM_DIALOG_KEYS.len());
        assert!(idx::confirm::NO < CONFIRM_DIALOG_KEYS.len());
        assert!(idx::confirm::TOGGLE < CONFIRM_DIALOG_KEYS.len());

        assert!(idx::help::SCROLL < HELP_KEYS.len());
        assert!(idx::help::CLOSE < HELP_KEYS.len());
    }
}

use crate::app::settings_state::FieldKey;
use crate::domain::{ProjectSettings, ServiceHook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Screen switching
    NextTab,
    PreviousTab,

    // Navigation within the active screen
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // Overlay toggles
    OpenHelp,
    CloseHelp,
    HelpScrollUp,
    HelpScrollDown,
    Escape,

    // Field editing (general settings and hook detail)
    BeginFieldEdit,
    FieldInput(char),
    FieldBackspace,
    FieldSubmit,
    FieldCancel,

    // Project settings data
    LoadSettings,
    Reload,
    SettingsLoaded(Box<ProjectSettings>),
    SettingsFailed(String),
    SettingSaved {
        field: FieldKey,
        updated: Box<ProjectSettings>,
    },
    SettingSaveFailed(String),

    // Destructive project operations, guarded by the confirm dialog
    RequestRemoveProject,
    RequestTransferProject,
    RemoveProject,
    TransferProject {
        owner_email: String,
    },
    ProjectRemoved,
    ProjectRemoveFailed(String),
    TransferRequested,
    TransferFailed(String),

    // Service hooks
    LoadHooks,
    HooksLoaded(Vec<ServiceHook>),
    HooksFailed(String),
    OpenHookDetail,
    CloseHookDetail,
    HookSaved {
        updated: Box<ServiceHook>,
    },
    HookSaveFailed(String),
    RequestDeleteHook,
    DeleteHook {
        id: String,
    },
    HookDeleted {
        id: String,
    },
    HookDeleteFailed(String),

    // Confirm dialog
    ConfirmDialogToggle,
    ConfirmDialogConfirm,
    ConfirmPromptInput(char),
    ConfirmPromptBackspace,
    ConfirmPromptSubmit,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

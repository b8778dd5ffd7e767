//! Side effects returned by the reducer, executed by EffectRunner.

use serde_json::Value;

use crate::app::ports::ApiTarget;
use crate::app::settings_state::FieldKey;

#[derive(Debug, Clone)]
pub enum Effect {
    Render,

    FetchSettings {
        target: ApiTarget,
    },
    /// Partial update of a single settings field.
    SaveSetting {
        target: ApiTarget,
        field: FieldKey,
        value: Value,
    },

    FetchHooks {
        target: ApiTarget,
    },
    SaveHookField {
        target: ApiTarget,
        id: String,
        /// Field name and value for the PUT body.
        patch: Value,
    },
    DeleteHook {
        target: ApiTarget,
        id: String,
    },

    RemoveProject {
        target: ApiTarget,
    },
    TransferProject {
        target: ApiTarget,
        owner_email: String,
    },

    /// Ensures ordering within the batch.
    Sequence(Vec<Effect>),
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Effect::Render)
    }
}

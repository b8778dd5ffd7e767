//! Executes side effects returned by the reducer.
//!
//! API effects are spawned so a slow server never stalls the event
//! loop; results come back through the action channel. `Sequence` runs
//! its items in order inside a single task.

use std::sync::Arc;

use color_eyre::eyre::Result;
use serde_json::json;
use tokio::sync::mpsc;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::ports::SettingsApi;
use crate::app::settings_state::field_def;

pub struct EffectRunner {
    api: Arc<dyn SettingsApi>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn SettingsApi>, action_tx: mpsc::Sender<Action>) -> Self {
        Self { api, action_tx }
    }

    pub async fn run(&self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                // Render is handled by the main loop before effects run.
                Effect::Render => {}
                Effect::Sequence(seq) => {
                    let api = Arc::clone(&self.api);
                    let tx = self.action_tx.clone();
                    tokio::spawn(async move {
                        for effect in seq {
                            execute_api_effect(&api, &tx, effect).await;
                        }
                    });
                }
                single => {
                    let api = Arc::clone(&self.api);
                    let tx = self.action_tx.clone();
                    tokio::spawn(async move {
                        execute_api_effect(&api, &tx, single).await;
                    });
                }
            }
        }
        Ok(())
    }
}

async fn execute_api_effect(
    api: &Arc<dyn SettingsApi>,
    tx: &mpsc::Sender<Action>,
    effect: Effect,
) {
    let action = match effect {
        Effect::FetchSettings { target } => match api.fetch_project(&target).await {
            Ok(project) => Action::SettingsLoaded(Box::new(project)),
            Err(e) => Action::SettingsFailed(e.to_string()),
        },
        Effect::SaveSetting {
            target,
            field,
            value,
        } => {
            let patch = json!({ field_def(field).api_name: value });
            match api.update_project(&target, patch).await {
                Ok(updated) => Action::SettingSaved {
                    field,
                    updated: Box::new(updated),
                },
                Err(e) => Action::SettingSaveFailed(e.to_string()),
            }
        }
        Effect::FetchHooks { target } => match api.list_hooks(&target).await {
            Ok(hooks) => Action::HooksLoaded(hooks),
            Err(e) => Action::HooksFailed(e.to_string()),
        },
        Effect::SaveHookField { target, id, patch } => {
            match api.update_hook(&target, &id, patch).await {
                Ok(updated) => Action::HookSaved {
                    updated: Box::new(updated),
                },
                Err(e) => Action::HookSaveFailed(e.to_string()),
            }
        }
        Effect::DeleteHook { target, id } => match api.delete_hook(&target, &id).await {
            Ok(()) => Action::HookDeleted { id },
            Err(e) => Action::HookDeleteFailed(e.to_string()),
        },
        Effect::RemoveProject { target } => match api.remove_project(&target).await {
            Ok(()) => Action::ProjectRemoved,
            Err(e) => Action::ProjectRemoveFailed(e.to_string()),
        },
        Effect::TransferProject {
            target,
            owner_email,
        } => match api.transfer_project(&target, &owner_email).await {
            Ok(()) => Action::TransferRequested,
            Err(e) => Action::TransferFailed(e.to_string()),
        },
        Effect::Render | Effect::Sequence(_) => return,
    };
    // Receiver gone means the app is shutting down.
    let _ = tx.send(action).await;
}

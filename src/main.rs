#![allow(clippy::print_stderr)]

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;

use hookdash::app::action::Action;
use hookdash::app::effect::Effect;
use hookdash::app::effect_runner::EffectRunner;
use hookdash::app::reducer::reduce;
use hookdash::app::ports::{ConfigStore, ConfigStoreError, DashboardProfile};
use hookdash::app::state::AppState;
use hookdash::error;
use hookdash::infra::adapters::{HttpSettingsApi, TomlConfigStore};
use hookdash::ui::components::MainLayout;
use hookdash::ui::event::handler::handle_event;
use hookdash::ui::tui::TuiRunner;

/// Terminal admin console for project settings and service hooks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dashboard base URL (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Organization slug
    #[arg(long)]
    org: Option<String>,

    /// Project slug
    #[arg(long)]
    project: Option<String>,

    /// Write the resolved connection details back to the config file
    #[arg(long)]
    save: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let store = TomlConfigStore::new().map_err(|e| eyre!(e))?;
    let profile = resolve_profile(&args, &store, std::env::var("HOOKDASH_TOKEN").ok())?;

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let api = Arc::new(HttpSettingsApi::new(&profile.base_url, &profile.token));
    let effect_runner = EffectRunner::new(api, action_tx.clone());

    let mut state = AppState::new(profile.organization, profile.project);

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.ui.terminal_height = initial_size.height;

    let _ = action_tx.send(Action::LoadSettings).await;
    let _ = action_tx.send(Action::LoadHooks).await;

    loop {
        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty {
                    effects.push(Effect::Render);
                }

                if effects.iter().any(Effect::is_render) {
                    tui.terminal().draw(|frame| MainLayout::render(frame, &mut state))?;
                    state.clear_dirty();
                }
                effect_runner.run(effects).await?;
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    Ok(())
}

/// Merges CLI flags over the stored profile. The API token only ever
/// comes from the config file or HOOKDASH_TOKEN. With `--save` the
/// merged profile is written back once it validates.
fn resolve_profile(
    args: &Args,
    store: &impl ConfigStore,
    env_token: Option<String>,
) -> Result<DashboardProfile> {
    let stored = match store.load() {
        Ok(profile) => profile,
        Err(ConfigStoreError::VersionMismatch { found, expected }) => {
            eprintln!(
                "Error: Configuration file version mismatch (found v{}, expected v{}).\n\
                 Please delete {} and reconfigure.",
                found,
                expected,
                store.storage_path().display()
            );
            std::process::exit(1);
        }
        Err(e) => return Err(eyre!(e)),
    };

    let mut profile = stored.unwrap_or(DashboardProfile {
        base_url: String::new(),
        organization: String::new(),
        project: String::new(),
        token: String::new(),
    });
    if let Some(url) = &args.url {
        profile.base_url = url.clone();
    }
    if let Some(org) = &args.org {
        profile.organization = org.clone();
    }
    if let Some(project) = &args.project {
        profile.project = project.clone();
    }
    if let Some(token) = env_token {
        profile.token = token;
    }

    if profile.base_url.is_empty() || profile.organization.is_empty() || profile.project.is_empty()
    {
        return Err(eyre!(
            "Missing connection details. Pass --url, --org and --project, \
             or create {}",
            store.storage_path().display()
        ));
    }
    if profile.token.is_empty() {
        return Err(eyre!(
            "Missing API token. Set HOOKDASH_TOKEN or add it to {}",
            store.storage_path().display()
        ));
    }

    if args.save {
        store.save(&profile).map_err(|e| eyre!(e))?;
        eprintln!("Saved connection details to {}", store.storage_path().display());
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(url: Option<&str>, org: Option<&str>, project: Option<&str>, save: bool) -> Args {
        Args {
            url: url.map(str::to_string),
            org: org.map(str::to_string),
            project: project.map(str::to_string),
            save,
        }
    }

    fn stored_profile() -> DashboardProfile {
        DashboardProfile {
            base_url: "https://dashboard.example.com".to_string(),
            organization: "acme".to_string(),
            project: "backend".to_string(),
            token: "stored-token".to_string(),
        }
    }

    #[test]
    fn cli_flags_override_the_stored_profile() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlConfigStore::with_config_dir(temp_dir.path().to_path_buf());
        store.save(&stored_profile()).unwrap();

        let profile =
            resolve_profile(&args(None, None, Some("frontend"), false), &store, None).unwrap();

        assert_eq!(profile.project, "frontend");
        assert_eq!(profile.organization, "acme");
        assert_eq!(profile.token, "stored-token");
    }

    #[test]
    fn save_flag_writes_the_merged_profile_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlConfigStore::with_config_dir(temp_dir.path().to_path_buf());

        let profile = resolve_profile(
            &args(
                Some("https://dashboard.example.com"),
                Some("acme"),
                Some("backend"),
                true,
            ),
            &store,
            Some("env-token".to_string()),
        )
        .unwrap();

        assert_eq!(store.load().unwrap(), Some(profile));
    }

    #[test]
    fn missing_token_is_an_error_and_nothing_is_saved() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlConfigStore::with_config_dir(temp_dir.path().to_path_buf());

        let result = resolve_profile(
            &args(
                Some("https://dashboard.example.com"),
                Some("acme"),
                Some("backend"),
                true,
            ),
            &store,
            None,
        );

        assert!(result.is_err());
        assert!(store.load().unwrap().is_none());
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

use dorsia_desktop::config;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::load_or_default()?;

    tauri::Builder::default()
        .manage(state::DesktopState::new(config))
        .invoke_handler(tauri::generate_handler![
            commands::list_symptoms,
            commands::start_session,
            commands::next_question,
            commands::answer,
            commands::finalize_session,
            commands::reset_session,
            commands::diagnose_batch,
            commands::get_config,
            commands::set_min_batch_symptoms,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}

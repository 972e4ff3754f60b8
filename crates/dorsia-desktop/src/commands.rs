use std::collections::BTreeSet;

use tauri::State;

use dorsia_core::models::report::DiagnosisReport;
use dorsia_core::models::session::SessionState;
use dorsia_core::models::symptom::Symptom;
use dorsia_desktop::config::{self, DorsiaConfig};
use dorsia_engine::error::EngineError;
use dorsia_engine::session;

use crate::state::DesktopState;

fn no_session() -> String {
    "no active session: call start_session() first".to_string()
}

fn humanize(err: EngineError) -> String {
    match err {
        EngineError::NoCandidates => "no matching diagnosis".to_string(),
        other => other.to_string(),
    }
}

#[tauri::command]
pub async fn list_symptoms(state: State<'_, DesktopState>) -> Result<Vec<Symptom>, String> {
    Ok(state.kb.symptoms())
}

#[tauri::command]
pub async fn start_session(state: State<'_, DesktopState>) -> Result<SessionState, String> {
    let fresh = session::start_session(&state.kb);
    tracing::info!(
        "session {} started with {} candidate diagnoses",
        fresh.id,
        fresh.possible_diagnoses.len()
    );

    *state.session.lock().await = Some(fresh.clone());
    Ok(fresh)
}

#[tauri::command]
pub async fn next_question(state: State<'_, DesktopState>) -> Result<Option<Symptom>, String> {
    let mut guard = state.session.lock().await;
    let session_state = guard.as_mut().ok_or_else(no_session)?;
    Ok(session::next_question(session_state, &state.kb))
}

#[tauri::command]
pub async fn answer(
    state: State<'_, DesktopState>,
    symptom: String,
    is_present: bool,
) -> Result<SessionState, String> {
    let mut guard = state.session.lock().await;
    let session_state = guard.as_mut().ok_or_else(no_session)?;
    session::apply_answer(session_state, &state.kb, &symptom, is_present).map_err(humanize)?;
    Ok(session_state.clone())
}

#[tauri::command]
pub async fn finalize_session(state: State<'_, DesktopState>) -> Result<DiagnosisReport, String> {
    let guard = state.session.lock().await;
    let session_state = guard.as_ref().ok_or_else(no_session)?;
    session::finalize(session_state, &state.kb).map_err(humanize)
}

#[tauri::command]
pub async fn reset_session(state: State<'_, DesktopState>) -> Result<(), String> {
    *state.session.lock().await = None;
    Ok(())
}

#[tauri::command]
pub async fn diagnose_batch(
    state: State<'_, DesktopState>,
    symptoms: Vec<String>,
) -> Result<DiagnosisReport, String> {
    let provided: BTreeSet<String> = symptoms.into_iter().collect();

    let min = state.config.lock().await.min_batch_symptoms as usize;
    if provided.len() < min {
        return Err(format!(
            "select at least {min} symptoms before requesting a diagnosis"
        ));
    }

    session::diagnose_batch(&state.kb, &provided).map_err(humanize)
}

#[tauri::command]
pub async fn get_config(state: State<'_, DesktopState>) -> Result<DorsiaConfig, String> {
    Ok(state.config.lock().await.clone())
}

#[tauri::command]
pub async fn set_min_batch_symptoms(
    state: State<'_, DesktopState>,
    min: u32,
) -> Result<DorsiaConfig, String> {
    let mut guard = state.config.lock().await;
    guard.min_batch_symptoms = min;
    config::save_config(&guard).map_err(|e| e.to_string())?;
    Ok(guard.clone())
}

//! Smoke test for the interactive diagnosis loop.
//!
//! Simulates a patient whose presentation matches one catalog entry, answers
//! every engine question accordingly, and prints the final report. No window
//! and no config file; everything runs in-process.
//!
//! Usage:
//!   DORSIA_PATIENT=sciatica \
//!   cargo run -p dorsia-desktop --example interactive_smoke

use dorsia_engine::{KnowledgeBase, session};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let patient_key = std::env::var("DORSIA_PATIENT").unwrap_or_else(|_| "sciatica".to_string());

    let kb = KnowledgeBase::lower_back_pain();
    let profile = kb.lookup(&patient_key)?.clone();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║       Dorsia Interactive Loop — Smoke Test       ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  Simulated patient: {:<28} ║", patient_key);
    println!("║  Catalog entries:   {:<28} ║", kb.len());
    println!("║  Symptom universe:  {:<28} ║", kb.all_symptoms().len());
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    let mut state = session::start_session(&kb);
    let mut round = 0;

    while let Some(question) = session::next_question(&mut state, &kb) {
        round += 1;
        let present = profile.required_symptoms.contains(&question.id)
            || profile.optional_symptoms.contains(&question.id);
        let mark = if present { "yes" } else { "no" };
        println!("  Q{round:>2}: {:<44} {mark}", question.label);
        session::apply_answer(&mut state, &kb, &question.id, present)?;
    }

    println!();
    println!("Session finished after {round} questions.");
    println!();

    let report = session::finalize(&state, &kb)?;
    println!(
        "Final diagnosis: {} (score {})",
        report.diagnosis_name, report.score
    );

    if report.is_urgent() {
        println!("🚨 URGENT MEDICAL ATTENTION ADVISED");
        for flag in &report.red_flags_detected {
            println!("   red flag: {}", kb.symptom_label(flag));
        }
    } else {
        println!("✅ No red flags detected.");
    }

    let tests: Vec<&str> = report.suggested_tests.iter().map(String::as_str).collect();
    let treatments: Vec<&str> = report
        .suggested_treatments
        .iter()
        .map(String::as_str)
        .collect();
    println!("Suggested tests:      {}", tests.join(", "));
    println!("Suggested treatments: {}", treatments.join(", "));

    Ok(())
}

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mhforms_core::dates::format_date;
use mhforms_core::models::category::SectionId;
use mhforms_core::models::document::ExtractedDocument;
use mhforms_core::models::note::ClinicalNote;
use mhforms_extract::diagnosis::{default_patterns, extract_diagnoses, extract_diagnoses_from_headers};
use mhforms_extract::medication::extract_medications;
use mhforms_extract::session::FormSession;
use mhforms_narrative::attributes::NarrativeAttributes;
use mhforms_narrative::pronouns::GenderContext;
use mhforms_narrative::{append_selected_evidence, generate};
use mhforms_sections::{all_forms, get_form};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{self, MhformsConfig};

/// Ingest a document on a blocking worker.
pub async fn ingest(path: PathBuf) -> eyre::Result<ExtractedDocument> {
    let document =
        tokio::task::spawn_blocking(move || mhforms_ingest::ingest_path(&path)).await??;
    Ok(document)
}

/// Run the import on a blocking worker, cancelling on Ctrl-C.
///
/// The session comes back untouched if the import fails or is cancelled.
pub async fn import_in_background(
    mut session: FormSession,
    notes: Vec<ClinicalNote>,
) -> (FormSession, eyre::Result<()>) {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling import");
            flag.store(true, Ordering::Relaxed);
        }
    });

    let worker = tokio::task::spawn_blocking(move || {
        let result = session.import(&notes, &cancel);
        (session, result)
    })
    .await;
    watcher.abort();

    match worker {
        Ok((session, result)) => (session, result.map_err(eyre::Report::from)),
        Err(e) => (
            FormSession::new(Vec::new()),
            Err(eyre::eyre!("import worker failed: {e}")),
        ),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn session_for(form_id: &str, config: &MhformsConfig) -> eyre::Result<FormSession> {
    let form = get_form(form_id)?;
    Ok(FormSession::new(config.apply_to_sections(form.sections())))
}

pub async fn cmd_ingest(path: PathBuf) -> eyre::Result<()> {
    let document = ingest(path).await?;
    print_json(&document)
}

pub async fn cmd_sections(path: PathBuf, form_id: &str, config: &MhformsConfig) -> eyre::Result<()> {
    let session = session_for(form_id, config)?;
    let document = ingest(path).await?;
    let (session, result) = import_in_background(session, document.notes).await;
    result?;

    #[derive(Serialize)]
    struct SectionOutput<'a> {
        id: &'a SectionId,
        label: &'a str,
        entries: &'a [mhforms_core::models::entry::ImportedEntry],
    }

    let mut output = Vec::new();
    for section in session.sections() {
        output.push(SectionOutput {
            id: &section.id,
            label: &section.label,
            entries: session.bucket(&section.id)?,
        });
    }
    print_json(&output)
}

pub async fn cmd_diagnoses(path: PathBuf, headers_only: bool, max: usize) -> eyre::Result<()> {
    let document = ingest(path).await?;
    let found = if headers_only {
        extract_diagnoses_from_headers(&document.raw_text, default_patterns(), max)
    } else {
        extract_diagnoses(&document.raw_text, default_patterns(), max)
    };
    for diagnosis in found {
        println!("{}\t{}", diagnosis.code(), diagnosis.label());
    }
    Ok(())
}

pub async fn cmd_medications(path: PathBuf, months: u32) -> eyre::Result<()> {
    let document = ingest(path).await?;
    let selected = extract_medications(&document.notes, months).select();
    for m in &selected {
        println!(
            "{}\t{}\t{}\t{:?}\t{}",
            m.drug_name,
            m.dose.as_deref().unwrap_or("-"),
            m.frequency.as_deref().unwrap_or("-"),
            m.subtype,
            format_date(m.date)
        );
    }
    info!("{} medications selected", selected.len());
    Ok(())
}

/// Evidence to quote under the narrative: the most recent `limit` entries of
/// one section.
pub struct EvidenceRequest {
    pub document: PathBuf,
    pub form_id: String,
    pub section_id: String,
    pub limit: usize,
}

pub async fn cmd_narrative(
    attributes_path: &Path,
    gender: GenderContext,
    evidence: Option<EvidenceRequest>,
    config: &MhformsConfig,
) -> eyre::Result<()> {
    let contents = std::fs::read_to_string(attributes_path).map_err(|e| {
        eyre::eyre!("failed to read attributes at {}: {e}", attributes_path.display())
    })?;
    let attrs: NarrativeAttributes = serde_json::from_str(&contents)?;
    let mut text = generate(&attrs, gender);

    if let Some(request) = evidence {
        let section_id = SectionId::new(request.section_id)?;
        let session = session_for(&request.form_id, config)?;
        let document = ingest(request.document).await?;
        let (mut session, result) = import_in_background(session, document.notes).await;
        result?;

        let ids: Vec<_> = session
            .bucket(&section_id)?
            .iter()
            .take(request.limit)
            .map(|e| e.id)
            .collect();
        for id in ids {
            session.set_selected(&section_id, id, true)?;
        }
        let entries = session.bucket(&section_id)?;
        text = append_selected_evidence(&text, entries, &config.evidence_header);
    }

    println!("{text}");
    Ok(())
}

pub fn cmd_forms() {
    for form in all_forms() {
        println!("{}", form.describe());
    }
}

pub fn cmd_config_show(config: &MhformsConfig) -> eyre::Result<()> {
    println!("# {}", config::config_path()?.display());
    print_json(config)
}

pub fn cmd_config_init() -> eyre::Result<()> {
    let path = config::save_config(&MhformsConfig::default())?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn cmd_config_reset() -> eyre::Result<()> {
    config::delete_config()?;
    println!("config removed; defaults apply");
    Ok(())
}

//! Wizard controller: hydration, navigation, submit ordering and the
//! double-submit guard.
//!
//! Run with: `cargo test --test wizard_test`
mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};

use briefing_backend::error::WizardError;
use briefing_backend::models::briefings::{Budget, ProjectType};
use briefing_backend::models::draft::{BriefingDraft, BriefingPatch, LogoFile};
use briefing_backend::wizard::{
    STEP_COUNT, StepAction, WizardSessions, WizardView, logo_object_name,
};

use common::{Harness, PUBLIC_BASE};

fn maria_silva() -> BriefingDraft {
    BriefingDraft {
        contact_name: Some("Maria Silva".to_string()),
        contact_email: Some("maria@example.com".to_string()),
        contact_phone: Some("(11) 98765-4321".to_string()),
        project_type: Some(ProjectType::Ecommerce),
        products: Some(vec!["Roupas".to_string(), "Acessórios".to_string()]),
        budget: Some(Budget::From5kTo15k),
        ..Default::default()
    }
}

fn png_logo(file_name: &str) -> LogoFile {
    LogoFile {
        file_name: file_name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

#[tokio::test]
async fn test_fresh_wizard_starts_empty_at_step_one() {
    let h = Harness::new();
    let wizard = h.mount().await;

    let snapshot = wizard.snapshot().await;
    assert_eq!(snapshot.current_step, 1);
    assert!(snapshot.form_data.is_empty());
    assert!(!snapshot.is_submitting);
    assert!(!snapshot.has_logo_file);
}

#[tokio::test]
async fn test_mount_resumes_saved_draft_at_step_one() {
    let h = Harness::new();
    h.drafts().save(&maria_silva()).await;

    let wizard = h.mount().await;

    assert_eq!(wizard.current_step().await, 1);
    assert_eq!(wizard.form_data().await, maria_silva());
}

#[tokio::test]
async fn test_updates_are_merged_and_persisted() {
    let h = Harness::new();
    let wizard = h.mount().await;

    wizard
        .update_form_data(BriefingDraft {
            contact_name: Some("Maria Silva".to_string()),
            ..Default::default()
        })
        .await;
    wizard
        .update_form_data(BriefingDraft {
            project_name: Some("Loja da Maria".to_string()),
            ..Default::default()
        })
        .await;

    let form = wizard.form_data().await;
    assert_eq!(form.contact_name.as_deref(), Some("Maria Silva"));
    assert_eq!(form.project_name.as_deref(), Some("Loja da Maria"));

    // A second mount (e.g. a reload) sees the same answers.
    let reloaded = h.mount().await;
    assert_eq!(reloaded.form_data().await, form);
}

#[tokio::test]
async fn test_cleared_fields_stay_cleared_after_reload() {
    let h = Harness::new();
    let wizard = h.mount().await;
    wizard
        .update_form_data(BriefingDraft {
            domain_name: Some("loja.com.br".to_string()),
            launch_deadline: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..maria_silva()
        })
        .await;

    wizard
        .update_form_data(BriefingPatch {
            domain_name: Some(None),
            launch_deadline: Some(None),
            ..Default::default()
        })
        .await;

    let form = wizard.form_data().await;
    assert_eq!(form.domain_name, None);
    assert_eq!(form.launch_deadline, None);
    assert_eq!(form.contact_name.as_deref(), Some("Maria Silva"));

    let reloaded = h.mount().await;
    assert_eq!(reloaded.form_data().await, form);
}

#[tokio::test]
async fn test_navigation_is_bounded() {
    let h = Harness::new();
    let wizard = h.mount().await;

    assert!(!wizard.go_previous().await);
    assert_eq!(wizard.current_step().await, 1);

    for expected in 2..=STEP_COUNT {
        assert!(wizard.go_next().await);
        assert_eq!(wizard.current_step().await, expected);
    }

    assert!(!wizard.go_next().await);
    assert_eq!(wizard.current_step().await, 5);

    assert!(wizard.go_previous().await);
    assert_eq!(wizard.current_step().await, 4);
}

#[tokio::test]
async fn test_navigation_does_not_require_answers() {
    let h = Harness::new();
    let wizard = h.mount().await;

    assert!(wizard.go_next().await);
    assert_eq!(wizard.current_step().await, 2);
    assert!(wizard.form_data().await.is_empty());
}

#[tokio::test]
async fn test_step_actions_are_persisted() {
    let h = Harness::new();
    let wizard = h.mount().await;

    assert!(
        wizard
            .apply(StepAction::AddProduct {
                name: "Roupas".to_string(),
            })
            .await
    );
    assert!(
        !wizard
            .apply(StepAction::AddProduct {
                name: "Roupas".to_string(),
            })
            .await
    );

    assert_eq!(
        h.drafts().load().await.products,
        Some(vec!["Roupas".to_string()])
    );
}

#[tokio::test]
async fn test_ecommerce_briefing_walkthrough() {
    let h = Harness::new();
    let wizard = h.mount().await;

    wizard
        .update_form_data(BriefingDraft {
            contact_name: Some("Maria Silva".to_string()),
            project_type: Some(ProjectType::Ecommerce),
            ..Default::default()
        })
        .await;
    for product in ["Blusas", "Calças"] {
        wizard
            .apply(StepAction::AddProduct {
                name: product.to_string(),
            })
            .await;
    }
    while wizard.go_next().await {}
    assert_eq!(wizard.current_step().await, 5);
    wizard
        .update_form_data(BriefingDraft {
            budget: Some(Budget::From5kTo15k),
            ..Default::default()
        })
        .await;

    wizard.submit().await.unwrap();

    assert_eq!(h.records.inserts(), 1);
    let inserted = h.records.last_inserted().unwrap();
    assert_eq!(
        inserted.products,
        Some(vec!["Blusas".to_string(), "Calças".to_string()])
    );
    assert_eq!(inserted.logo_url, None);
    assert_eq!(inserted.budget, Some(Budget::From5kTo15k));
    assert!(h.drafts().load().await.is_empty());
}

#[tokio::test]
async fn test_submit_without_logo_inserts_and_clears_draft() {
    let h = Harness::new();
    let wizard = h.mount().await;
    wizard.update_form_data(maria_silva()).await;

    let submission = wizard.submit().await.expect("submit should succeed");

    assert!(h.storage.uploaded_names().is_empty());
    assert_eq!(h.records.inserts(), 1);

    let inserted = h.records.last_inserted().unwrap();
    assert_eq!(inserted.contact_name.as_deref(), Some("Maria Silva"));
    assert_eq!(inserted.contact_email.as_deref(), Some("maria@example.com"));
    assert_eq!(inserted.contact_phone.as_deref(), Some("(11) 98765-4321"));
    assert_eq!(inserted.project_type, Some(ProjectType::Ecommerce));
    assert_eq!(
        inserted.products,
        Some(vec!["Roupas".to_string(), "Acessórios".to_string()])
    );
    assert_eq!(inserted.budget, Some(Budget::From5kTo15k));
    assert_eq!(inserted.logo_url, None);

    assert_eq!(submission.logo_url, None);
    assert!(h.slot.is_empty().await);
    assert!(!wizard.is_submitting());
}

#[tokio::test]
async fn test_submit_uploads_logo_before_insert() {
    let h = Harness::new();
    let wizard = h.mount().await;
    wizard.update_form_data(maria_silva()).await;
    wizard
        .update_form_data(BriefingDraft {
            has_logo: Some(true),
            logo_file: Some(png_logo("marca.final.png")),
            ..Default::default()
        })
        .await;
    assert!(wizard.snapshot().await.has_logo_file);

    let submission = wizard.submit().await.unwrap();

    let uploads = h.storage.uploads.lock().unwrap().clone();
    assert_eq!(uploads.len(), 1);
    let (name, content_type) = &uploads[0];
    assert!(name.ends_with(".png"));
    assert!(name.trim_end_matches(".png").parse::<i64>().is_ok());
    assert_eq!(content_type.as_deref(), Some("image/png"));

    let expected_url = format!("{PUBLIC_BASE}/{name}");
    assert_eq!(submission.logo_url.as_deref(), Some(expected_url.as_str()));
    assert_eq!(
        h.records.last_inserted().unwrap().logo_url.as_deref(),
        Some(expected_url.as_str())
    );
}

#[tokio::test]
async fn test_failed_upload_keeps_draft_and_skips_insert() {
    let h = Harness::new();
    h.storage.fail_upload.store(true, Ordering::SeqCst);
    let wizard = h.mount().await;
    wizard.update_form_data(maria_silva()).await;
    wizard
        .update_form_data(BriefingDraft {
            logo_file: Some(png_logo("marca.png")),
            ..Default::default()
        })
        .await;

    let err = wizard.submit().await.unwrap_err();

    assert!(matches!(err, WizardError::Upload(_)));
    assert_eq!(h.records.inserts(), 0);
    assert_eq!(h.drafts().load().await.contact_name.as_deref(), Some("Maria Silva"));
    assert!(!wizard.is_submitting());
}

#[tokio::test]
async fn test_failed_insert_keeps_draft_and_allows_retry() {
    let h = Harness::new();
    h.records.fail_insert.store(true, Ordering::SeqCst);
    let wizard = h.mount().await;
    wizard.update_form_data(maria_silva()).await;

    let err = wizard.submit().await.unwrap_err();
    assert!(matches!(err, WizardError::Insert(_)));
    assert!(!h.slot.is_empty().await);
    assert!(!wizard.is_submitting());

    h.records.fail_insert.store(false, Ordering::SeqCst);
    wizard.submit().await.expect("retry should succeed");
    assert_eq!(h.records.inserts(), 2);
    assert!(h.slot.is_empty().await);
}

#[tokio::test]
async fn test_concurrent_submits_insert_once() {
    let h = Harness::new();
    let wizard = h.mount().await;
    wizard.update_form_data(maria_silva()).await;

    let (first, second) = tokio::join!(wizard.submit(), wizard.submit());

    assert_eq!(h.records.inserts(), 1);
    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(WizardError::SubmissionInProgress) | Err(WizardError::AlreadySubmitted(_))
    ));
}

#[tokio::test]
async fn test_submit_after_success_is_rejected() {
    let h = Harness::new();
    let wizard = h.mount().await;
    wizard.update_form_data(maria_silva()).await;

    let submission = wizard.submit().await.unwrap();
    let err = wizard.submit().await.unwrap_err();

    assert!(matches!(err, WizardError::AlreadySubmitted(id) if id == submission.id));
    assert_eq!(h.records.inserts(), 1);
}

#[test]
fn test_logo_object_name_uses_upload_time_and_extension() {
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

    assert_eq!(logo_object_name(&png_logo("Marca Nova.PNG"), at), "1700000000000.PNG");
    assert_eq!(logo_object_name(&png_logo("logo.v2.svg"), at), "1700000000000.svg");
    assert_eq!(logo_object_name(&png_logo("logo"), at), "1700000000000.logo");
}

#[tokio::test]
async fn test_view_reports_progress_and_options() {
    let h = Harness::new();
    let wizard = h.mount().await;

    let view = WizardView::new(h.client_id, wizard.snapshot().await);
    assert_eq!(view.progress, 20);
    assert_eq!(view.step.title, "Sobre o Projeto");
    assert_eq!(view.options.site_noun, "site");
    assert!(view.missing_required.contains(&"contactName"));
    assert!(!view.missing_required.contains(&"products"));

    wizard.update_form_data(maria_silva()).await;
    wizard.go_next().await;
    wizard.go_next().await;

    let view = WizardView::new(h.client_id, wizard.snapshot().await);
    assert_eq!(view.current_step, 3);
    assert_eq!(view.progress, 60);
    assert_eq!(view.options.site_noun, "e-commerce");
    assert_eq!(view.options.design_styles[0].id, "moderno-ecommerce");
    assert_eq!(view.missing_required, vec!["pagesNeeded"]);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["currentStep"], 3);
    assert_eq!(json["formData"]["contactName"], "Maria Silva");
    assert_eq!(json["steps"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_sessions_reuse_and_rehydrate_wizards() {
    let h = Harness::new();
    let sessions = WizardSessions::new(
        h.slot.clone(),
        h.records.clone(),
        h.storage.clone(),
        Duration::from_secs(60),
    );

    let first = sessions.open(h.client_id).await;
    first.update_form_data(maria_silva()).await;
    first.go_next().await;

    let again = sessions.open(h.client_id).await;
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(again.current_step().await, 2);

    sessions.close(h.client_id).await;
    let remounted = sessions.open(h.client_id).await;
    assert!(!Arc::ptr_eq(&first, &remounted));
    assert_eq!(remounted.current_step().await, 1);
    assert_eq!(remounted.form_data().await, maria_silva());
}

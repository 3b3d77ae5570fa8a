//! End-to-end onboarding flow against the in-memory directory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use artistly_app::usecases::{
    BrowseArtists, GetStatusCounts, ListApplications, ReviewApplication,
};
use artistly_app::{SubmitOutcome, WizardController};
use artistly_core::catalog::{ArtistStatus, CatalogFilter};
use artistly_core::ids::ArtistId;
use artistly_core::onboarding::{FieldUpdate, FormField, SetField, WizardSnapshot};
use artistly_core::ports::{ArtistRepositoryPort, WizardEventPort};
use artistly_core::review::{ReviewDecision, ReviewFilter};
use artistly_infra::{InMemoryArtistRepository, RepositorySubmissionSink};

#[derive(Default)]
struct RecordingEvents {
    steps: Mutex<Vec<u8>>,
}

#[async_trait]
impl WizardEventPort for RecordingEvents {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        self.steps.lock().unwrap().push(snapshot.current_step);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn applicant_goes_from_wizard_to_catalog() {
    init_tracing();

    let repo: Arc<dyn ArtistRepositoryPort> = Arc::new(InMemoryArtistRepository::seeded());
    let sink = Arc::new(RepositorySubmissionSink::new(repo.clone()));
    let events = Arc::new(RecordingEvents::default());
    let wizard = WizardController::new(sink, events.clone());

    // Step 1
    let snapshot = wizard.advance().await;
    assert_eq!(
        snapshot.errors.get(FormField::FullName),
        Some("Full name is required")
    );
    wizard
        .update_field(FieldUpdate::FullName("Ananya Desai".into()))
        .await;
    wizard
        .update_field(FieldUpdate::Bio(
            "Kathak dancer and choreographer for stage and film.".into(),
        ))
        .await;
    assert_eq!(wizard.advance().await.current_step, 2);

    // Step 2
    wizard.toggle(SetField::SelectedCategories, "Dancer").await;
    wizard
        .toggle(SetField::SelectedCategories, "Choreographer")
        .await;
    wizard.toggle(SetField::SelectedLanguages, "Gujarati").await;
    wizard.toggle(SetField::SelectedLanguages, "Hindi").await;
    wizard
        .update_field(FieldUpdate::Experience("2-5".into()))
        .await;
    assert_eq!(wizard.advance().await.current_step, 3);

    // Step 3
    wizard
        .update_field(FieldUpdate::PriceRange("₹15,000-₹50,000".into()))
        .await;
    wizard
        .update_field(FieldUpdate::Location("Ahmedabad".into()))
        .await;
    wizard
        .update_field(FieldUpdate::AvailableForTravel(true))
        .await;

    let outcome = wizard.submit().await;
    let SubmitOutcome::Submitted { receipt } = outcome else {
        panic!("expected submission to succeed, got {outcome:?}");
    };
    assert_eq!(receipt.reference.as_deref(), Some("13"));
    assert!(wizard.snapshot().await.is_done);
    assert!(!events.steps.lock().unwrap().is_empty());

    // The application waits for review and is not yet public.
    let counts = GetStatusCounts::new(repo.clone()).execute().await.unwrap();
    assert_eq!(counts.total, 13);
    assert_eq!(counts.pending, 3);

    let browse = BrowseArtists::new(repo.clone());
    let dancers = CatalogFilter::for_category("Dancer");
    assert_eq!(browse.execute(&dancers).await.unwrap().total, 2);

    let pending = ListApplications::new(repo.clone())
        .execute(
            &ReviewFilter {
                search: "ahmedabad".into(),
                status: Some(ArtistStatus::Pending),
                ..ReviewFilter::default()
            },
            1,
        )
        .await
        .unwrap();
    assert_eq!(pending.total_items, 1);
    assert_eq!(pending.items[0].name, "Ananya Desai");

    // Approval makes the applicant visible in the catalog.
    ReviewApplication::new(repo.clone())
        .execute(ArtistId(13), ReviewDecision::Approve)
        .await
        .unwrap();
    let result = browse.execute(&dancers).await.unwrap();
    assert_eq!(result.total, 3);
    assert!(result.artists.iter().any(|a| a.name == "Ananya Desai"));
}

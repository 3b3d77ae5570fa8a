//! Mock implementations of ports for use case tests.

use mockall::mock;

use artistly_core::catalog::{Artist, ArtistStatus};
use artistly_core::ids::ArtistId;
use artistly_core::onboarding::ArtistApplication;
use artistly_core::ports::{ArtistRepositoryError, ArtistRepositoryPort};

mock! {
    pub Repo {}

    #[async_trait::async_trait]
    impl ArtistRepositoryPort for Repo {
        async fn list_all(&self) -> Result<Vec<Artist>, ArtistRepositoryError>;
        async fn get(&self, id: ArtistId) -> Result<Option<Artist>, ArtistRepositoryError>;
        async fn insert_pending(
            &self,
            application: &ArtistApplication,
        ) -> Result<Artist, ArtistRepositoryError>;
        async fn set_status_if_pending(
            &self,
            id: ArtistId,
            status: ArtistStatus,
        ) -> Result<Artist, ArtistRepositoryError>;
    }
}

pub fn artist(id: u32, name: &str, category: &str, status: ArtistStatus) -> Artist {
    Artist {
        id: ArtistId(id),
        name: name.into(),
        categories: vec![category.into()],
        price_range: "₹15,000-₹50,000".into(),
        location: "Mumbai".into(),
        image: String::new(),
        bio: format!("{name} performs live."),
        languages: vec!["Hindi".into()],
        experience: "5-10".into(),
        available_for_travel: true,
        status,
    }
}

mod artist_id;
mod id_macro;

pub use artist_id::ArtistId;

use id_macro::impl_id;
use serde::{Deserialize, Serialize};

/// Identifier assigned to an onboarding application when it is handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl_id!(ApplicationId);

use async_trait::async_trait;
use eyre::Result;

use crate::{Segment, TrackInfo};

/// Source of caption data for a video.
///
/// Errors carry a human-readable description; the HTTP layer forwards it
/// verbatim without classifying it.
#[async_trait]
pub trait TranscriptGateway: Send + Sync {
    /// Fetch the segments of the first track matching `languages`, in priority order
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<Segment>>;

    /// Enumerate every caption track the video offers
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<TrackInfo>>;
}

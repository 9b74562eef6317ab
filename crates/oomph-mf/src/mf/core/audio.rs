//! hAudio track records.

use serde::Serialize;

/// An audio track extracted from hAudio markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioTrack {
    pub title: String,
    pub album: String,
    pub contributor: String,
    pub description: String,
    pub duration: String,
    pub item: String,
    pub position: String,
    pub category: String,
    pub published: String,
    pub photo: Option<String>,
    /// `rel="sample"` link.
    pub sample: Option<String>,
    /// `rel="enclosure"` link.
    pub enclosure: Option<String>,
    /// `rel="payment"` link.
    pub payment: Option<String>,
}

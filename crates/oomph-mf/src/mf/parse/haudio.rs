//! hAudio parsing.

use super::ExtractContext;
use crate::mf::core::AudioTrack;
use crate::mf::dom::Fragment;

/// Builds an [`AudioTrack`] from an `haudio` element.
#[must_use]
pub fn parse_haudio(root: Fragment<'_>, ctx: &ExtractContext<'_>) -> AudioTrack {
    let mut title = root.text_of("title");
    if title.is_empty() {
        title = root.text_of("fn");
    }

    let rel_link = |rel: &str| ctx.link(root.find_rel(rel).and_then(|a| a.attr("href")));

    AudioTrack {
        title,
        album: root.text_of("album"),
        contributor: root.text_of("contributor"),
        description: root.text_of("description"),
        duration: root.text_of("duration"),
        item: root.text_of("item"),
        position: root.text_of("position"),
        category: root.text_of("category"),
        published: root.text_of("published"),
        photo: ctx.link(root.probe_attr("photo", "img", "src")),
        sample: rel_link("sample"),
        enclosure: rel_link("enclosure"),
        payment: rel_link("payment"),
    }
}

use once_cell::sync::Lazy;
use serde::Serialize;

/// Fixed playback volume for the ambient track. Not user adjustable.
pub const AMBIENT_VOLUME: f64 = 0.15;

/// Deployed media URLs, served alongside the page.
pub const AMBIENT_AUDIO_URL: &str = "/assets/background-music.mp3";
pub const AMBIENT_ARTWORK_URL: &str = "/assets/artwork-qohwah.jpg";

const ARTWORK_SIZES: [u32; 6] = [96, 128, 192, 256, 384, 512];

/// One artwork entry as the platform media-control surface expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkImage {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
}

/// Track metadata published to the platform media-control surface.
///
/// Serializes to the exact init-dictionary shape the surface consumes,
/// so one pass through serde is all the marshalling needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub artwork: Vec<ArtworkImage>,
}

/// The one ambient track this page plays.
pub static AMBIENT_TRACK: Lazy<TrackMetadata> = Lazy::new(|| TrackMetadata {
    title: "Kopi Qohwah Manduri".to_string(),
    artist: "Qohwah Manduri Official".to_string(),
    album: "Kopi Rempah Tradisional".to_string(),
    artwork: ARTWORK_SIZES
        .iter()
        .map(|size| ArtworkImage {
            src: AMBIENT_ARTWORK_URL.to_string(),
            sizes: format!("{size}x{size}"),
            mime: "image/jpeg".to_string(),
        })
        .collect(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_covers_the_advertised_sizes() {
        let sizes: Vec<&str> = AMBIENT_TRACK
            .artwork
            .iter()
            .map(|image| image.sizes.as_str())
            .collect();
        assert_eq!(
            sizes,
            ["96x96", "128x128", "192x192", "256x256", "384x384", "512x512"]
        );
        assert!(AMBIENT_TRACK
            .artwork
            .iter()
            .all(|image| image.mime == "image/jpeg"));
    }

    #[test]
    fn metadata_serializes_with_the_surface_field_names() {
        let json = serde_json::to_value(&*AMBIENT_TRACK).unwrap();
        assert_eq!(json["title"], "Kopi Qohwah Manduri");
        assert_eq!(json["artwork"][0]["type"], "image/jpeg");
        assert_eq!(json["artwork"][0]["src"], AMBIENT_ARTWORK_URL);
    }
}

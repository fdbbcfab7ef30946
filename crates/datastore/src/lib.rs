use chrono::{SecondsFormat, TimeZone, Utc};
use domain::VideoResult;

/// Catalog trait for fallback data access
/// This allows the search service to be handed a different catalog in tests
pub trait Catalog: Send + Sync {
    /// Get the first `n` entries in catalog order
    fn take(&self, n: usize) -> Vec<VideoResult>;

    /// Number of entries in the catalog
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed, in-memory list of videos served when the live search cannot be used
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    videos: Vec<VideoResult>,
}

impl SampleCatalog {
    /// Create the catalog with the built-in sample videos
    pub fn new() -> Self {
        Self::from_videos(vec![
            sample_video(
                "dQw4w9WgXcQ",
                "Habitos saludables para el dia a dia",
                "Bienestar Hoy",
                (2023, 5, 1, 12, 0),
                "Consejos rapidos para mejorar tu rutina de alimentacion.",
            ),
            sample_video(
                "kXYiU_JCYtU",
                "Ejercicios rapidos en casa",
                "Move Fit",
                (2023, 7, 15, 9, 30),
                "Rutina de 10 minutos para estudiantes ocupados.",
            ),
            sample_video(
                "3JZ_D3ELwOQ",
                "Planifica tus comidas: guia facil",
                "NutriTips",
                (2023, 3, 22, 18, 45),
                "Como armar menus semanales balanceados.",
            ),
        ])
    }

    /// Create a catalog over an arbitrary ordered list of videos
    pub fn from_videos(videos: Vec<VideoResult>) -> Self {
        Self { videos }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for SampleCatalog {
    fn take(&self, n: usize) -> Vec<VideoResult> {
        self.videos.iter().take(n).cloned().collect()
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}

fn sample_video(
    id: &str,
    title: &str,
    channel: &str,
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
    description: &str,
) -> VideoResult {
    let published_at = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true));

    VideoResult {
        id: id.to_string(),
        title: title.to_string(),
        channel: channel.to_string(),
        url: VideoResult::watch_url(id),
        thumbnail: Some(format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg")),
        published_at,
        description: description.to_string(),
    }
}

use domain::VideoResult;
use serde_json::Value;

/// Thumbnail sizes in order of preference
const THUMBNAIL_SIZES: [&str; 2] = ["high", "default"];

/// Map one raw search item into a [`VideoResult`].
///
/// Returns `None` when the item carries no `id.videoId`; such entries are dropped by the
/// caller rather than reported.
pub fn normalize(item: &Value) -> Option<VideoResult> {
    let video_id = item
        .get("id")?
        .get("videoId")?
        .as_str()
        .filter(|id| !id.is_empty())?;

    let snippet = item.get("snippet");
    let text = |field: &str| {
        snippet
            .and_then(|s| s.get(field))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let thumbnail = THUMBNAIL_SIZES.iter().find_map(|size| {
        snippet?
            .get("thumbnails")?
            .get(size)?
            .get("url")?
            .as_str()
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    });

    Some(VideoResult {
        id: video_id.to_string(),
        title: text("title").unwrap_or_default(),
        channel: text("channelTitle").unwrap_or_default(),
        url: VideoResult::watch_url(video_id),
        thumbnail,
        published_at: text("publishedAt"),
        description: text("description").unwrap_or_default(),
    })
}

use crate::constants::UPLOAD_FIELD;
use crate::modules::video::schema::VideoRecord;

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <nav><a href="/">Home</a> | <a href="/videos">Videos</a></nav>
{content}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn index(title: &str) -> String {
    let content = format!(
        r#"  <h1>{title}</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <input type="file" name="{UPLOAD_FIELD}" accept="video/*" required>
    <button type="submit">Upload</button>
  </form>
  <p><a href="/videos">Browse uploaded videos</a></p>"#,
        title = escape_html(title),
    );
    layout(title, &content)
}

pub fn videos(records: &[VideoRecord]) -> String {
    let content = if records.is_empty() {
        "  <h1>Videos</h1>\n  <p>No videos uploaded yet.</p>".to_string()
    } else {
        let items: String = records.iter().map(video_item).collect();
        format!("  <h1>Videos</h1>\n  <ul class=\"videos\">\n{items}  </ul>")
    };
    layout("Videos", &content)
}

fn video_item(record: &VideoRecord) -> String {
    let url = escape_html(&record.url);
    let modified = record
        .last_modified
        .map(|lm| lm.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        r#"    <li data-key="{key}">
      <video controls preload="metadata" src="{url}"></video>
      <p><a href="{url}">{key}</a></p>
      <p>{size} &middot; {modified}</p>
    </li>
"#,
        key = escape_html(&record.key),
        size = format_size(record.size),
    )
}

pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::persist::AtomicFileWriter;
use crate::routes::MANIFEST_FILE;
use crate::{BuildError, FallbackRecord, PageRecord};

/// Writes `manifest.json`: every route with its file, and every image fallback.
pub fn write_manifest(
    output_dir: &Path,
    pages: &[PageRecord],
    fallbacks: &[FallbackRecord],
) -> Result<PathBuf, BuildError> {
    let manifest = manifest_json(output_dir, pages, fallbacks);
    let body = serde_json::to_string_pretty(&manifest)?;
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    Ok(writer.write(MANIFEST_FILE, &body)?)
}

pub fn manifest_json(
    output_dir: &Path,
    pages: &[PageRecord],
    fallbacks: &[FallbackRecord],
) -> serde_json::Value {
    json!({
        "page_count": pages.len(),
        "pages": pages.iter().map(|page| {
            let file = page
                .path
                .strip_prefix(output_dir)
                .unwrap_or(page.path.as_path())
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            json!({
                "route": page.route,
                "file": file,
                "bytes": page.bytes,
            })
        }).collect::<Vec<_>>(),
        "fallbacks": fallbacks.iter().map(|record| {
            json!({
                "src": record.src,
                "fallback": record.fallback,
                "reason": record.reason,
            })
        }).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_relative_to_output_dir() {
        let root = Path::new("/tmp/site");
        let pages = vec![PageRecord {
            route: "/events/page/2/".to_string(),
            path: root.join("events").join("page").join("2").join("index.html"),
            bytes: 42,
        }];
        let value = manifest_json(root, &pages, &[]);
        assert_eq!(value["page_count"], 1);
        assert_eq!(value["pages"][0]["file"], "events/page/2/index.html");
        assert_eq!(value["fallbacks"].as_array().map(Vec::len), Some(0));
    }
}

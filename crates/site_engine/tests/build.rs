mod common;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{FakeProbe, TestSink};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use site_engine::{build_site, BuildEvent, EngineHandle, ImageProbe, SiteSettings, Stage};
use tempfile::TempDir;

const BROKEN_HERO: &str = "/images/event8.jpg";

fn settings(dir: &Path) -> SiteSettings {
    SiteSettings {
        output_dir: dir.join("public"),
        ..SiteSettings::default()
    }
}

fn fake_factory(_: &SiteSettings) -> Arc<dyn ImageProbe> {
    Arc::new(FakeProbe::failing(&[]))
}

fn read(dir: &Path, file: &str) -> Html {
    Html::parse_document(&fs::read_to_string(dir.join(file)).unwrap())
}

fn count(doc: &Html, css: &str) -> usize {
    doc.select(&Selector::parse(css).unwrap()).count()
}

#[tokio::test]
async fn writes_every_filter_and_page() {
    common::init_logging();
    let temp = TempDir::new().unwrap();
    let settings = settings(temp.path());
    let probe = FakeProbe::failing(&[]);
    let sink = TestSink::default();

    let summary = build_site(&settings, &probe, &sink).await.unwrap();
    let out = &settings.output_dir;

    for file in [
        "index.html",
        "404.html",
        "events/index.html",
        "events/page/2/index.html",
        "events/page/3/index.html",
        "events/filter/past/index.html",
        "events/filter/past/page/2/index.html",
        "events/filter/present/index.html",
        "events/filter/future/index.html",
        "videos/page/2/index.html",
        "videos/filter/facebook/index.html",
        "publications/page/3/index.html",
        "publications/filter/ebook/index.html",
        "events/faons-icn-2022/index.html",
        "manifest.json",
    ] {
        assert!(out.join(file).is_file(), "missing {file}");
    }
    assert!(!out.join("events/page/4").exists());
    assert!(!out.join("events/filter/present/page/2").exists());

    // home, 7 event lists, 5 video lists, 7 publication lists, 13 details, 404
    assert_eq!(summary.pages.len(), 34);
    assert!(summary.fallbacks.is_empty());

    assert_eq!(count(&read(out, "events/index.html"), "article.card"), 6);
    assert_eq!(count(&read(out, "events/page/3/index.html"), "article.card"), 1);
    assert_eq!(count(&read(out, "publications/page/3/index.html"), "article.card"), 4);

    let ebook = read(out, "publications/filter/ebook/index.html");
    let message: String = ebook
        .select(&Selector::parse("p.empty").unwrap())
        .flat_map(|el| el.text())
        .collect();
    assert_eq!(message, "No ebook publications available.");
}

#[tokio::test]
async fn failed_images_fall_back_and_land_in_manifest() {
    let temp = TempDir::new().unwrap();
    let settings = settings(temp.path());
    let probe = FakeProbe::failing(&[BROKEN_HERO]);
    let sink = TestSink::default();

    let summary = build_site(&settings, &probe, &sink).await.unwrap();
    assert_eq!(summary.fallbacks.len(), 1);
    assert_eq!(summary.fallbacks[0].src, BROKEN_HERO);
    assert_eq!(summary.fallbacks[0].fallback, "/images/event-placeholder.svg");

    let seen = probe.seen();
    assert_eq!(seen.iter().filter(|src| *src == BROKEN_HERO).count(), 1);

    let detail = read(&settings.output_dir, "events/brain-health-expo/index.html");
    let hero = detail
        .select(&Selector::parse("img.hero-image").unwrap())
        .next()
        .unwrap();
    assert_eq!(hero.value().attr("src"), Some("/images/event-placeholder.svg"));
    assert_eq!(hero.value().attr("onerror"), None);

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary.manifest_path).unwrap()).unwrap();
    assert_eq!(manifest["page_count"], 34);
    assert_eq!(manifest["fallbacks"][0]["src"], BROKEN_HERO);
    assert!(manifest["fallbacks"][0]["reason"]
        .as_str()
        .unwrap()
        .contains("404"));

    let events = sink.take();
    assert!(events.contains(&BuildEvent::StageChanged(Stage::ProbingImages)));
    assert!(events
        .iter()
        .any(|event| matches!(event, BuildEvent::ImageFellBack(record) if record.src == BROKEN_HERO)));
    assert_eq!(events.last(), Some(&BuildEvent::StageChanged(Stage::Done)));
    let written = events
        .iter()
        .filter(|event| matches!(event, BuildEvent::PageWritten { .. }))
        .count();
    assert_eq!(written, 34);
}

#[tokio::test]
async fn rebuild_overwrites_in_place() {
    let temp = TempDir::new().unwrap();
    let settings = settings(temp.path());
    let probe = FakeProbe::failing(&[]);
    let sink = TestSink::default();

    let first = build_site(&settings, &probe, &sink).await.unwrap();
    let index = fs::read_to_string(settings.output_dir.join("index.html")).unwrap();
    let second = build_site(&settings, &probe, &sink).await.unwrap();

    assert_eq!(first.pages, second.pages);
    assert_eq!(
        fs::read_to_string(settings.output_dir.join("index.html")).unwrap(),
        index
    );
}

#[test]
fn engine_handle_reports_completion() {
    let temp = TempDir::new().unwrap();
    let settings = settings(temp.path());
    let engine = EngineHandle::with_probe_factory(fake_factory);
    engine.start_build(settings.clone());

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut completed = None;
    while completed.is_none() && Instant::now() < deadline {
        match engine.try_recv() {
            Some(BuildEvent::Completed(result)) => completed = Some(result),
            Some(_) => {}
            None => std::thread::sleep(Duration::from_millis(10)),
        }
    }
    let summary = completed.unwrap().unwrap();
    assert_eq!(summary.output_dir, settings.output_dir);
    assert!(settings.output_dir.join("manifest.json").is_file());
}

#[test]
fn engine_handle_reports_unwritable_output() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("public");
    fs::write(&blocker, "not a directory").unwrap();
    let engine = EngineHandle::with_probe_factory(fake_factory);
    engine.start_build(settings(temp.path()));

    let mut completed = None;
    while let Some(event) = engine.recv() {
        if let BuildEvent::Completed(result) = event {
            completed = Some(result);
            break;
        }
    }
    let err = completed.unwrap().unwrap_err();
    assert!(err.contains("output directory"), "{err}");
}

// SPDX-License-Identifier: MPL-2.0
use artefact::catalog::Catalog;
use artefact::config::{self, Config, DEFAULT_CONSULTATION_DELAY_MS, DEFAULT_DAMPING};
use artefact::i18n::I18n;
use artefact::notifier::OrderLink;
use artefact::ui::page_layout::{PageLayout, RevealTarget};
use artefact::ui::state::{
    Damping, PointerFollowAnimator, RevealGroup, ScrollBoundaryWatcher, TimedTrigger,
};
use iced::{Point, Size};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut russian = Config::default();
    russian.general.language = Some("ru".to_string());
    config::save_to_path(&russian, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");
    assert_eq!(i18n.tr("hero-cta"), "Смотреть галерею");
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[motion\ndamping = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn motion_settings_reach_the_state_machines() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[motion]\ndamping = 0.5\n\n[disclosure]\nconsultation_delay_ms = 1000\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!((config.motion.damping() - 0.5).abs() < f32::EPSILON);
    assert_eq!(config.disclosure.consultation_delay(), Duration::from_millis(1000));

    let defaults = Config::default();
    assert!((defaults.motion.damping() - DEFAULT_DAMPING).abs() < f32::EPSILON);
    assert_eq!(
        defaults.disclosure.consultation_delay(),
        Duration::from_millis(DEFAULT_CONSULTATION_DELAY_MS)
    );
}

#[test]
fn follower_converges_on_stationary_pointer() {
    let viewport = Size::new(1280.0, 720.0);
    let mut animator = PointerFollowAnimator::new(viewport, Damping::new(0.08));
    animator.activate(viewport);
    animator.on_pointer_move(Point::new(500.0, 500.0));

    let distance = |a: &PointerFollowAnimator| {
        let (raw, eased) = (a.instant_marker(), a.lazy_marker());
        ((raw.x - eased.x).powi(2) + (raw.y - eased.y).powi(2)).sqrt()
    };

    assert!(animator.on_frame());
    let first = animator.lazy_marker();
    assert!((first.x - 628.8).abs() < 1e-3);
    assert!((first.y - 371.2).abs() < 1e-3);

    let mut previous = distance(&animator);
    for _ in 0..200 {
        animator.on_frame();
        let current = distance(&animator);
        assert!(current < previous || current < 1e-3);
        previous = current;
    }
    assert!(previous < 0.1);

    animator.deactivate();
    animator.on_pointer_move(Point::ORIGIN);
    assert!(!animator.on_frame());
    assert_eq!(animator.instant_marker(), Point::new(500.0, 500.0));
}

#[test]
fn page_scroll_drives_reveals_and_boundary() {
    let catalog = Catalog::builtin();
    let size = Size::new(1280.0, 800.0);
    let layout = PageLayout::compute(size, &catalog);
    let mut reveals = RevealGroup::new(layout.reveal_targets(), 0.12);
    let mut watcher = ScrollBoundaryWatcher::new("gallery");

    let visible = |offset: f32| iced::Rectangle::new(Point::new(0.0, offset), size);

    assert!(!watcher.attach(&layout.anchors(0.0)));
    reveals.observe_all(|target| layout.bounds_of(target), visible(0.0));
    assert!(reveals.is_revealed(RevealTarget::Hero));
    assert!(!reveals.is_revealed(RevealTarget::About));

    let about = layout.section("about").expect("about section");
    assert!(watcher.on_scroll(&layout.anchors(about.y)));
    reveals.observe_all(|target| layout.bounds_of(target), visible(about.y));
    assert!(reveals.is_revealed(RevealTarget::About));

    assert!(!watcher.on_scroll(&layout.anchors(0.0)));
    reveals.observe_all(|target| layout.bounds_of(target), visible(0.0));
    assert!(reveals.is_revealed(RevealTarget::About));
}

#[test]
fn consultation_trigger_fires_once() {
    let start = Instant::now();
    let mut trigger = TimedTrigger::new();
    trigger
        .start(start, Duration::from_millis(30_000), || "consultation")
        .expect("first start");

    assert_eq!(trigger.poll(start + Duration::from_millis(29_999)), None);
    assert_eq!(trigger.poll(start + Duration::from_millis(30_000)), Some("consultation"));
    assert_eq!(trigger.poll(start + Duration::from_secs(60)), None);
    assert!(trigger.start(start, Duration::ZERO, || "again").is_err());
}

#[test]
fn builtin_catalog_links_to_chat() {
    let catalog = Catalog::builtin();
    let link = OrderLink::new("https://t.me", "artefact_gallery");

    for item in catalog.items() {
        let url = link.for_item(item);
        let (_, query) = url.split_once("?text=").expect("query present");
        let text = urlencoding::decode(query).expect("valid utf-8");
        assert!(text.contains(&format!("\"{}\"", item.title)));
        assert!(text.ends_with(&item.price.with_currency()));
    }
}

// SPDX-License-Identifier: MPL-2.0
use folio_sync::app::{App, HostEvent};
use folio_sync::application::port::TimerDriver;
use folio_sync::config::{self, Config, PAGE_SECTIONS};
use folio_sync::diagnostics::{DiagnosticEventKind, ErrorType};
use folio_sync::domain::ids::{ItemId, SectionId};
use folio_sync::domain::newtypes::VisibilityThreshold;
use folio_sync::infrastructure::GeometricObserver;
use folio_sync::test_utils::fakes::{Frames, Intersections, Media, Pointer, Scroll, Timers};
use folio_sync::ui::shell::{self, modal, Effect, ModalKind, Ports};
use folio_sync::ui::subcomponents::overlay::Visibility;
use folio_sync::ui::subcomponents::sections;
use iced::{Point, Rectangle, Size};
use tempfile::tempdir;

struct Host {
    frames: Frames,
    timers: Timers,
    intersections: Intersections,
    pointer: Pointer,
    scroll: Scroll,
}

impl Host {
    fn new() -> Self {
        Self {
            frames: Frames::new(),
            timers: Timers::new(),
            intersections: Intersections::with_sections(PAGE_SECTIONS),
            pointer: Pointer::new(),
            scroll: Scroll::with_sections(PAGE_SECTIONS),
        }
    }

    fn ports(&self) -> Ports {
        Ports {
            frames: Box::new(self.frames.clone()),
            timers: Box::new(self.timers.clone()),
            intersections: Box::new(self.intersections.clone()),
            pointer_events: Box::new(self.pointer.clone()),
            cursors: Box::new(self.pointer.clone()),
            scroll: Box::new(self.scroll.clone()),
        }
    }

    fn assert_nothing_outstanding(&self) {
        assert_eq!(self.frames.pending(), 0, "frame requests left");
        assert_eq!(self.timers.pending(), 0, "timers left");
        assert_eq!(self.pointer.listeners(), 0, "pointer listeners left");
        assert_eq!(self.pointer.cursors(), 0, "cursor elements left");
        assert!(self.intersections.observed().is_empty(), "observations left");
        assert!(!self.scroll.is_locked(), "scroll still locked");
    }
}

fn open_video_modal(app: &mut App, media: &Media) {
    app.dispatch(shell::Message::OpenModal {
        kind: ModalKind::Expertise,
        item: ItemId::from("motion-design"),
        media: Box::new(media.clone()),
    });
}

fn visibility_changes(effects: &[Effect]) -> Vec<Visibility> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Modal(modal::Effect::ControlsVisibility(v)) => Some(*v),
            _ => None,
        })
        .collect()
}

/// Advances the clock and collects controls visibility changes.
fn wait(app: &mut App, host: &Host, millis: u64) -> Vec<Visibility> {
    host.timers.advance_ms(millis);
    visibility_changes(&app.update(HostEvent::Tick))
}

#[test]
fn idle_modal_hides_controls_exactly_once() {
    let host = Host::new();
    let mut app = App::new(host.ports(), &Config::default());
    open_video_modal(&mut app, &Media::new());

    assert!(wait(&mut app, &host, 2999).is_empty());
    assert_eq!(wait(&mut app, &host, 1), vec![Visibility::Hidden]);
    assert!(wait(&mut app, &host, 10_000).is_empty());

    // movement shows the controls and starts a fresh window from that moment
    let effects = app.update(HostEvent::PointerMoved(Point::new(10.0, 10.0)));
    assert_eq!(visibility_changes(&effects), vec![Visibility::Visible]);
    assert!(wait(&mut app, &host, 2999).is_empty());
    assert_eq!(wait(&mut app, &host, 1), vec![Visibility::Hidden]);
}

#[test]
fn activity_just_before_deadline_extends_window() {
    let host = Host::new();
    let mut app = App::new(host.ports(), &Config::default());
    open_video_modal(&mut app, &Media::new());

    assert!(wait(&mut app, &host, 2999).is_empty());
    app.update(HostEvent::PointerMoved(Point::new(1.0, 1.0)));

    // hidden at 5999 ms after open, not at 3000
    assert!(wait(&mut app, &host, 1).is_empty());
    assert!(wait(&mut app, &host, 2998).is_empty());
    assert_eq!(wait(&mut app, &host, 1), vec![Visibility::Hidden]);
}

#[test]
fn saved_hide_delay_is_used() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let saved = Config {
        overlay_hide_delay_ms: Some(5000),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let host = Host::new();
    let mut app = App::new(host.ports(), &loaded);
    open_video_modal(&mut app, &Media::new());

    assert!(wait(&mut app, &host, 3000).is_empty());
    assert_eq!(wait(&mut app, &host, 2000), vec![Visibility::Hidden]);
}

#[test]
fn shutdown_leaves_nothing_outstanding() {
    let host = Host::new();
    let media = Media::new();
    let mut app = App::new(host.ports(), &Config::default());
    open_video_modal(&mut app, &media);
    app.update(HostEvent::Frame);

    app.shutdown();

    host.assert_nothing_outstanding();
    assert!(!media.is_playing());
    assert!(app.update(HostEvent::Frame).is_empty());
}

#[test]
fn dropping_the_app_leaves_nothing_outstanding() {
    let host = Host::new();
    let media = Media::new();
    {
        let mut app = App::new(host.ports(), &Config::default());
        open_video_modal(&mut app, &media);
        app.update(HostEvent::PointerMoved(Point::new(4.0, 4.0)));
    }

    host.assert_nothing_outstanding();
    assert!(!media.time_updates());
}

#[test]
fn blocked_autoplay_ends_up_in_the_report() {
    let host = Host::new();
    let mut app = App::new(host.ports(), &Config::default());
    open_video_modal(&mut app, &Media::rejecting("NotAllowedError: autoplay policy"));

    let state = app
        .page()
        .modal()
        .and_then(|modal| modal.playback().state().copied())
        .expect("media bound");
    assert!(!state.is_playing());

    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("report.json");
    app.export_diagnostics(&path).expect("export should succeed");
    let report = std::fs::read_to_string(&path).expect("report readable");
    assert!(report.contains("playback_blocked"));
    assert!(report.contains("open_modal"));
}

#[test]
fn scrolling_the_page_moves_the_active_section() {
    let mut observer = GeometricObserver::new(VisibilityThreshold::default());
    for (index, section) in PAGE_SECTIONS.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = index as f32 * 900.0;
        observer.set_layout(
            *section,
            Rectangle::new(Point::new(0.0, y), Size::new(1280.0, 900.0)),
        );
    }
    let host = Host::new();
    let ports = Ports {
        intersections: Box::new(observer),
        ..host.ports()
    };
    let mut app = App::new(ports, &Config::default());

    let viewport = |y: f32| {
        HostEvent::ViewportChanged(Rectangle::new(
            Point::new(0.0, y),
            Size::new(1280.0, 900.0),
        ))
    };
    app.update(viewport(0.0));
    assert_eq!(app.page().active_section(), &SectionId::from("home"));

    let effects = app.update(viewport(900.0 * 6.0));
    assert!(effects.contains(&Effect::SectionActivated(SectionId::from("projects"))));
    assert_eq!(app.page().active_section().as_str(), "projects");
}

#[test]
fn timers_driver_is_only_used_while_modal_open() {
    let host = Host::new();
    let mut app = App::new(host.ports(), &Config::default());
    assert_eq!(host.timers.pending(), 0);

    open_video_modal(&mut app, &Media::new());
    assert_eq!(host.timers.pending(), 1);

    app.dispatch(shell::Message::CloseModal);
    assert_eq!(host.timers.pending(), 0);
}

#[test]
fn sections_laid_out_after_mount_are_tracked() {
    let host = Host::new();
    let ports = Ports {
        intersections: Box::new(GeometricObserver::new(VisibilityThreshold::default())),
        ..host.ports()
    };
    let mut app = App::new(ports, &Config::default());

    for (index, section) in PAGE_SECTIONS.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = index as f32 * 900.0;
        app.dispatch(shell::Message::Sections(sections::Message::Layout {
            section: SectionId::from(*section),
            bounds: Rectangle::new(Point::new(0.0, y), Size::new(1280.0, 900.0)),
        }));
    }

    let effects = app.update(HostEvent::ViewportChanged(Rectangle::new(
        Point::new(0.0, 900.0 * 8.0),
        Size::new(1280.0, 900.0),
    )));
    assert!(effects.contains(&Effect::SectionActivated(SectionId::from("contact"))));
    assert_eq!(app.page().active_section().as_str(), "contact");
}

#[test]
fn failed_export_is_recorded_as_an_error() {
    let host = Host::new();
    let mut app = App::new(host.ports(), &Config::default());
    let dir = tempdir().expect("Failed to create temporary directory");
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, "file").expect("Failed to write blocker file");

    assert!(app.export_diagnostics(&blocker.join("report.json")).is_err());

    let errors: Vec<ErrorType> = app
        .diagnostics()
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::Error { event } => Some(event.error_type),
            _ => None,
        })
        .collect();
    assert_eq!(errors, vec![ErrorType::IoError]);

    let path = dir.path().join("report.json");
    app.export_diagnostics(&path).expect("export should succeed");
    let report = std::fs::read_to_string(&path).expect("report readable");
    assert!(report.contains("io_error"));
}

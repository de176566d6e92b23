// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, settings and the hero's
//! deferred mount controller, and translates page messages into side effects
//! like clipboard writes, scrolling or config persistence.
//!
//! The hero mount is activated in [`App::new`] and torn down when the window
//! close is requested, before the runtime exits.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content;
use crate::hero::{HeroMount, HeroTimer, MountTicket};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::video;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    hero: HeroMount,
    /// Calendar year at startup, for the years-traded figure and copyright.
    year: i32,
    /// One-line feedback shown in the nav bar (copied link, config warning).
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("hero", &self.hero)
            .field("year", &self.year)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
///
/// Close requests are delivered as messages so the hero can be torn down
/// before exit.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());

    if let Err(error) = video::init_ffmpeg() {
        // The hero mount will fail on its own and leave the region empty
        tracing::warn!(%error, "FFmpeg initialization failed");
    }

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the mount delay timer and the handle that aborts it.
///
/// The sleep is created when the task is first polled, inside the runtime.
fn hero_timer(delay: Duration, ticket: MountTicket) -> (Task<Message>, HeroTimer) {
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::HeroTimerFired(ticket),
    )
    .abortable();
    (task, HeroTimer::new(handle))
}

impl App {
    /// Loads settings and localization, then activates the hero mount.
    ///
    /// The returned task is the mount delay timer; its abort handle is owned
    /// by the mount controller.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let status = config_warning.map(|key| {
            tracing::warn!(key = %key, "continuing with default settings");
            i18n.tr(&key)
        });

        let mut hero = HeroMount::new(config.hero.mount_delay(), config.hero.ascii_config());
        let mut timer_task = Task::none();
        hero.activate(|delay, ticket| {
            let (task, timer) = hero_timer(delay, ticket);
            timer_task = task;
            timer
        });

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            hero,
            year: content::current_year(),
            status,
        };

        (app, timer_task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let hero_sub = subscription::create_hero_subscription(&self.hero);

        Subscription::batch([event_sub, hero_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            hero: &mut self.hero,
            status: &mut self.status,
        };

        match message {
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::HeroTimerFired(ticket) => update::handle_hero_timer(&mut ctx, ticket),
            Message::WindowCloseRequested(window_id) => {
                update::handle_window_close(&mut ctx, window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            hero: &self.hero,
            year: self.year,
            theme_mode: self.theme_mode,
            status: self.status.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii;
    use crate::hero::MountPhase;
    use crate::ui::page;
    use crate::test_utils::env_lock;
    use std::fs;
    use tempfile::tempdir;

    /// Restores the directory variables on drop, including after a panic.
    struct EnvRestore(Vec<(&'static str, Option<String>)>);

    impl Drop for EnvRestore {
        fn drop(&mut self) {
            for (name, previous) in self.0.drain(..) {
                match previous {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
    }

    /// Runs `test` with config and assets directories pointed at a temp dir.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let _restore = EnvRestore(
            [paths::ENV_CONFIG_DIR, paths::ENV_ASSETS_DIR]
                .into_iter()
                .map(|name| (name, std::env::var(name).ok()))
                .collect(),
        );
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_ASSETS_DIR, temp_dir.path());

        test(temp_dir.path());
    }

    fn new_app() -> App {
        App::new(Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        })
        .0
    }

    #[test]
    fn new_app_schedules_hero_mount() {
        with_temp_dirs(|_| {
            let app = new_app();
            assert_eq!(app.hero.phase(), MountPhase::Pending);
            assert!(!app.hero.is_ready());
            assert!(app.status.is_none());
        });
    }

    #[test]
    fn hero_timer_builds_without_a_runtime() {
        assert!(tokio::runtime::Handle::try_current().is_err());

        let mut hero =
            HeroMount::new(Duration::from_millis(300), ascii::AsciiVideoConfig::default());
        let mut timer_task = None;
        assert!(hero.activate(|delay, ticket| {
            let (task, timer) = hero_timer(delay, ticket);
            timer_task = Some(task);
            timer
        }));

        assert!(timer_task.is_some());
        assert_eq!(hero.phase(), MountPhase::Pending);
        hero.deactivate();
        assert_eq!(hero.phase(), MountPhase::Terminated);
    }

    #[test]
    fn new_app_uses_configured_theme_and_delay() {
        with_temp_dirs(|dir| {
            fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"light\"\n\n[hero]\nmount_delay_ms = 450\n",
            )
            .expect("failed to write settings");

            let app = new_app();
            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);
            assert_eq!(app.hero.delay(), Duration::from_millis(450));
        });
    }

    #[test]
    fn broken_settings_surface_a_status_line() {
        with_temp_dirs(|dir| {
            fs::write(dir.join("settings.toml"), "[general\n").expect("failed to write settings");

            let app = new_app();
            assert_eq!(app.config, Config::default());
            assert_eq!(
                app.status.as_deref(),
                Some("The settings file could not be read. Defaults are in use.")
            );
        });
    }

    #[test]
    fn title_is_localized() {
        with_temp_dirs(|_| {
            let app = new_app();
            assert_eq!(app.title(), "K. Mike Merrill | Speaker");
        });
    }

    #[test]
    fn hero_without_clip_fails_quietly() {
        with_temp_dirs(|_| {
            let mut app = new_app();
            let ticket = next_ticket(&app);

            let _ = app.update(Message::HeroTimerFired(ticket));

            assert_eq!(app.hero.phase(), MountPhase::Failed);
            assert!(app.hero.is_ready());
            assert!(app.hero.module().is_none());
        });
    }

    #[test]
    fn hero_mounts_when_clip_is_present() {
        with_temp_dirs(|dir| {
            fs::write(dir.join("hero-clip.mp4"), b"clip").expect("failed to write clip");
            let mut app = new_app();
            let ticket = next_ticket(&app);

            let _ = app.update(Message::HeroTimerFired(ticket));

            assert_eq!(app.hero.phase(), MountPhase::Active);
            let video = app.hero.module().expect("hero should be mounted");
            assert_eq!(video.config().column_count, 180);
            assert_eq!(video.phase(), ascii::Phase::Loading);
        });
    }

    #[test]
    fn window_close_tears_down_hero() {
        with_temp_dirs(|dir| {
            fs::write(dir.join("hero-clip.mp4"), b"clip").expect("failed to write clip");
            let mut app = new_app();
            let ticket = next_ticket(&app);

            let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
            let _ = app.update(Message::HeroTimerFired(ticket));

            assert_eq!(app.hero.phase(), MountPhase::Terminated);
            assert!(app.hero.module().is_none());
            assert!(!app.hero.is_ready());
        });
    }

    #[test]
    fn toggle_theme_flips_mode() {
        with_temp_dirs(|_| {
            let mut app = new_app();
            let before = app.theme_mode.is_dark();

            let _ = app.update(Message::Page(page::Message::ToggleTheme));

            assert_eq!(app.theme_mode.is_dark(), !before);
            assert_eq!(app.config.general.theme_mode, app.theme_mode);
        });
    }

    #[test]
    fn copying_a_link_reports_it() {
        with_temp_dirs(|_| {
            let mut app = new_app();

            let _ = app.update(Message::Page(page::Message::CopyLink(content::SHARES_URL)));

            assert_eq!(
                app.status.as_deref(),
                Some("Copied https://kmikeym.com to the clipboard")
            );
        });
    }

    fn next_ticket(app: &App) -> crate::hero::MountTicket {
        app.hero
            .pending_ticket()
            .expect("hero mount should be pending")
    }
}

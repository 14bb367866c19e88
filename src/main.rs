use std::time::Duration;

use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use neon_snake::audio::{AudioSink, SfxBank};
use neon_snake::controls::{Command, Controls, InputContext};
use neon_snake::game::{Action, GameLoop, Overlay};
use neon_snake::leaderboard::{JsonFileStorage, Leaderboard};
use neon_snake::render::{self, BoardLayout, Palette};
use neon_snake::settings::{self, Settings, SettingsStore};
use neon_snake::ui::{self, OverlayView, SfxTester};

fn window_conf() -> Conf {
    Conf {
        window_title: "Neon Snake".to_owned(),
        window_width: 720,
        window_height: 820,
        high_dpi: true,
        ..Default::default()
    }
}

fn persist(store: &SettingsStore, settings: &Settings) {
    if let Err(e) = store.save(settings) {
        warn!("Failed to save settings: {}", e);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neon_snake=info".into()),
        )
        .init();

    let store = SettingsStore::from_env();
    let mut settings = store.load();
    let dev = settings::dev_mode();
    info!("Using data directory {}", store.dir().display());

    let leaderboard = Leaderboard::load(JsonFileStorage::new(store.leaderboard_path()));
    let sounds = SfxBank::load(settings.sound_volume).await;
    let mut game = GameLoop::new(sounds, leaderboard, settings.theme);
    let mut controls = Controls::new();
    let mut tester = SfxTester::default();
    let mut unmuted_volume = if settings.sound_volume > 0.0 {
        settings.sound_volume
    } else {
        1.0
    };

    let mut last_time = get_time();
    loop {
        let now = get_time();
        let dt = Duration::from_secs_f64((now - last_time).max(0.0));
        last_time = now;

        let layout = BoardLayout::fit(screen_width(), screen_height());
        let ctx = InputContext {
            typing_name: game.overlay() == Overlay::GameOver && game.name_entry().is_some(),
            overlay_visible: game.overlay().is_visible(),
            dev,
            layout,
        };
        for command in controls.poll(&ctx) {
            match command {
                Command::Game(action) => {
                    let toggles_theme = action == Action::ToggleTheme;
                    game.handle(action);
                    if toggles_theme {
                        settings.theme = game.theme();
                        persist(&store, &settings);
                    }
                }
                Command::ToggleMute => {
                    let bank = game.audio_mut();
                    if bank.volume() > 0.0 {
                        unmuted_volume = bank.volume();
                        bank.set_volume(0.0);
                        bank.stop_all();
                    } else {
                        bank.set_volume(unmuted_volume);
                    }
                    settings.sound_volume = bank.volume();
                    info!("Sound volume {}", settings.sound_volume);
                    persist(&store, &settings);
                }
                Command::TesterPrevious => tester.previous(),
                Command::TesterNext => tester.next(),
                Command::TesterPlay => {
                    let (theme, cue) = tester.current();
                    let bank = game.audio_mut();
                    bank.unlock();
                    bank.play_cue(cue, theme);
                }
            }
        }

        let palette = Palette::for_theme(game.theme());
        let muted = game.audio().volume() <= 0.0;
        clear_background(palette.background);
        {
            let snapshot = game.advance(dt);
            render::draw_board(&snapshot, &palette, &layout);
            ui::draw_hud(&snapshot.stats, &palette, &layout, muted);
        }

        let view = OverlayView {
            overlay: game.overlay(),
            theme: game.theme(),
            stats: game.stats(),
            name_entry: game.name_entry(),
            typed_name: controls.typed_name(),
            records: game.leaderboard().records(),
            highlight: game.highlight(),
        };
        ui::draw_overlay(&view, &layout);
        ui::draw_dpad(&layout, &palette);
        if dev {
            tester.draw(&palette);
        }

        next_frame().await;
    }
}

//=========================================================================
// Scripted Round
//=========================================================================
//
// Headless demo: drives a session through two rounds with in-memory
// collaborators and logs what happens.
//
// Run with `RUST_LOG=debug` to see every transition and audio cue.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::process::ExitCode;
use std::time::Duration;

use log::{error, info};

//=== Internal Dependencies ===============================================

use aetheric_session::headless::{ObstacleField, PlayerSwitch, RecordingChannel, TextLabel, Toggle};
use aetheric_session::prelude::*;

//=== Script ==============================================================

const TPS: f64 = 60.0;

/// What happens on a given frame of the script.
enum Cue {
    Press,
    Spawn,
    Pass,
    Die,
}

const SCRIPT: &[(u32, Cue)] = &[
    (10, Cue::Press),
    (20, Cue::Spawn),
    (40, Cue::Pass),
    (45, Cue::Spawn),
    (70, Cue::Pass),
    (80, Cue::Spawn),
    (95, Cue::Die),
    (95, Cue::Die),
    (96, Cue::Pass),
    (120, Cue::Press),
    (130, Cue::Spawn),
    (150, Cue::Pass),
    (160, Cue::Die),
];

const FRAMES: u32 = 180;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let player = PlayerSwitch::new(false);
    let score = TextLabel::new();
    let play_button = Toggle::new(true);
    let game_over = Toggle::new(false);
    let obstacles = ObstacleField::new();
    let audio = RecordingChannel::new();

    let mut host = SessionHost::new();
    let handle = match host.install(
        SessionBuilder::new()
            .with_player(player.clone())
            .with_score_display(score.clone())
            .with_play_button(play_button.clone())
            .with_game_over_panel(game_over.clone())
            .with_obstacles(obstacles.clone())
            .with_audio_channel(audio.clone())
            .with_menu_music(AudioClip::new("menu_theme"))
            .with_game_music(AudioClip::new("game_theme"))
            .with_death_sound(AudioClip::new("death"))
            .restart_music_on_silence(true),
    ) {
        Ok(session) => session.handle(),
        Err(e) => {
            error!("Failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let frame = Duration::from_secs_f64(1.0 / TPS);
    let mut simulated = Duration::ZERO;

    for n in 0..FRAMES {
        for (_, cue) in SCRIPT.iter().filter(|(at, _)| *at == n) {
            match cue {
                Cue::Press => {
                    handle.request_start();
                }
                Cue::Spawn => {
                    obstacles.spawn();
                }
                Cue::Pass => {
                    handle.report_score();
                }
                Cue::Die => {
                    handle.report_death();
                }
            }
        }

        // The death one-shot is short; let it finish a few frames later.
        if n == 100 {
            audio.finish_playback();
        }

        simulated += host.tick(frame);
    }

    if let Some(session) = host.active() {
        info!(
            "Final state {:?}, score {} (display \"{}\"), {:.2}s simulated",
            session.state(),
            session.score(),
            score.text(),
            simulated.as_secs_f64()
        );
    }
    info!(
        "Player enabled: {}, play button: {}, game-over panel: {}, obstacles left: {} ({} destroyed)",
        player.is_enabled(),
        play_button.is_visible(),
        game_over.is_visible(),
        obstacles.len(),
        obstacles.destroyed()
    );
    info!("One-shots played: {:?}", audio.one_shots());

    host.teardown();
    ExitCode::SUCCESS
}

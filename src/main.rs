//! Neon Numbers headless runner
//!
//! Loads settings, then lets the autoplayer drive a session the way a
//! presentation layer would: start, drag a rectangle, release, and tick the
//! in-transit tiles home before the next selection.
//!
//! Usage: `neon-numbers [settings.json]` (`RUST_LOG=debug` for per-move detail)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use neon_numbers::Settings;
    use neon_numbers::consts::NUMBERS_PER_TARGET;
    use neon_numbers::sim::{AutoPlayer, GameEvent, GameState, SelectionOutcome};

    env_logger::init();
    log::info!("Neon Numbers (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let mut state = GameState::with_settings(&settings, seed);
    let mut player = AutoPlayer::new(seed ^ 0x5eed, settings.blunder_chance);

    for turn in 0..settings.demo_selections {
        while !state.in_transit().is_empty() {
            state.tick();
        }
        let Some((a, b)) = player.next_move(&state) else {
            break;
        };

        if let Err(e) = state.start_selection() {
            log::warn!("Turn {}: {}", turn, e);
            break;
        }
        let outcome = state.select_rect(a, b).and_then(|_| state.end_selection());

        match outcome {
            Ok(SelectionOutcome::Committed {
                divisor,
                sum,
                events,
            }) => {
                log::debug!("Turn {}: sum {} collected by {}", turn, sum, divisor);
                for event in events {
                    if let GameEvent::TargetEscalated {
                        divisor,
                        old_prime,
                        new_prime,
                    } = event
                    {
                        println!("Target for {}: {} (was {})", divisor, new_prime, old_prime);
                    }
                }
            }
            Ok(SelectionOutcome::Rejected(reason)) => {
                log::debug!("Turn {}: rejected {:?}", turn, reason);
            }
            Err(e) => {
                log::warn!("Turn {}: {}", turn, e);
                break;
            }
        }

        // Resets and arrivals only reach the queue
        if state.drain_events().contains(&GameEvent::GameOver) {
            println!("Game over: health reached 0%");
        }
        if state.is_game_over() {
            break;
        }
    }

    println!("\nHealth: {}%", state.health());
    for record in state.targets() {
        println!(
            "{:<20} {:>3}% ({}/{}) to next prime",
            record.label(),
            record.escalation_percent(),
            record.lifetime_count,
            NUMBERS_PER_TARGET
        );
    }
    match serde_json::to_string_pretty(&state.stats()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Cannot serialize run stats: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; a presentation layer embeds `GameState` directly
}

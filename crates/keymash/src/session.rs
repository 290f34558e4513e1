//! Line-oriented stdin session.
//!
//! Each line is one input event: `key <char>`, `key #<code>` for a
//! non-printable key, `joy <button>`, `mouse`, or `quit`. The session prints
//! what the engine selected for each event and ends on the quit phrase, a
//! `quit` line, or end of input.

use std::io::{self, BufRead as _};

use config::{Settings, ThemeRegistry};
use event::{InputEvent, QuitTracker};
use respond::{ImageChoice, KeypressTrigger, Responder};
use tracing::info;

/// Parse one session line into an event. Blank and malformed lines are `None`.
fn parse_line(line: &str) -> Option<InputEvent> {
    let mut tokens = line.split_whitespace();
    match tokens.next()? {
        "key" => {
            let arg = tokens.next()?;
            if let Some(code) = arg.strip_prefix('#') {
                Some(InputEvent::key_down(code.parse().ok()?, None))
            } else {
                let mut chars = arg.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Some(InputEvent::key_down(ch as u32, Some(ch)))
            }
        }
        "joy" => Some(InputEvent::joy_button_down(tokens.next()?.parse().ok()?)),
        "mouse" => Some(InputEvent::mouse_button_down()),
        "quit" => Some(InputEvent::quit()),
        _ => None,
    }
}

fn trigger(settings: &config::TriggerSettings, responder: &mut Responder) -> KeypressTrigger {
    if settings.enabled {
        KeypressTrigger::enabled(settings.min, settings.max, responder.rng_mut())
    } else {
        KeypressTrigger::disabled()
    }
}

/// Run the session until quit or end of input.
pub fn run(mut responder: Responder, themes: ThemeRegistry, settings: &Settings) {
    let mut quit_phrase = QuitTracker::new();
    let mut theme_trigger = trigger(&settings.triggers.theme_change, &mut responder);
    let mut background_trigger = trigger(&settings.triggers.background_change, &mut responder);
    let mut current_theme = settings.display.theme.clone();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(event) = parse_line(&line) else {
            continue;
        };
        if event.kind == event::EventKind::Quit {
            break;
        }

        let response = responder.respond(&event);
        if let Some(sound) = &response.sound {
            println!("sound {}", sound.path.display());
        }
        match &response.image {
            Some(ImageChoice::File(handle)) => println!("image {}", handle.path.display()),
            Some(ImageChoice::Glyph(glyph)) => {
                let (r, g, b) = glyph.color;
                println!("glyph {} #{r:02x}{g:02x}{b:02x}", glyph.ch);
            }
            None => {}
        }

        if let Some(ch) = event.character() {
            if quit_phrase.observe(ch) {
                info!("quit phrase typed, ending session");
                break;
            }
        }

        if event.selects_media() {
            if theme_trigger.record(responder.rng_mut()) {
                if let Some(next) = {
                    let rng = responder.rng_mut();
                    themes
                        .random_other(&current_theme, |n| rng.index(n))
                        .cloned()
                } {
                    info!(theme = %next.name, "swapping theme");
                    println!("theme {}", next.name);
                    responder.set_palette(next.color_palette.clone());
                    current_theme = next.name;
                }
            }
            if background_trigger.record(responder.rng_mut()) {
                let rng = responder.rng_mut();
                if let Some(path) = {
                    let rotation = &settings.background.rotation;
                    if rotation.is_empty() {
                        None
                    } else {
                        Some(rotation[rng.index(rotation.len())].clone())
                    }
                } {
                    info!(background = %path, "swapping background");
                    println!("background {path}");
                }
            }
        }
    }
}

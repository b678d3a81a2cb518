//! Brick Breaker entry point
//!
//! In the browser this wires the canvas, keyboard, pause button, audio
//! element and HUD widgets to a [`Session`] and drives it with
//! `setTimeout`. Natively it plays one headless game on autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::audio::AudioManager;
    use brick_breaker::game_loop::{Scheduler, TickToken};
    use brick_breaker::hud::DomHud;
    use brick_breaker::input::InputEvent;
    use brick_breaker::render::CanvasSurface;
    use brick_breaker::sim::{GameConfig, Outcome};
    use brick_breaker::{Peripherals, Session, Settings, TickStatus};

    const CANVAS_ID: &str = "gameCanvas";
    const PAUSE_BUTTON_ID: &str = "pauseButton";

    /// Schedules ticks with `window.setTimeout`
    struct TimeoutScheduler {
        game: Weak<RefCell<Game>>,
    }

    impl Scheduler for TimeoutScheduler {
        fn schedule(&mut self, token: TickToken, delay: Duration) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let game = self.game.clone();
            let closure = Closure::once(move || {
                if let Some(game) = game.upgrade() {
                    run_tick(&game, token);
                }
            });
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                i32::try_from(delay.as_millis()).unwrap_or(i32::MAX),
            ) {
                log::error!("setTimeout failed: {:?}", e);
            }
            closure.forget();
        }
    }

    /// Game instance holding the session and its platform collaborators
    struct Game {
        session: Session<TimeoutScheduler>,
        surface: CanvasSurface,
        audio: AudioManager,
        hud: DomHud,
        settings: Settings,
    }

    impl Game {
        fn handle_input(&mut self, event: InputEvent) {
            self.session.handle_input(event);
            if event == InputEvent::ToggleAutopilot {
                self.settings.autopilot = self.session.autopilot();
                self.settings.save();
            }
        }
    }

    fn run_tick(game: &Rc<RefCell<Game>>, token: TickToken) {
        let status = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            let mut io = Peripherals {
                surface: &mut g.surface,
                audio: &mut g.audio,
                hud: &mut g.hud,
            };
            g.session.run_tick(token, &mut io)
        };

        if let TickStatus::Ended(outcome) = status {
            announce(outcome);
        }
    }

    /// Blocking notification, then a full restart
    fn announce(outcome: Outcome) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let message = match outcome {
            Outcome::Victory => "YOU WIN, CONGRATULATIONS!",
            Outcome::Defeat => "GAME OVER",
        };
        let _ = window.alert_with_message(message);
        let _ = window.location().reload();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Brick Breaker starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"{}\">", CANVAS_ID);
            return;
        };

        let config = GameConfig::default();
        canvas.set_width(config.surface_width as u32);
        canvas.set_height(config.surface_height as u32);

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new_cyclic(|weak: &Weak<RefCell<Game>>| {
            let scheduler = TimeoutScheduler { game: weak.clone() };
            RefCell::new(Game {
                session: Session::new(config, seed, &settings, scheduler),
                surface,
                audio: AudioManager::new(&settings),
                hud: DomHud::new(&document),
                settings: settings.clone(),
            })
        });

        {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.session.publish_hud(&mut g.hud);
        }

        setup_input_handlers(&document, game.clone());
        setup_pause_button(&document, game.clone());

        game.borrow_mut().session.start();
        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::key_down(&event.key()) {
                    game.borrow_mut().handle_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::key_up(&event.key()) {
                    game.borrow_mut().handle_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pause_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id(PAUSE_BUTTON_ID) else {
            log::warn!("No pause button");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().handle_input(InputEvent::TogglePause);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web_game::run();
}

/// Ticks the native runner plays before giving up
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_TICKS: u64 = 500_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::audio::AudioManager;
    use brick_breaker::game_loop::ManualScheduler;
    use brick_breaker::hud::TextHud;
    use brick_breaker::render::CommandBuffer;
    use brick_breaker::sim::GameConfig;
    use brick_breaker::{Peripherals, Session, Settings, TickStatus};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Interactive play runs in the browser - build for wasm32 and open index.html");

    // Usage: brick-breaker [max_ticks] [seed]
    let mut args = std::env::args().skip(1);
    let max_ticks = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut settings = Settings::load();
    settings.autopilot = true;

    let mut session = Session::new(GameConfig::default(), seed, &settings, ManualScheduler::new());
    let mut surface = CommandBuffer::default();
    let mut audio = AudioManager::new(&settings);
    let mut hud = TextHud::default();

    session.publish_hud(&mut hud);
    session.start();

    let mut outcome = None;
    while session.state().time_ticks < max_ticks {
        let Some(token) = session.scheduler_mut().next_due() else {
            break;
        };
        let mut io = Peripherals {
            surface: &mut surface,
            audio: &mut audio,
            hud: &mut hud,
        };
        if let TickStatus::Ended(o) = session.run_tick(token, &mut io) {
            outcome = Some(o);
            break;
        }
    }

    let state = session.state();
    println!("\nSeed:        {}", seed);
    println!("Ticks:       {}", state.time_ticks);
    println!("Outcome:     {}", outcome.map_or("unfinished".to_string(), |o| format!("{:?}", o)));
    println!("Score:       {} / {}", state.score, state.config.brick_count());
    println!("Lives left:  {}", state.lives);
    println!("{}", hud.ball_speed);
    println!("{}", hud.paddle_size);
    println!("Break sounds: {}", audio.played());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

//! Shadow Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use shadow_runner::GameConfig;
    use shadow_runner::platform::{FpsCounter, SwipeTracker, key_event};
    use shadow_runner::renderer::{CanvasSurface, Surface, TextAlign, TextStyle};
    use shadow_runner::sim::{Autopilot, GameState, InputEvent, Signal, TickOutcome, tick};

    const FPS_STYLE: TextStyle = TextStyle::new("16px monospace", "black", TextAlign::Left);

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        swipe: SwipeTracker,
        fps: FpsCounter,
        autopilot: Option<Autopilot>,
        /// A frame callback is pending
        scheduled: bool,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64, surface: CanvasSurface) -> Self {
            Self {
                swipe: SwipeTracker::new(config.swipe_threshold),
                state: GameState::new(config, seed),
                surface,
                fps: FpsCounter::new(),
                autopilot: None,
                scheduled: false,
            }
        }

        /// Run one frame; returns whether to schedule another
        fn frame(&mut self, time: f64) -> bool {
            if let Some(pilot) = self.autopilot.as_mut() {
                if let Some(event) = pilot.decide(&self.state) {
                    self.state.queue_event(event);
                }
            }

            let outcome = tick(&mut self.state, time, &mut self.surface);

            let fps = self.fps.record(time);
            if self.state.config.show_fps {
                let x = self.state.config.width - 90.0;
                self.surface
                    .draw_text(&format!("{} FPS", fps), Vec2::new(x, 30.0), &FPS_STYLE);
            }

            outcome == TickOutcome::Continue
        }

        fn toggle_autopilot(&mut self) {
            self.autopilot = match self.autopilot.take() {
                Some(_) => {
                    // Don't leave the autopilot's jump stuck down
                    self.state.queue_event(InputEvent::Release(Signal::Jump));
                    None
                }
                None => Some(Autopilot::new()),
            };
            log::info!("Autopilot: {}", self.autopilot.is_some());
        }
    }

    /// Queue an event; if the loop is halted, apply it now and resume on restart
    fn dispatch(game: &Rc<RefCell<Game>>, event: InputEvent) {
        let resume = {
            let mut g = game.borrow_mut();
            g.state.queue_event(event);
            // No frame pending means the run is over and nothing will flush
            !g.scheduled && g.state.flush_events()
        };
        if resume {
            request_animation_frame(game.clone());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Shadow Runner starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = GameConfig::load();
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let surface = CanvasSurface::new(&canvas, &document)?;
        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(config, seed, surface)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Shadow Runner running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "i" || key == "I" {
                    game.borrow_mut().toggle_autopilot();
                } else if let Some(input) = key_event(&key, true) {
                    dispatch(&game, input);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = key_event(&event.key(), false) {
                    dispatch(&game, input);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    game.borrow_mut().swipe.touch_start(touch.page_y() as f32);
                }
            });
            window.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let swipe = game.borrow_mut().swipe.touch_move(touch.page_y() as f32);
                if let Some(input) = swipe {
                    dispatch(&game, input);
                }
            });
            window.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                let released = game.borrow_mut().swipe.touch_end();
                for input in released {
                    dispatch(&game, input);
                }
            });
            window.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        game.borrow_mut().scheduled = true;
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed");
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.scheduled = false;
            g.frame(time)
        };

        if keep_going {
            request_animation_frame(game);
        } else {
            log::info!("Loop halted, waiting for restart");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("sprites") => print_sprite_table(),
        path => run_headless(path),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play with the autopilot at a fixed 60 Hz until game over or the tick limit
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(config_path: Option<&str>) {
    use shadow_runner::GameConfig;
    use shadow_runner::renderer::RecordingSurface;
    use shadow_runner::sim::{Autopilot, GameState, TickOutcome, tick};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_TICKS: u64 = 60 * 60 * 5;

    let config = match config_path {
        Some(path) => GameConfig::from_file(path).unwrap_or_else(|e| {
            log::warn!("{}; using defaults", e);
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };
    let seed = config.seed.unwrap_or(0x5EED);

    log::info!("Shadow Runner (native) starting headless run...");
    let mut state = GameState::new(config, seed);
    let mut surface = RecordingSurface::new();
    let mut pilot = Autopilot::new();

    let mut frame: u64 = 0;
    loop {
        if let Some(event) = pilot.decide(&state) {
            state.queue_event(event);
        }
        surface.reset();
        let outcome = tick(&mut state, frame as f64 * FRAME_MS, &mut surface);
        frame += 1;
        if outcome == TickOutcome::Halt || frame >= MAX_TICKS {
            break;
        }
    }

    println!(
        "Ran {} ticks, score {}{}",
        frame,
        state.score,
        if state.is_over() { " (hit)" } else { "" }
    );
}

/// Dump the showcase sprite sheet: each animation's cells, then the column
/// shown on every game frame of one staggered loop
#[cfg(not(target_arch = "wasm32"))]
fn print_sprite_table() {
    use shadow_runner::sprite::{AnimationTable, SHADOW_DOG_STAGGER};

    let table = AnimationTable::shadow_dog();
    for anim in table.iter() {
        let cells: Vec<String> = anim
            .frames
            .iter()
            .map(|r| format!("({},{})", r.x, r.y))
            .collect();
        println!("{:>7} row {:>2}: {}", anim.name, anim.row, cells.join(" "));

        let loop_frames = anim.frames.len() as u64 * SHADOW_DOG_STAGGER;
        let columns: Vec<String> = (0..loop_frames)
            .filter_map(|f| table.frame_at(anim.name, f, SHADOW_DOG_STAGGER))
            .map(|r| ((r.x / table.sheet.cell_width) as u32).to_string())
            .collect();
        println!("{:>14}: {}", "frames", columns.join(" "));
    }
}

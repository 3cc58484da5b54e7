//! Poké-Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use poke_runner::assets::SpriteCatalog;
    use poke_runner::consts::*;
    use poke_runner::highscores::{HighScore, LocalStorageStore};
    use poke_runner::render::draw_frame;
    use poke_runner::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        sprites: SpriteCatalog,
        ctx: CanvasRenderingContext2d,
        input: TickInput,
        high: HighScore,
        store: LocalStorageStore,
        // Track phase for high-score persistence and overlay updates
        last_phase: GamePhase,
        // Pending rAF request, so teardown can cancel it
        raf_id: Option<i32>,
        running: bool,
    }

    impl Game {
        fn new(seed: u64, sprites: SpriteCatalog, ctx: CanvasRenderingContext2d) -> Self {
            let store = LocalStorageStore;
            let high = HighScore::load(&store);
            let mut state = GameState::new(seed);
            state.enemy_kinds = sprites.enemy_count();
            Self {
                state,
                sprites,
                ctx,
                input: TickInput::default(),
                high,
                store,
                last_phase: GamePhase::Loading,
                raf_id: None,
                running: true,
            }
        }

        /// Run one tick and clear the one-shot input.
        fn update(&mut self) {
            let input = self.input;
            tick(&mut self.state, &input);
            self.input.press = false;

            // Persist the high score when a session ends
            let phase = self.state.phase;
            if phase != self.last_phase {
                if phase == GamePhase::GameOver {
                    self.high.record(self.state.score, &mut self.store);
                }
                self.last_phase = phase;
            }
        }

        fn render(&self) {
            draw_frame(&self.ctx, &self.state, &self.sprites);
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("{:05}", self.state.score)));
            }
            if let Some(el) = document.get_element_by_id("high-score") {
                el.set_text_content(Some(&format!("{:05}", self.high.best())));
            }

            // Phase overlays
            set_overlay(&document, "loading", self.state.phase == GamePhase::Loading);
            set_overlay(&document, "menu", self.state.phase == GamePhase::Menu);
            set_overlay(&document, "game-over", self.state.phase == GamePhase::GameOver);

            if self.state.phase == GamePhase::GameOver {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.state.score.to_string()));
                }
            }
        }

        /// Cancel the pending frame request; no ticks run after this.
        fn stop(&mut self) {
            self.running = false;
            if let Some(id) = self.raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            log::info!("game loop stopped");
        }
    }

    fn set_overlay(document: &web_sys::Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Poké-Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("2d context missing")
            .dyn_into()
            .expect("not a 2d context");

        // All sprite fetches run concurrently; the Loading phase does not end
        // until every slot has settled (success or fallback).
        let sprites = match SpriteCatalog::load().await {
            Ok(sprites) => sprites,
            Err(err) => {
                log::error!("sprite catalog failed to settle: {err:?}");
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, sprites, ctx)));
        game.borrow_mut().state.assets_ready();

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(&canvas, game.clone());
        setup_teardown(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Poké-Runner running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space is both start and jump, interpreted by the sim
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default(); // keep the page from scrolling
                    game.borrow_mut().input.press = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.press = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.press = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Cancel the loop when the page is torn down.
    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().stop();
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let game_for_frame = game.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game_for_frame);
        });
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
        game.borrow_mut().raf_id = Some(id);
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if !g.running {
                return;
            }
            g.raf_id = None;
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use poke_runner::highscores::{HighScore, MemoryStore};
    use poke_runner::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Poké-Runner (native headless) starting...");

    // No canvas or PokeAPI off the web: run a scripted session against the
    // sim and report the result.
    let mut store = MemoryStore::default();
    let mut high = HighScore::load(&store);

    let mut state = GameState::new(0xC0FFEE);
    state.assets_ready();

    let mut ticks = 0u64;
    let mut input = TickInput { press: true }; // start the session
    loop {
        tick(&mut state, &input);
        ticks += 1;
        input.press = ticks % 60 == 0; // hop every second
        if state.phase == GamePhase::GameOver || ticks > 100_000 {
            break;
        }
    }

    high.record(state.score, &mut store);
    println!(
        "headless run: {} ticks, score {}, best {}",
        ticks,
        state.score,
        high.best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

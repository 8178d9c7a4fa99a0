//! Grid Invaders entry point
//!
//! Platform drivers around the pure sim: a wasm32 build wires the
//! canvas 2D surface, DOM score/lives sinks and keyboard input to the
//! tick; the native build runs a seeded headless session so the core
//! can be exercised without a browser.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use grid_invaders::render::build_scene;
    use grid_invaders::sim::{GameEvent, GameState, TickInput, tick};

    /// Everything the frame callback touches
    struct Game {
        state: GameState,
        rng: Pcg32,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
        document: Document,
        /// Scheduling flag for the driver: false once GameOver fired
        scheduled: bool,
    }

    impl Game {
        fn new(seed: u64, ctx: CanvasRenderingContext2d, document: Document) -> Self {
            Self {
                state: GameState::new(seed),
                rng: Pcg32::seed_from_u64(seed),
                input: TickInput::default(),
                ctx,
                document,
                scheduled: true,
            }
        }

        /// One animation-frame callback: tick, push sinks, draw
        fn frame(&mut self) {
            let input = self.input;
            // One-shot inputs are consumed by the tick they precede
            self.input = TickInput::default();

            for event in tick(&mut self.state, &input, &mut self.rng) {
                match event {
                    GameEvent::Hud { score, lives } => {
                        self.set_text("score", &score.to_string());
                        self.set_text("lives", &lives.to_string());
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("Game over! Final score: {score}");
                        self.scheduled = false;
                    }
                }
            }

            self.draw();
        }

        fn draw(&self) {
            let t = &self.state.tuning;
            self.ctx
                .clear_rect(0.0, 0.0, t.field_width as f64, t.field_height as f64);
            for shape in build_scene(&self.state) {
                self.ctx.set_fill_style_str(shape.color);
                self.ctx.fill_rect(
                    shape.min.x as f64,
                    shape.min.y as f64,
                    shape.size.x as f64,
                    shape.size.y as f64,
                );
            }
        }

        fn set_text(&self, id: &str, value: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(value));
            }
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(window) = web_sys::window() else {
            log::error!("no window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("no document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("missing #gameCanvas element");
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("2d context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        log::info!("Grid Invaders starting, seed {seed}");
        let game = Rc::new(RefCell::new(Game::new(seed, ctx, document.clone())));

        // Keyboard input: flags picked up by the next frame
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.move_left = true,
                    "ArrowRight" => g.input.move_right = true,
                    " " => g.input.fire = true,
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // requestAnimationFrame loop; stops scheduling after GameOver
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        {
            let game = game.clone();
            *g.borrow_mut() = Some(Closure::new(move || {
                let mut game_ref = game.borrow_mut();
                game_ref.frame();
                if game_ref.scheduled {
                    if let Some(cb) = f.borrow().as_ref() {
                        request_animation_frame(cb);
                    }
                }
            }));
        }
        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use grid_invaders::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();

    let seed = 0xBADD_CAFE;
    log::info!("Grid Invaders (native headless) starting, seed {seed:#x}");

    let mut state = GameState::new(seed);
    let mut rng = Pcg32::seed_from_u64(seed);

    // Scripted session: hold position, fire whenever the cap allows
    let max_ticks = 60 * 60 * 10; // ten minutes of frames
    for n in 0..max_ticks {
        let input = TickInput {
            fire: n % 20 == 0,
            move_left: n % 120 < 60 && n % 4 == 0,
            move_right: n % 120 >= 60 && n % 4 == 0,
        };
        for event in tick(&mut state, &input, &mut rng) {
            if let GameEvent::GameOver { score } = event {
                log::info!("Game over after {} ticks, final score {score}", n);
                return;
            }
        }
    }
    log::info!(
        "Session still running after {max_ticks} ticks, score {}, lives {}",
        state.score,
        state.player.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

//! Radial Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use radial_shooter::input::CONTROL_HINTS;
    use radial_shooter::renderer::RenderState;
    use radial_shooter::{Session, autopilot, command_for_key};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        /// Demo player drives the commands
        idle_mode: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                session: Session::with_defaults(seed),
                render_state: None,
                idle_mode: false,
            }
        }

        /// Run one simulation tick
        fn update(&mut self) {
            if self.idle_mode {
                let tick = self.session.state.time_ticks;
                if let Some(command) = autopilot::next_command(&self.session.feed(), tick) {
                    self.session.command(command);
                }
            }
            self.session.tick();
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.draw(&self.session.feed(), self.session.tuning()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let feed = self.session.feed();

            set_text(&document, "hud-score", &format!("Score: {}", feed.score));
            set_text(&document, "hud-level", &format!("Level: {}", feed.level));
            set_text(&document, "hud-lives", &format!("Lives: {}", feed.lives));

            if let Some(el) = document.get_element_by_id("game-over") {
                let class = if feed.game_over { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn show_controls(document: &Document) {
        let mut text = String::from("Controls:\n");
        for (key, action) in CONTROL_HINTS {
            text.push_str(&format!("{key}: {action}\n"));
        }
        set_text(document, "controls", &text);
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Radial Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let view_radius = game.borrow().session.grid().outer_radius();
        let render_state = RenderState::new(surface, &adapter, width, height, view_radius)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        show_controls(&document);
        setup_keyboard(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Radial Shooter running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let code = event.code();
            let mut g = game.borrow_mut();

            if code == "KeyI" {
                g.idle_mode = !g.idle_mode;
                log::info!("Idle mode: {}", g.idle_mode);
                return;
            }

            if let Some(command) = command_for_key(&code) {
                // Keep Space and the arrows from scrolling the page
                event.prevent_default();
                g.session.command(command);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let game_over = {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
            g.session.is_game_over()
        };

        // Final frame is on screen; stop scheduling
        if game_over {
            log::info!("Game loop stopped");
            return;
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Demo runs stop here even if the autopilot never dies (5 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICK_LIMIT: u64 = 5 * 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), radial_shooter::TuningError> {
    use radial_shooter::sim::GameEvent;
    use radial_shooter::{Session, Tuning, autopilot};

    env_logger::init();
    log::info!("Radial Shooter (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading tuning from {}", path);
            Tuning::load(&path)?
        }
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut session = Session::new(seed, tuning)?;
    log::info!("Demo seed: {}", seed);

    let mut kills = 0u32;
    let mut escapes = 0u32;
    while !session.is_game_over() && session.state.time_ticks < DEMO_TICK_LIMIT {
        let tick = session.state.time_ticks;
        if let Some(command) = autopilot::next_command(&session.feed(), tick) {
            session.command(command);
        }
        session.tick();

        for event in session.events() {
            match event {
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::EnemyEscaped { .. } => escapes += 1,
                _ => {}
            }
        }
    }

    let state = &session.state;
    log::info!(
        "Demo finished after {} ticks: score {}, level {}, lives {}, {} kills, {} escapes",
        state.time_ticks,
        state.score,
        state.level,
        state.lives,
        kills,
        escapes
    );
    println!("Final score: {}", state.score);

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

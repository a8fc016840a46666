//! Zombie Gallery entry point
//!
//! The browser build wires canvas input into the simulation and runs the
//! frame loop. The native build plays a scripted headless session and logs
//! a summary, which is handy for checking tuning files.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use zombie_gallery::Settings;
    use zombie_gallery::consts::*;
    use zombie_gallery::platform::web::{CanvasSurface, WebFrame, load_atlas};
    use zombie_gallery::renderer::{SpriteAtlas, render_frame};
    use zombie_gallery::sim::{FrameInput, GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        atlas: SpriteAtlas<WebFrame>,
        input: FrameInput,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, surface: CanvasSurface, atlas: SpriteAtlas<WebFrame>) -> Self {
            let width = surface.fit_to_client(ASPECT_RATIO);
            Self {
                state: GameState::new(seed, Settings::default(), width),
                surface,
                atlas,
                input: FrameInput::default(),
                last_time: 0.0,
            }
        }

        fn resize(&mut self) {
            let width = self.surface.fit_to_client(self.state.viewport.aspect_ratio());
            self.state.resize(width);
        }

        /// Run one simulation + render pass
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                MIN_FRAME_DT
            };
            self.last_time = time;

            let input = std::mem::take(&mut self.input);
            // Keep aiming where the pointer last was
            self.input.pointer = input.pointer;
            tick(&mut self.state, &input, dt);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::GameOver { score } => log::info!("Final score: {}", score),
                    other => log::debug!("{:?}", other),
                }
            }

            if let Err(e) = render_frame(&mut self.surface, &self.atlas, &self.state) {
                log::error!("Render error: {}", e);
            }
        }

        /// Pause unless already paused or over
        fn auto_pause(&mut self, reason: &str) {
            if !self.state.is_paused && !self.state.is_dead {
                self.input.pause = true;
                log::info!("Auto-paused ({})", reason);
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Zombie Gallery starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let surface = CanvasSurface::new(canvas.clone())?;

        let atlas = load_atlas()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, surface, atlas)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;
        setup_resize(game.clone())?;
        setup_auto_pause(game.clone())?;

        request_animation_frame(game);

        log::info!("Zombie Gallery running!");
        Ok(())
    }

    fn touch_position(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some(Vec2::new(
            touch.client_x() as f32 - rect.left() as f32,
            touch.client_y() as f32 - rect.top() as f32,
        ))
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().input.pointer = Some(pos);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse down - shoot
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.input.pointer = Some(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
                g.input.fire = true;
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(pos) = touch_position(&canvas_clone, &event) {
                    game.borrow_mut().input.pointer = Some(pos);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start - aim and shoot
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(pos) = touch_position(&canvas_clone, &event) {
                    g.input.pointer = Some(pos);
                }
                g.input.fire = true;
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Escape" | "p" | "P" => g.input.pause = true,
                    " " | "Enter" => g.input.fire = true,
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().auto_pause("tab hidden");
                }
            });
            document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().auto_pause("window blur");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Zombie Gallery (native) starting...");
    log::info!("Native mode plays a headless session - run with `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match zombie_gallery::Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => zombie_gallery::Settings::default(),
    };

    match headless::play(settings) {
        Ok(summary) => println!("\n{summary}"),
        Err(e) => {
            log::error!("Headless session failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::fmt;

    use glam::Vec2;

    use zombie_gallery::renderer::{HeadlessSurface, headless_atlas, render_frame};
    use zombie_gallery::sim::{FrameInput, GameEvent, GameState, tick};
    use zombie_gallery::{RenderError, Settings};

    const SEED: u64 = 0x5eed;
    const CANVAS_WIDTH: f32 = 1280.0;
    const FRAME_DT: f32 = 1.0 / 60.0;
    const SESSION_SECONDS: f32 = 60.0;
    /// Time between the bot's shots
    const FIRE_INTERVAL: f32 = 0.4;

    #[derive(Debug, Default)]
    pub struct Summary {
        frames: u32,
        shots: u32,
        kills: u32,
        got_past: u32,
        draw_calls: usize,
        final_score: u64,
        lives_left: u32,
        game_over: bool,
    }

    impl fmt::Display for Summary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "Frames:      {}", self.frames)?;
            writeln!(f, "Shots:       {}", self.shots)?;
            writeln!(f, "Kills:       {}", self.kills)?;
            writeln!(f, "Got past:    {}", self.got_past)?;
            writeln!(f, "Draw calls:  {}", self.draw_calls)?;
            writeln!(f, "Final score: {}", self.final_score)?;
            writeln!(f, "Lives left:  {}", self.lives_left)?;
            write!(f, "Game over:   {}", self.game_over)
        }
    }

    /// Screen position of the alive zombie closest to the left edge
    fn pick_target(state: &GameState) -> Option<Vec2> {
        state
            .zombies()
            .filter(|z| !z.is_dead())
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
            .map(|z| z.pos + state.viewport.center())
    }

    /// Play a scripted session: aim at the most urgent zombie and fire on a
    /// fixed cadence, rendering every frame to a recording surface
    pub fn play(settings: Settings) -> Result<Summary, RenderError> {
        let mut state = GameState::new(SEED, settings, CANVAS_WIDTH);
        let mut surface = HeadlessSurface::new(state.viewport.size());
        let atlas = headless_atlas()?;
        let mut summary = Summary::default();
        let mut since_shot = 0.0;

        let mut elapsed = 0.0;
        while elapsed < SESSION_SECONDS && !state.is_dead {
            since_shot += FRAME_DT;
            let mut input = FrameInput {
                pointer: pick_target(&state),
                ..Default::default()
            };
            if since_shot >= FIRE_INTERVAL && input.pointer.is_some() {
                input.fire = true;
                since_shot = 0.0;
            }

            tick(&mut state, &input, FRAME_DT);
            elapsed += FRAME_DT;
            summary.frames += 1;

            for event in state.drain_events() {
                match event {
                    GameEvent::ShotFired { .. } => summary.shots += 1,
                    GameEvent::ZombieKilled { .. } => summary.kills += 1,
                    GameEvent::ZombieGotPast { .. } => summary.got_past += 1,
                    _ => {}
                }
            }

            render_frame(&mut surface, &atlas, &state)?;
            summary.draw_calls += surface.take_commands().len();
        }

        summary.final_score = state.score;
        summary.lives_left = state.lives;
        summary.game_over = state.is_dead;
        log::info!(
            "Session done: {} kills, {} got past, score {}",
            summary.kills,
            summary.got_past,
            summary.final_score
        );
        Ok(summary)
    }
}

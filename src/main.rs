//! Hoop Shot entry point
//!
//! Handles platform-specific initialization and runs the game loop. The
//! browser host owns the canvas, pointer events, frame scheduling, and HUD;
//! everything it calls into lives in the platform-free library.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use hoop_shot::session::Session;
    use hoop_shot::sim::{self, BallPhase, Court, PointerEvent, Tuning};

    /// Game instance holding all state
    struct Game {
        court: Court,
        session: Session,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        dpr: f64,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, dpr: f64) -> Self {
            let width = canvas.client_width() as f32;
            let height = canvas.client_height() as f32;
            Self {
                court: Court::new(width, height, Tuning::default()),
                session: Session::new(),
                canvas,
                ctx,
                dpr,
            }
        }

        /// Map a pointer event's client position into field coordinates.
        /// Field units are CSS pixels; the device-pixel-ratio only scales the
        /// canvas backing store, which `render` compensates for.
        fn field_point(&self, event: &web_sys::PointerEvent) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            Vec2::new(
                event.client_x() as f32 - rect.left() as f32,
                event.client_y() as f32 - rect.top() as f32,
            )
        }

        fn pointer(&mut self, event: PointerEvent) {
            if self.session.is_playing() {
                sim::handle_pointer(&mut self.court, event);
            }
        }

        /// One display frame: advance the sim, forward any shot outcome to
        /// the session, then draw.
        fn frame(&mut self) {
            if self.session.is_playing() {
                if let Some(outcome) = sim::tick(&mut self.court) {
                    self.session.on_shot(outcome);
                }
            }
            self.render();
            self.update_hud();
        }

        /// Restart from the start overlay or after a game over
        fn restart(&mut self) {
            self.session.start();
            self.court.new_session();
        }

        /// Resize the backing store to the CSS size and rebuild the court
        /// geometry, discarding any in-flight shot.
        fn resize_to_viewport(&mut self) {
            let window = web_sys::window().expect("no window");
            self.dpr = window.device_pixel_ratio();
            let width = self.canvas.client_width();
            let height = self.canvas.client_height();
            self.canvas.set_width((width as f64 * self.dpr) as u32);
            self.canvas.set_height((height as f64 * self.dpr) as u32);
            self.court.resize(width as f32, height as f32);
        }

        /// Draw the scene with the 2D canvas API, in field coordinates
        fn render(&self) {
            let ctx = &self.ctx;
            let court = &self.court;
            let field = court.field;

            let _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);

            // Court background and floor
            ctx.set_fill_style_str("#16213e");
            ctx.fill_rect(0.0, 0.0, field.x as f64, field.y as f64);
            ctx.set_stroke_style_str("#0f3460");
            ctx.set_line_width(3.0);
            ctx.begin_path();
            ctx.move_to(0.0, field.y as f64 - 1.5);
            ctx.line_to(field.x as f64, field.y as f64 - 1.5);
            ctx.stroke();

            // Backboard
            let board = court.hoop.backboard(&court.tuning);
            ctx.set_fill_style_str("#e4e4e4");
            ctx.fill_rect(
                board.x as f64,
                board.top as f64,
                6.0,
                (board.bottom - board.top) as f64,
            );

            // Net: a few lines falling inward from the rim edges
            let hoop = &court.hoop;
            let rim_left = (hoop.pos.x - hoop.radius) as f64;
            let rim_right = (hoop.pos.x + hoop.radius) as f64;
            let rim_y = hoop.pos.y as f64;
            let net_drop = 34.0;
            ctx.set_stroke_style_str("#cfcfcf");
            ctx.set_line_width(1.5);
            for i in 0..5 {
                let t = i as f64 / 4.0;
                let x_top = rim_left + t * (rim_right - rim_left);
                let x_bot = hoop.pos.x as f64 + (x_top - hoop.pos.x as f64) * 0.55;
                ctx.begin_path();
                ctx.move_to(x_top, rim_y);
                ctx.line_to(x_bot, rim_y + net_drop);
                ctx.stroke();
            }

            // Rim on top of the net
            ctx.set_stroke_style_str("#e63946");
            ctx.set_line_width(hoop.thickness as f64);
            ctx.begin_path();
            ctx.move_to(rim_left, rim_y);
            ctx.line_to(rim_right, rim_y);
            ctx.stroke();

            // Drag indicator: the launch vector anchored at the ball
            if let BallPhase::Dragging { start, current } = court.ball.phase {
                let drag = current - start;
                if drag.length() > court.tuning.min_drag_dist {
                    let tip = court.ball.pos + drag;
                    let dash = js_sys::Array::of2(&JsValue::from_f64(8.0), &JsValue::from_f64(6.0));
                    let _ = ctx.set_line_dash(&dash);
                    ctx.set_stroke_style_str("#f5f5f5");
                    ctx.set_line_width(2.0);
                    ctx.begin_path();
                    ctx.move_to(court.ball.pos.x as f64, court.ball.pos.y as f64);
                    ctx.line_to(tip.x as f64, tip.y as f64);
                    ctx.stroke();
                    let _ = ctx.set_line_dash(&js_sys::Array::new());
                }
            }

            // Ball with a simple seam
            let ball = &court.ball;
            ctx.set_fill_style_str("#e8722a");
            ctx.begin_path();
            let _ = ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
            ctx.set_stroke_style_str("#9c4a16");
            ctx.set_line_width(2.0);
            ctx.begin_path();
            let _ = ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.radius as f64,
                0.0,
                TAU,
            );
            ctx.stroke();
            ctx.begin_path();
            ctx.move_to((ball.pos.x - ball.radius) as f64, ball.pos.y as f64);
            ctx.line_to((ball.pos.x + ball.radius) as f64, ball.pos.y as f64);
            ctx.stroke();
        }

        /// Update HUD elements and overlay visibility in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");

            set_text(&document, "hud-score", &self.session.score.to_string());
            set_text(&document, "hud-lives", &self.session.lives.to_string());
            set_text(&document, "hud-best", &self.session.best.to_string());

            // Streak only shows once it means something
            if let Some(el) = document.get_element_by_id("hud-streak") {
                if self.session.streak > 1 {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = document
                        .query_selector("#hud-streak .hud-value")
                        .ok()
                        .flatten()
                    {
                        val.set_text_content(Some(&format!("x{}", self.session.streak)));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            set_hidden(
                &document,
                "start-overlay",
                self.session.phase != hoop_shot::SessionPhase::Ready,
            );
            let over = self.session.is_over();
            set_hidden(&document, "game-over", !over);
            if over {
                set_text(&document, "final-score", &self.session.score.to_string());
                set_text(&document, "final-best", &self.session.best.to_string());
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hoop Shot starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing store from CSS pixels and the device pixel ratio
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        canvas.set_width((client_w as f64 * dpr) as u32);
        canvas.set_height((client_h as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), ctx, dpr)));
        log::info!("field {}x{}", client_w, client_h);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Hoop Shot running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down: grab the ball and capture the pointer so the drag
        // keeps tracking outside the canvas
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                event.prevent_default();
                let _ = canvas_clone.set_pointer_capture(event.pointer_id());
                let mut g = game.borrow_mut();
                let point = g.field_point(&event);
                g.pointer(PointerEvent::Down(point));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                let mut g = game.borrow_mut();
                let point = g.field_point(&event);
                g.pointer(PointerEvent::Move(point));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up: release the drag, possibly launching
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                let mut g = game.borrow_mut();
                let point = g.field_point(&event);
                g.pointer(PointerEvent::Up(point));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer cancel resolves at the last tracked point
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                game.borrow_mut().pointer(PointerEvent::Cancel);
            });
            let _ = canvas.add_event_listener_with_callback(
                "pointercancel",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        for id in ["start-btn", "replay-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().restart();
                    log::info!("session restarted");
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize_to_viewport();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use hoop_shot::sim::{self, Court, PointerEvent, Tuning};

    env_logger::init();
    log::info!("Hoop Shot (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run: flick a straight-up shot and drive it to resolution
    let mut court = Court::new(800.0, 600.0, Tuning::default());
    let grab = court.ball.pos;
    sim::handle_pointer(&mut court, PointerEvent::Down(grab));
    sim::handle_pointer(&mut court, PointerEvent::Up(grab + Vec2::new(0.0, -160.0)));
    assert!(court.shot_in_flight(), "flick should launch");

    let mut outcome = None;
    for frame in 0..600 {
        if let Some(resolved) = sim::tick(&mut court) {
            outcome = Some((resolved, frame));
            break;
        }
    }
    let (resolved, frame) = outcome.expect("shot should resolve");
    log::info!("smoke shot resolved as {:?} after {} frames", resolved, frame);

    println!(
        "{}",
        serde_json::to_string_pretty(&court).expect("court serializes")
    );
}

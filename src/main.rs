use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use freelook::camera::{CameraConfig, FreeLookCamera};
use freelook::cli::Cli;
use freelook::core::clock::{Clock, FpsCounter};
use freelook::core::controller::{Action, Controller, InputAxes};
use freelook::core::input_adapter::WinitController;
use freelook::projection::Projection;
use freelook::traits::renderer::ViewRenderer;
use freelook::types::TransformUniform;

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const INITIAL_EYE: Vec3 = Vec3::new(0.0, 0.0, 3.0);
const FPS_UPDATE_INTERVAL: f32 = 1.0;
/// Look units a held turn key feeds into the yaw channel per frame.
const KEY_TURN_UNITS: f32 = 10.0;

// === Renderer ===

/// Logs the transforms it is handed instead of submitting GPU work.
struct ConsoleRenderer {
    transform: TransformUniform,
    draws: u64,
}

impl ConsoleRenderer {
    fn new(projection: &Projection) -> Self {
        let mut transform = TransformUniform::default();
        transform.set_projection(projection.matrix());
        Self {
            transform,
            draws: 0,
        }
    }
}

impl ViewRenderer for ConsoleRenderer {
    fn set_projection(&mut self, projection: [[f32; 4]; 4]) {
        self.transform.projection = projection;
    }

    fn set_view(&mut self, view: [[f32; 4]; 4]) {
        self.transform.view = view;
    }

    fn draw(&mut self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        self.draws += 1;
        log::trace!(
            "draw #{} view translation {:?}",
            self.draws,
            self.transform.view[3]
        );
        Ok(())
    }
}

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    controller: WinitController,
    camera: FreeLookCamera,
    projection: Projection,
    renderer: ConsoleRenderer,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: &Cli) -> Self {
        let config = CameraConfig {
            linear_speed: cli.linear_speed,
            angular_speed: cli.angular_speed,
            pitch_limit: cli.pitch_limit,
        };
        let projection = Projection::new(cli.fov, INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);

        Self {
            window: None,
            controller: WinitController::new(),
            camera: FreeLookCamera::new(INITIAL_EYE, config),
            renderer: ConsoleRenderer::new(&projection),
            projection,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn tick_frame(&mut self) {
        let delta = self.clock.tick();

        if self.controller.is_down(Action::ResetPose) {
            self.camera.reset();
        }

        let axes = InputAxes::from_controller(&self.controller);
        let (mouse_dx, mouse_dy) = self.controller.take_mouse_delta();
        // Held turn keys feed the same yaw channel as the mouse.
        let look_dx = mouse_dx + axes.turn * KEY_TURN_UNITS;
        self.camera
            .accumulate_input(axes.move_forward, axes.move_strafe, look_dx, mouse_dy);
        self.camera.update();

        self.renderer
            .set_view(self.camera.view_matrix().to_cols_array_2d());
        if let Err(e) = self.renderer.draw() {
            log::error!("draw failed: {e}");
        }

        if let Some(fps) = self.fps.tick(delta) {
            let eye = self.camera.eye();
            log::info!(
                "fps {:.1} | eye ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1}",
                fps,
                eye.x,
                eye.y,
                eye.z,
                self.camera.yaw(),
                self.camera.pitch()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Free-look Camera")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.projection.resize(size.width, size.height);
                self.renderer
                    .set_projection(self.projection.matrix().to_cols_array_2d());
            }
            WindowEvent::RedrawRequested => self.tick_frame(),
            event => self.controller.process_event(&event),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(&cli);

    println!("Free-look camera - Controls: WASD move, Q/E turn, mouse look, Ctrl+R reset, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}

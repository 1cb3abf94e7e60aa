use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use crate::adapters::filters::standard::StandardFilters;
use crate::adapters::theme::DefaultTheme;
use crate::controllers::explorer::ExplorerSession;
use crate::core::viewport::transitions::PanDirection;

const INITIAL_WIDTH: f64 = 800.0;
const INITIAL_HEIGHT: f64 = 600.0;

/// Runs the interactive window: keyboard events feed the session's
/// transition functions, frames are blitted through `pixels`.
pub struct RunGuiCommand;

impl RunGuiCommand {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        // The pixels surface borrows the window for its whole life.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelzoom")
                .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let mut session = ExplorerSession::new(DefaultTheme, StandardFilters);
        session.resize(size.width, size.height);

        let mut redraw_pending = true;

        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::Wait);

                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput {
                            event: key_event, ..
                        } if key_event.state == ElementState::Pressed => {
                            let refresh = match &key_event.logical_key {
                                Key::Named(NamedKey::ArrowUp) => {
                                    Some(session.on_key(PanDirection::Up))
                                }
                                Key::Named(NamedKey::ArrowDown) => {
                                    Some(session.on_key(PanDirection::Down))
                                }
                                Key::Named(NamedKey::ArrowLeft) => {
                                    Some(session.on_key(PanDirection::Left))
                                }
                                Key::Named(NamedKey::ArrowRight) => {
                                    Some(session.on_key(PanDirection::Right))
                                }
                                Key::Named(NamedKey::Space) => Some(session.on_char(' ')),
                                Key::Character(text) => {
                                    text.chars().next().map(|ch| session.on_char(ch))
                                }
                                _ => None,
                            };

                            if refresh.unwrap_or(false) {
                                redraw_pending = true;
                            }
                        }
                        WindowEvent::Resized(new_size) => {
                            session.resize(new_size.width, new_size.height);

                            if new_size.width > 0 && new_size.height > 0 {
                                pixels
                                    .resize_surface(new_size.width, new_size.height)
                                    .expect("Failed to resize surface");
                                pixels
                                    .resize_buffer(new_size.width, new_size.height)
                                    .expect("Failed to resize buffer");
                            }

                            redraw_pending = true;
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            let frame = session.draw();
                            if !frame.is_empty() {
                                pixels.frame_mut().copy_from_slice(frame.data());

                                if let Err(e) = pixels.render() {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                        }
                        _ => {}
                    },
                    Event::AboutToWait => {
                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new()
    }
}

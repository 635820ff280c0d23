use anyhow::Result;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
};

use trigon::{
    config::Config,
    render::{GlContext, Scene},
};

const CONFIG_PATH: &str = "config.toml";

struct App {
    context: GlContext,
    scene: Option<Scene>,
}

impl App {
    fn new() -> Result<(Self, EventLoop<()>)> {
        SimpleLogger::new().with_level(LevelFilter::Info).init()?;
        info!("Initializing application...");

        let config = Config::load_or_create(CONFIG_PATH)?;

        let event_loop = EventLoopBuilder::new().build()?;
        let context = GlContext::new(&event_loop, &config.window)?;
        let scene = Scene::load(context.gl(), &config.render)?;

        Ok((
            Self {
                context,
                scene: Some(scene),
            },
            event_loop,
        ))
    }

    // Returns true once the window should close.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => true,
            WindowEvent::Resized(size) => {
                self.context.resize(*size);
                false
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                false
            }
            _ => false,
        }
    }

    fn redraw(&mut self) {
        if let Some(scene) = &self.scene {
            scene.draw(self.context.gl());
        }
        if let Err(e) = self.context.swap_buffers() {
            log::error!("Failed to swap buffers: {}", e);
        }
    }

    fn cleanup(&mut self) {
        if let Some(scene) = self.scene.take() {
            scene.destroy(self.context.gl());
        }
    }
}

fn main() -> Result<()> {
    let (mut app, event_loop) = App::new()?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            if app.handle_window_event(&event) {
                app.cleanup();
                elwt.exit();
            }
        }
        Event::AboutToWait => {
            app.context.window().request_redraw();
        }
        _ => (),
    })?;

    Ok(())
}

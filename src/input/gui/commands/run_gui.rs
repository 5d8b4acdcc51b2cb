use std::error::Error;

use log::{error, warn};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::errors::ViewControllerError;
use crate::controllers::interactive::events::input::ControlFlow;
use crate::controllers::interactive::explorer_config::ExplorerConfig;
use crate::input::gui::translator::InputTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Opens the explorer window and runs until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let viewport = self.config.viewport()?;
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(PhysicalSize::new(viewport.width(), viewport.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, viewport)?;
        let mut controller = self.config.build_controller(presenter)?;
        let mut translator = InputTranslator::new();
        let mut failure: Option<ViewControllerError<pixels::Error>> = None;

        controller.start()?;

        event_loop.run(|event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };

            if window_id != window.id() {
                return;
            }

            let result = match event {
                WindowEvent::RedrawRequested => controller.refresh().map(|()| ControlFlow::Continue),
                WindowEvent::Resized(size) => {
                    if let Err(err) = controller.surface_mut().resize_surface(size.width, size.height) {
                        warn!("failed to resize surface: {}", err);
                    }
                    Ok(ControlFlow::Continue)
                }
                ref event => {
                    let input = translator.translate(event, |position| {
                        controller.surface().window_to_viewport(position)
                    });

                    match input {
                        Some(input) => controller.handle_event(input),
                        None => Ok(ControlFlow::Continue),
                    }
                }
            };

            match result {
                Ok(ControlFlow::Continue) => {}
                Ok(ControlFlow::Exit) => elwt.exit(),
                Err(err) => {
                    error!("{}", err);
                    failure = Some(err);
                    elwt.exit();
                }
            }
        })?;

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

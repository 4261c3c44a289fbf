use crate::{
    config::WindowConfig,
    error::{Error, Result},
    primitives::color::ColorAlpha,
};

use glow::HasContext;
use glutin::{dpi::PhysicalSize, event_loop::EventLoop, Api, GlProfile, GlRequest};
use imgui_glow_renderer;
use imgui_winit_support::WinitPlatform;

const DEPTH_BITS: u8 = 24;

pub struct Window {
    windowed_context: glutin::WindowedContext<glutin::PossiblyCurrent>,
    winit_platform: WinitPlatform,
    gl: glow::Context,
    imgui_renderer: imgui_glow_renderer::Renderer,
    imgui_context: imgui::Context,
    imgui_texture_map: imgui_glow_renderer::SimpleTextureMap,
}

impl Window {
    pub fn new(config: &WindowConfig) -> Result<(Window, EventLoop<()>)> {
        let event_loop = glutin::event_loop::EventLoop::new();
        let window = glutin::window::WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(glutin::dpi::LogicalSize::new(config.width, config.height));

        let window = glutin::ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .with_depth_buffer(DEPTH_BITS)
            .with_vsync(config.vsync)
            .build_windowed(window, &event_loop)
            .map_err(|err| Error::Window(err.to_string()))?;

        let windowed_context = unsafe { window.make_current() }
            .map_err(|(_, err)| Error::Window(err.to_string()))?;

        let (mut imgui_context, winit_platform) = Self::create_imgui_context(&windowed_context);

        let gl = unsafe {
            glow::Context::from_loader_function(|s| windowed_context.get_proc_address(s).cast())
        };

        let mut imgui_texture_map = imgui_glow_renderer::SimpleTextureMap::default();
        let imgui_renderer = imgui_glow_renderer::Renderer::initialize(
            &gl,
            &mut imgui_context,
            &mut imgui_texture_map,
            true,
        )
        .map_err(|err| Error::Window(format!("imgui renderer: {err:?}")))?;

        log::info!(
            "Created {}x{} window, vsync {}",
            config.width,
            config.height,
            config.vsync
        );

        Ok((
            Window {
                windowed_context,
                winit_platform,
                gl,
                imgui_renderer,
                imgui_context,
                imgui_texture_map,
            },
            event_loop,
        ))
    }

    fn create_imgui_context(
        windowed_context: &glutin::WindowedContext<glutin::PossiblyCurrent>,
    ) -> (imgui::Context, WinitPlatform) {
        let mut imgui_context = imgui::Context::create();
        imgui_context.set_ini_filename(None);

        let mut winit_platform = WinitPlatform::init(&mut imgui_context);
        winit_platform.attach_window(
            imgui_context.io_mut(),
            windowed_context.window(),
            imgui_winit_support::HiDpiMode::Rounded,
        );

        imgui_context
            .fonts()
            .add_font(&[imgui::FontSource::DefaultFontData { config: None }]);

        imgui_context.io_mut().font_global_scale = (1.0 / winit_platform.hidpi_factor()) as f32;

        (imgui_context, winit_platform)
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.windowed_context.window().inner_size()
    }

    pub fn set_clear_color(&self, color: ColorAlpha) {
        unsafe { self.gl.clear_color(color.r, color.g, color.b, color.a) };
    }

    pub fn enable_depth_test(&self) {
        unsafe { self.gl.enable(glow::DEPTH_TEST) };
    }

    pub fn clear(&self) {
        unsafe {
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT)
        };
    }

    pub fn update_delta_time(&mut self, duration: std::time::Duration) {
        self.imgui_context.io_mut().update_delta_time(duration);
    }

    pub fn request_redraw(&mut self) {
        if let Err(err) = self
            .winit_platform
            .prepare_frame(self.imgui_context.io_mut(), self.windowed_context.window())
        {
            log::warn!("Failed to prepare GUI frame: {err}");
        }
        self.windowed_context.window().request_redraw();
    }

    /// Draws the GUI on top of the current frame and presents it. Blocks on vsync.
    pub fn render<F: FnOnce(&mut imgui::Ui)>(&mut self, build_ui: F) {
        let ui = self.imgui_context.frame();
        build_ui(ui);

        self.winit_platform
            .prepare_render(ui, self.windowed_context.window());
        let draw_data = self.imgui_context.render();

        if let Err(err) = self
            .imgui_renderer
            .render(&self.gl, &self.imgui_texture_map, draw_data)
        {
            log::warn!("Failed to render GUI: {err:?}");
        }

        if let Err(err) = self.windowed_context.swap_buffers() {
            log::warn!("Failed to swap buffers: {err}");
        }
    }

    pub fn imgui_using_mouse(&self) -> bool {
        self.imgui_context.io().want_capture_mouse
    }

    pub fn handle_event(&mut self, event: &glutin::event::Event<()>) {
        use glutin::event::{Event, WindowEvent};

        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            self.windowed_context.resize(*size);
            unsafe {
                self.gl
                    .viewport(0, 0, size.width as i32, size.height as i32)
            };
        }

        self.winit_platform.handle_event(
            self.imgui_context.io_mut(),
            self.windowed_context.window(),
            event,
        );
    }
}

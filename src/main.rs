use twobody::{
    camera::OrbitCamera,
    config::AppConfig,
    constants::{CLEAR_COLOR, CONFIG_FILE},
    error::Result,
    mouse::MouseState,
    resources::{ResourceDir, SceneTextures},
    scene::Scene,
    simulation::SceneState,
    window::Window,
};

use control_panel::ControlPanel;
use glutin::event_loop::EventLoop;
use std::{
    path::Path,
    time::{Duration, Instant},
};

mod control_panel;

struct App {
    window: Window,
    camera: OrbitCamera,
    state: SceneState,
    scene: Scene,
    mouse: MouseState,
    control_panel: ControlPanel,
}

fn setup(config: AppConfig) -> Result<(App, EventLoop<()>)> {
    let (window, event_loop) = Window::new(&config.window)?;
    let gl = window.gl();

    let resources = ResourceDir::locate(&config.resources.candidates)?;
    let textures = SceneTextures::load(gl, &resources)?;

    let mut scene = Scene::new(textures, &config.tessellation, &config.scene);
    scene.prepare(gl, &resources, &config.tessellation)?;

    window.set_clear_color(CLEAR_COLOR);
    window.enable_depth_test();

    let mut camera = config.camera;
    camera.set_viewport(window.size());

    Ok((
        App {
            window,
            camera,
            state: config.scene,
            scene,
            mouse: MouseState::new(),
            control_panel: ControlPanel::new(),
        },
        event_loop,
    ))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let setup_result = AppConfig::load_or_default(Path::new(CONFIG_FILE)).and_then(setup);
    let (mut app, event_loop) = match setup_result {
        Ok(app) => app,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let mut last_frame = Instant::now();
    let mut pending_time = Duration::ZERO;

    use glutin::event::{Event, WindowEvent};

    event_loop.run(move |event, _, control_flow| {
        match &event {
            Event::NewEvents(_) => {
                let now = Instant::now();
                let duration = now.duration_since(last_frame);
                app.window.update_delta_time(duration);
                pending_time += duration;
                last_frame = now;
            }
            Event::MainEventsCleared => app.window.request_redraw(),
            Event::RedrawRequested(_) => {
                let delta_time = std::mem::take(&mut pending_time).as_secs_f32();

                app.camera.update_from_mouse(&mut app.mouse, &app.window);
                app.state.advance(delta_time);
                app.scene.update(&app.state);

                app.window.clear();
                app.scene.draw(app.window.gl(), &app.camera, &app.state);

                let App {
                    window,
                    camera,
                    state,
                    control_panel,
                    ..
                } = &mut app;
                window.render(|ui| control_panel.build_ui(ui, camera, state));
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = glutin::event_loop::ControlFlow::Exit,
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => app.camera.set_viewport(*size),
            Event::WindowEvent { event, .. } => app.mouse.handle_window_event(event),
            Event::LoopDestroyed => log::info!("Shutting down"),
            _ => {}
        }

        app.window.handle_event(&event);
    });
}

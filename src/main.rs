#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::panic
)]
#![windows_subsystem = "windows"]

mod app;
mod args;
mod config;
mod field;
mod gui;
mod hex_conv;
mod mapping;
mod parse_radix;
mod preferences;
mod remote_id;
mod shell;

use {
    crate::{
        app::{App, BackendCmd},
        args::Args,
        config::{Config, LoadedConfig},
        gui::{Gui, message_dialog::Icon},
        remote_id::RemoteId,
    },
    anyhow::Context as _,
    clap::Parser as _,
    egui_sf2g::SfEgui,
    gamedebug_core::{IMMEDIATE, PERSISTENT},
    sf2g::{
        graphics::{Color, RenderTarget as _, RenderWindow},
        system::Vector2,
        window::{ContextSettings, Event, Key, Style, VideoMode},
    },
    std::backtrace::Backtrace,
};

fn print_version_info() {
    eprintln!("remid {}", env!("CARGO_PKG_VERSION"));
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.debug {
        IMMEDIATE.set_enabled(true);
        PERSISTENT.set_enabled(true);
    }
    if args.version {
        print_version_info();
        return Ok(());
    }
    if let Some(hex) = &args.decode {
        return decode_to_stdout(hex);
    }
    let desktop_mode = VideoMode::desktop_mode();
    let mut window = RenderWindow::new(
        desktop_mode,
        "remid",
        Style::RESIZE | Style::CLOSE,
        &ContextSettings::default(),
    )?;
    let LoadedConfig {
        config: cfg,
        old_config_err,
    } = Config::load_or_default()?;
    window.set_vertical_sync_enabled(cfg.vsync);
    window.set_framerate_limit(cfg.fps_limit);
    window.set_position(Vector2::new(0, 0));
    let mut sf_egui = SfEgui::new(&window);
    let mut style = egui::Style::default();
    style.interaction.show_tooltips_only_when_still = true;
    crate::gui::set_font_sizes_style(&mut style, &cfg.style);
    sf_egui.context().set_style(style);
    let mut font_defs = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut font_defs, egui_phosphor::Variant::Regular);
    sf_egui.context().set_fonts(font_defs);
    let mut gui = Gui::default();
    if let Some(e) = old_config_err {
        gui.msg_dialog.open(
            Icon::Warn,
            "Failed to load old config",
            format!(
                "Old config failed to load with error: {e}.\n\
                 The default config will be used, and saved on exit."
            ),
        );
    }
    let mut app = App::new(cfg)?;
    while window.is_open() {
        if !do_frame(&mut app, &mut gui, &mut sf_egui, &mut window)? {
            break;
        }
    }
    app.cfg.save()?;
    Ok(())
}

fn decode_to_stdout(hex: &str) -> anyhow::Result<()> {
    let bytes = hex_conv::parse_relaxed(hex.trim()).context("Invalid hex input")?;
    let id = RemoteId::decode(&bytes)?;
    println!("remote-id: {}", hex_conv::encode_colons(&id.encode()));
    match id {
        RemoteId::Ethernet(eth) => {
            println!("Cisco Ethernet Remote-ID ({})", eth.interface_label());
            println!("  slot:   {}", eth.slot);
            println!("  module: {}", eth.module);
            println!("  port:   {}", eth.port);
            println!("  vlan:   {}", eth.vlan);
            println!("  duid:   {}", eth.duid);
        }
        RemoteId::Unknown {
            remote_id_type,
            data,
        } => {
            println!(
                "Unknown Remote-ID type {remote_id_type} with {} bytes of data",
                data.len()
            );
        }
    }
    Ok(())
}

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info.payload();
        let msg = if let Some(s) = payload.downcast_ref::<&str>() {
            s
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };
        let (file, line, column) = match panic_info.location() {
            Some(loc) => (loc.file(), loc.line().to_string(), loc.column().to_string()),
            None => ("unknown", "unknown".into(), "unknown".into()),
        };
        let btrace = Backtrace::capture();
        eprintln!("{btrace}");
        do_fatal_error_report(
            "remid panic",
            &format!(
                "\
            {msg}\n\n\
            Location:\n\
            {file}:{line}:{column}\n\n\
            Backtrace:\n\
            {btrace}"
            ),
        );
    }));
    if let Err(e) = try_main() {
        do_fatal_error_report("Fatal error", &e.to_string());
    }
}

fn do_fatal_error_report(title: &str, mut desc: &str) {
    let Ok(mut rw) = RenderWindow::new(
        VideoMode::new(640, 480, 32),
        title,
        Style::CLOSE,
        &ContextSettings::default(),
    ) else {
        eprintln!("{title}: {desc}");
        return;
    };
    rw.set_vertical_sync_enabled(true);
    let mut sf_egui = SfEgui::new(&rw);
    while rw.is_open() {
        while let Some(ev) = rw.poll_event() {
            sf_egui.add_event(&ev);
            if ev == Event::Closed {
                rw.close();
            }
        }
        let di = match sf_egui.run(&mut rw, |_rw, ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(title);
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .max_height(400.)
                    .show(ui, |ui| {
                        ui.add(egui::TextEdit::multiline(&mut desc).code_editor());
                    });
                ui.separator();
                ui.heading("Close this window to exit");
            });
        }) {
            Ok(di) => di,
            Err(e) => {
                eprintln!("egui frame error: {e}");
                return;
            }
        };
        rw.clear(Color::BLACK);
        sf_egui.draw(di, &mut rw, None);
        rw.display();
    }
}

#[must_use = "Returns false if application should quit"]
fn do_frame(
    app: &mut App,
    gui: &mut Gui,
    sf_egui: &mut SfEgui,
    window: &mut RenderWindow,
) -> anyhow::Result<bool> {
    handle_events(gui, app, window, sf_egui);
    let di = gui::do_egui(sf_egui, gui, app, window)?;
    for cmd in app.backend_cmd.drain(..) {
        match cmd {
            BackendCmd::ApplyVideoPrefs => {
                window.set_vertical_sync_enabled(app.cfg.vsync);
                window.set_framerate_limit(app.cfg.fps_limit);
            }
        }
    }
    let [r, g, b] = app.preferences.bg_color;
    window.clear(Color::rgb(
        (r * 255.) as u8,
        (g * 255.) as u8,
        (b * 255.) as u8,
    ));
    sf_egui.draw(di, window, None);
    window.display();
    gamedebug_core::inc_frame();
    Ok(!app.quit_requested)
}

fn handle_events(gui: &mut Gui, app: &mut App, window: &mut RenderWindow, sf_egui: &mut SfEgui) {
    while let Some(event) = window.poll_event() {
        sf_egui.add_event(&event);
        let wants_kb = sf_egui.context().wants_keyboard_input();
        match event {
            Event::Closed => window.close(),
            Event::KeyPressed { code, ctrl, .. } if !wants_kb => match code {
                Key::F5 => gui.win.switches.open.toggle(),
                Key::F6 => gui.win.port_edit.open.toggle(),
                Key::F7 => gui.win.decoder.open.toggle(),
                Key::F12 => {
                    IMMEDIATE.toggle();
                    PERSISTENT.toggle();
                }
                Key::Q if ctrl => app.quit_requested = true,
                _ => {}
            },
            Event::Resized {
                mut width,
                mut height,
            } => {
                let mut needs_window_resize = false;
                const MIN_WINDOW_W: u32 = 800;
                if width < MIN_WINDOW_W {
                    width = MIN_WINDOW_W;
                    needs_window_resize = true;
                }
                const MIN_WINDOW_H: u32 = 520;
                if height < MIN_WINDOW_H {
                    height = MIN_WINDOW_H;
                    needs_window_resize = true;
                }
                if needs_window_resize {
                    window.set_size((width, height));
                }
            }
            _ => {}
        }
    }
}

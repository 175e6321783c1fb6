// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;

mod cli;
mod presenter;

use cli::Cli;
use presenter::TauriPresenter;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let source = hudbox::resolve_config_source(cli.config, &hudbox::SystemHome);
    log::info!("Using config: {source}");

    tauri::Builder::default()
        .setup(move |app| {
            let mut presenter = TauriPresenter::new(app.handle().clone());
            let shown = hudbox::launch(&source, &mut presenter);
            if shown == 0 {
                // Nothing on screen and nothing to wait for
                log::error!("No HudBox window could be opened");
                app.handle().exit(1);
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running HudBox");
}

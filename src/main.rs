mod app;
mod config;
mod domain;
mod models;
mod ui;

use gpui::{App, Application};
use log::error;

use crate::config::SessionConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SessionConfig::load()?;

    Application::new().run(move |cx: &mut App| {
        if let Err(err) = app::run(cx, config) {
            error!("{err:#}");
            cx.quit();
        }
    });
    Ok(())
}

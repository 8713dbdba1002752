mod config;
mod events;
mod gui;
mod sys;

use gui::app::AppModel;
use plutchik::Wheel;
use relm4::prelude::*;
use sys::runtime;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = plutchik::config::load_or_default();
    let wheel = Wheel::new(&config.wheel)?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.plutchik.wheel");

    app.run::<AppModel>((wheel, rx));
    Ok(())
}

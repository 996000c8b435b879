use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::viewmodel::PetViewModel;
use std::io;
use std::time::Duration;

pub fn run(viewmodel: PetViewModel, config: &ConfigStore) -> io::Result<()> {
    let ui_config = config.get().ui;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(ui_config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    // Wake the event loop on every store change; the snapshot itself is
    // re-read on this thread. The subscription is released when the app
    // drops at the end of the session.
    let changes = events.sender();
    let subscription = viewmodel.observe(Box::new(move |_| {
        let _ = changes.send(AppEvent::PetsChanged);
    }));

    let mut app = App::new(viewmodel, ui_config.snackbar_ticks);
    app.attach_subscription(subscription);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::PetsChanged) => app.refresh_pets(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

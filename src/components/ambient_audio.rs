// Wiring between the ambient playback controller and the page: one command
// stream, one owner task. Local buttons, the first page gesture, and the
// media-control surface all push into the same stream, so commands apply in
// arrival order against settled state.

use dioxus::prelude::*;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;

use crate::playback::{
    AmbientController, ExternalCommand, PlayerCommand, SessionState, AMBIENT_AUDIO_URL,
    AMBIENT_TRACK,
};
use crate::platform::{BrowserPrefs, DocumentInteractions, NavigatorMediaSession, PageAudio};

/// Sender side of the player command stream.
#[derive(Clone)]
pub struct PlayerCommands(UnboundedSender<PlayerCommand>);

impl PlayerCommands {
    pub fn send(&self, command: PlayerCommand) {
        let _ = self.0.unbounded_send(command);
    }
}

/// Start the owner task for this mount. Safe to call from an effect; the
/// second and later calls are no-ops.
pub fn launch_session(
    session: Signal<SessionState>,
    mut commands: Signal<Option<PlayerCommands>>,
) {
    if commands.peek().is_some() {
        return;
    }
    let (tx, rx) = unbounded();
    commands.set(Some(PlayerCommands(tx)));
    spawn(run(rx, session));
}

async fn run(commands: UnboundedReceiver<PlayerCommand>, mut session: Signal<SessionState>) {
    let Some(audio) = PageAudio::mount(AMBIENT_AUDIO_URL) else {
        // No page audio element (headless build); keep the buttons inert.
        drain(commands).await;
        return;
    };

    // Platform callbacks feed the same stream the page buttons use.
    let (platform_tx, platform_rx) = unbounded();
    let on_external = {
        let tx = platform_tx.clone();
        Box::new(move |command: ExternalCommand| {
            let _ = tx.unbounded_send(PlayerCommand::External(command));
        })
    };
    let on_gesture = {
        let tx = platform_tx;
        Box::new(move || {
            let _ = tx.unbounded_send(PlayerCommand::FirstInteraction);
        })
    };

    let mut controller = AmbientController::new(
        audio,
        BrowserPrefs,
        NavigatorMediaSession::detect(),
        DocumentInteractions,
        AMBIENT_TRACK.clone(),
    );
    controller.start(on_external, on_gesture).await;
    session.set(controller.session());

    let mut stream = futures_util::stream::select(commands, platform_rx);
    while let Some(command) = stream.next().await {
        controller.handle(command).await;
        session.set(controller.session());
    }
}

async fn drain(mut commands: UnboundedReceiver<PlayerCommand>) {
    while commands.next().await.is_some() {}
}

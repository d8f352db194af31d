// Embedding the configuration store in a host process
//
// Loads (and on first run creates) the three documents in a scratch
// directory, binds a sign, renders its lines with the layout and the custom
// variables, then removes the sign again.

use bungeesigns_core::{ConfigStore, Location, ServerStatus};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let dir = tempfile::tempdir()?;
    let mut store = ConfigStore::open(dir.path().join("BungeeSigns"))?;
    store.load_config()?;

    let location = Location::new("world", 12, 70, -8);
    store.add_sign(location.clone(), "lobby", "default")?;

    // Pretend a ping came back
    if let Some(lobby) = store.server_mut("lobby") {
        lobby.set_status(ServerStatus {
            online: true,
            motd: "Welcome!".to_string(),
            players: 7,
            max_players: 50,
        });
    }

    let sign = store.sign_at(&location).ok_or("sign was not stored")?;
    let server = store.server(sign.server()).ok_or("unknown server")?;
    let layout = store.layout(sign.layout()).ok_or("unknown layout")?;

    for line in &layout.lines {
        let mut text = line
            .replace("%displayname%", server.display_name())
            .replace("%status%", layout.status_text(server.is_online()).unwrap_or(""))
            .replace("%players%", &server.status().players.to_string())
            .replace("%maxplayers%", &server.status().max_players.to_string())
            .replace("%motd%", &server.status().motd);
        for variable in store.variables() {
            text = variable.replace_in(&text, variable.arguments());
        }
        info!("| {}", text);
    }

    store.remove_sign(&location)?;
    info!("Signs left: {}", store.signs().len());

    store.unload_config();
    Ok(())
}

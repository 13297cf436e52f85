use example_quests::{ServerSettings, logging, server_setup};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut interview = server_setup();
    quest::stdio().run(&mut interview)?;

    let settings = ServerSettings::from_interview(&interview)?;
    tracing::info!(host = %settings.host, port = settings.port, "setup finished");
    println!("{settings:#?}");
    Ok(())
}

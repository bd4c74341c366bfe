use std::io::{self, Write};

use wordnik_config::{SettingKey, SettingsStore};

use crate::cli::ConfigCommand;

pub fn handle_config(store: &mut SettingsStore, command: ConfigCommand) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        ConfigCommand::Show => write_settings(&mut stdout, store)?,
        ConfigCommand::Get { key } => {
            let key: SettingKey = key.parse()?;
            writeln!(stdout, "{}", store.settings().get(key))?;
        }
        ConfigCommand::Set { key, value } => {
            let key: SettingKey = key.parse()?;
            store.set(key, &value)?;
        }
        ConfigCommand::Path => writeln!(stdout, "{}", store.path().display())?,
    }

    Ok(())
}

fn write_settings(out: &mut impl Write, store: &SettingsStore) -> io::Result<()> {
    for key in SettingKey::ALL {
        writeln!(out, "{}", key.name())?;
        writeln!(out, "  {}", key.description())?;
        for line in store.settings().get(key).lines() {
            writeln!(out, "  = {line}")?;
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use crate::roster::Roster;

const TOKEN_FILE: &str = "token";
const CHANNEL_FILE: &str = "channel";
const GUILD_FILE: &str = "guild";
const ADMINS_FILE: &str = "admins";
const ROLES_FILE: &str = "roles";
const BANS_FILE: &str = "bans";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} must contain a single line")]
    MultipleLines { path: PathBuf },

    #[error("{path} was read but is empty")]
    Empty { path: PathBuf },
}

/// Connection settings read from the data directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// The only channel the bot listens and replies in.
    pub channel_id: String,
    pub guild_id: String,
}

/// Everything loaded from the data directory at start-up.
#[derive(Debug)]
pub struct Resources {
    pub config: Config,
    pub admins: Roster,
    pub roles: Roster,
    pub bans: Roster,
}

impl Resources {
    pub fn load(data_dir: &Path) -> Result<Self, LoadError> {
        let config = Config {
            token: read_single_line(&data_dir.join(TOKEN_FILE))?,
            channel_id: read_single_line(&data_dir.join(CHANNEL_FILE))?,
            guild_id: read_single_line(&data_dir.join(GUILD_FILE))?,
        };

        let admins = Roster::load(&data_dir.join(ADMINS_FILE))?;
        let roles = Roster::load(&data_dir.join(ROLES_FILE))?;
        let bans = Roster::load(&data_dir.join(BANS_FILE))?;

        tracing::info!(
            "Loaded channel {}, guild {}, {} admins, {} roles, {} bans",
            config.channel_id,
            config.guild_id,
            admins.len(),
            roles.len(),
            bans.len()
        );

        Ok(Resources {
            config,
            admins,
            roles,
            bans,
        })
    }
}

/// Reads a file holding exactly one non-empty line. Surrounding whitespace,
/// including a trailing newline, is trimmed.
pub fn read_single_line(path: &Path) -> Result<String, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let line = text.trim();
    if line.contains('\n') {
        return Err(LoadError::MultipleLines {
            path: path.to_path_buf(),
        });
    }
    if line.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(line.to_string())
}

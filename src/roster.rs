use std::path::{Path, PathBuf};

use crate::config::LoadError;

/// One `<friendly name> <id>` line of a roster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub friendly_name: String,
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("writing rosters back to {0} is not supported yet")]
    WriteBackUnsupported(PathBuf),
}

/// Ordered list of entries, in file order. Loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Parses roster text. Lines that do not split into exactly two
    /// whitespace-separated tokens are skipped.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(friendly_name), Some(id), None) => Some(RosterEntry {
                        friendly_name: friendly_name.to_string(),
                        id: id.to_string(),
                    }),
                    _ => {
                        tracing::debug!("Skipping malformed roster line {:?}", line);
                        None
                    }
                }
            })
            .collect();

        Roster { entries }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&text))
    }

    /// Placeholder for persisting grants and bans. Nothing is written.
    pub fn write_back(&self, path: &Path) -> Result<(), RosterError> {
        Err(RosterError::WriteBackUnsupported(path.to_path_buf()))
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with the given id (linear scan).
    pub fn find_by_id(&self, id: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

//! File-backed campaign storage.
//!
//! Campaigns load once at startup and save on demand as one JSON document.
//! The engine itself never assumes a storage medium; this store is the
//! default persistence collaborator for hosts that want one.

use crate::{Campaign, TowerError, TowerResult};
use log::{debug, info};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Returns the current time in Unix milliseconds.
pub(crate) fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A collection of campaigns persisted to a single JSON file.
pub struct CampaignStore {
    path: PathBuf,
    campaigns: Vec<Campaign>,
}

impl CampaignStore {
    /// Opens the store at `path`, loading existing campaigns. A missing file
    /// seeds the store with the stock campaign; a corrupt file is an error.
    pub fn open(path: impl Into<PathBuf>) -> TowerResult<Self> {
        let path = path.into();
        let campaigns = if path.exists() {
            let json = std::fs::read_to_string(&path)?;
            serde_json::from_str(&json).map_err(TowerError::from)?
        } else {
            info!("no campaign file at {}; seeding defaults", path.display());
            vec![Campaign::new(
                "Classic Tower",
                "The original tower challenge.",
            )]
        };
        debug!("loaded {} campaign(s)", campaigns.len());
        Ok(Self { path, campaigns })
    }

    /// Writes all campaigns back to disk.
    pub fn save(&self) -> TowerResult<()> {
        let json = serde_json::to_string_pretty(&self.campaigns)?;
        std::fs::write(&self.path, json)?;
        info!(
            "saved {} campaign(s) to {}",
            self.campaigns.len(),
            self.path.display()
        );
        Ok(())
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All campaigns, in insertion order.
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Looks up a campaign by id.
    pub fn get(&self, id: Uuid) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    /// Looks up a campaign mutably by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Campaign> {
        self.campaigns.iter_mut().find(|c| c.id == id)
    }

    /// Creates a new campaign around the default configuration and returns
    /// its id.
    pub fn create(&mut self, name: impl Into<String>) -> Uuid {
        let campaign = Campaign::new(name, "Custom Campaign");
        let id = campaign.id;
        self.campaigns.push(campaign);
        id
    }

    /// Removes a campaign. Returns whether anything was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.campaigns.len();
        self.campaigns.retain(|c| c.id != id);
        self.campaigns.len() != before
    }

    /// Stamps a campaign's `last_played` and stores its updated
    /// configuration, as the editor's save operation does.
    pub fn update_config(&mut self, id: Uuid, config: crate::CampaignConfig) -> TowerResult<()> {
        let campaign = self
            .get_mut(id)
            .ok_or_else(|| TowerError::InvalidEdit(format!("no campaign with id {id}")))?;
        campaign.config = config;
        campaign.last_played = now_millis();
        Ok(())
    }
}

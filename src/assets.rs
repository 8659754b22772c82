//! Fixed asset identifiers and loading
//!
//! Decoding is left to whichever backend draws the scene; this only reads the
//! raw bytes. A file that cannot be read is logged and left unbound, and the
//! game carries on drawing without it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Every asset the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetId {
    HudFont,
    Background,
    Base,
    Barrel,
    Bullet,
    Wall,
    Gumba,
    Arrow,
}

impl AssetId {
    pub const ALL: [AssetId; 8] = [
        AssetId::HudFont,
        AssetId::Background,
        AssetId::Base,
        AssetId::Barrel,
        AssetId::Bullet,
        AssetId::Wall,
        AssetId::Gumba,
        AssetId::Arrow,
    ];

    /// Path relative to the asset root
    pub fn relative_path(&self) -> &'static str {
        match self {
            AssetId::HudFont => "FONTS/ariblk.ttf",
            AssetId::Background => "IMAGES/background.jpg",
            AssetId::Base => "IMAGES/base.png",
            AssetId::Barrel => "IMAGES/barrel.png",
            AssetId::Bullet => "IMAGES/bullet.png",
            AssetId::Wall => "IMAGES/wall.jpg",
            AssetId::Gumba => "IMAGES/gumba2.png",
            AssetId::Arrow => "IMAGES/arrow.png",
        }
    }
}

/// Raw asset bytes keyed by id
#[derive(Debug, Default)]
pub struct Assets {
    root: PathBuf,
    loaded: HashMap<AssetId, Vec<u8>>,
}

impl Assets {
    /// Read every known asset under `root`
    pub fn load(root: &Path) -> Self {
        let mut assets = Self {
            root: root.to_path_buf(),
            loaded: HashMap::with_capacity(AssetId::ALL.len()),
        };
        for id in AssetId::ALL {
            let path = assets.path_of(id);
            match std::fs::read(&path) {
                Ok(bytes) => {
                    log::debug!("Loaded {:?} ({} bytes)", id, bytes.len());
                    assets.loaded.insert(id, bytes);
                }
                Err(e) => log::warn!("problem loading {:?} from {}: {}", id, path.display(), e),
            }
        }
        log::info!(
            "Assets: {}/{} loaded from {}",
            assets.loaded.len(),
            AssetId::ALL.len(),
            root.display()
        );
        assets
    }

    pub fn path_of(&self, id: AssetId) -> PathBuf {
        self.root.join(id.relative_path())
    }

    pub fn get(&self, id: AssetId) -> Option<&[u8]> {
        self.loaded.get(&id).map(Vec::as_slice)
    }

    pub fn is_loaded(&self, id: AssetId) -> bool {
        self.loaded.contains_key(&id)
    }

    /// Ids that failed to load
    pub fn missing(&self) -> Vec<AssetId> {
        AssetId::ALL
            .into_iter()
            .filter(|id| !self.is_loaded(*id))
            .collect()
    }
}

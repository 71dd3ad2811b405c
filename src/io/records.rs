//! JSON landmark, feature and site plan files

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::io::error::{Result, WithPath};
use crate::landmarks::model::Landmark;
use crate::landmarks::resolver::{LandmarkRegistry, ResolverConfig, resolve_landmarks};
use crate::placement::feature::ProceduralFeature;
use crate::placement::planner::SitePlan;

#[derive(Debug, Serialize, Deserialize)]
struct LandmarkFile {
    #[serde(default)]
    landmarks: Vec<Landmark>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FeatureFile {
    #[serde(default)]
    features: Vec<ProceduralFeature>,
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_path(path, "read")
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    fs::write(path, text).with_path(path, "write")
}

/// Read the landmark records of a `{"landmarks": [...]}` file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid landmark file
pub fn load_landmarks(path: &Path) -> Result<Vec<Landmark>> {
    let text = read_text(path)?;
    let file: LandmarkFile = serde_json::from_str(&text).with_path(path, "parse")?;
    debug!("Loaded {} landmarks from {}", file.landmarks.len(), path.display());
    Ok(file.landmarks)
}

/// Read and resolve a landmark file
///
/// # Errors
///
/// Returns an error if loading fails or any landmark cannot be resolved
pub fn load_registry(path: &Path, config: &ResolverConfig) -> Result<LandmarkRegistry> {
    resolve_landmarks(load_landmarks(path)?, config)
}

/// Read stored features; a missing file holds no features
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed
pub fn load_features(path: &Path) -> Result<Vec<ProceduralFeature>> {
    if !path.exists() {
        debug!("No feature file at {}", path.display());
        return Ok(Vec::new());
    }
    let text = read_text(path)?;
    let file: FeatureFile = serde_json::from_str(&text).with_path(path, "parse")?;
    Ok(file.features)
}

/// Write features as a `{"features": [...]}` file, creating parent directories
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn save_features(path: &Path, features: &[ProceduralFeature]) -> Result<()> {
    let file = FeatureFile {
        features: features.to_vec(),
    };
    let text = serde_json::to_string_pretty(&file).with_path(path, "serialize")?;
    write_text(path, &text)?;
    info!("Saved {} features to {}", features.len(), path.display());
    Ok(())
}

/// Read a site plan
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid plan
pub fn load_plan(path: &Path) -> Result<SitePlan> {
    let text = read_text(path)?;
    serde_json::from_str(&text).with_path(path, "parse")
}

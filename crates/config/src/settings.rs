// Application settings
// Loaded from ~/.config/seatplan/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use seatplan_engine::{ArrangeOptions, ParentGroups, ParentPreference};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Seating
    #[serde(rename = "seating.tableSize")]
    pub table_size: u32,

    #[serde(rename = "seating.enforceMinimum")]
    pub enforce_minimum: bool,

    // Parent groups
    #[serde(rename = "parents.fatherGroup")]
    pub father_group: String,

    #[serde(rename = "parents.motherGroup")]
    pub mother_group: String,

    #[serde(rename = "parents.fatherPreference")]
    pub father_preference: String,

    #[serde(rename = "parents.motherPreference")]
    pub mother_preference: String,

    // Knight tables
    #[serde(rename = "knight.group")]
    pub knight_group: Option<String>,

    #[serde(rename = "knight.maxTables")]
    pub max_knight_tables: u32,

    // Output
    #[serde(rename = "output.dir")]
    pub output_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let parents = ParentGroups::default();
        Self {
            // Seating
            table_size: 10,
            enforce_minimum: true,
            // Parents
            father_group: parents.father,
            mother_group: parents.mother,
            father_preference: "separate".to_string(),
            mother_preference: "separate".to_string(),
            // Knight tables
            knight_group: None,
            max_knight_tables: 0,
            // Output
            output_dir: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("seatplan");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file();
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Parse settings text, tolerating // comment lines
    fn parse(contents: &str) -> Self {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        match serde_json::from_str(&cleaned) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error parsing settings.json: {}", e);
                eprintln!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| e.to_string())?;

        fs::write(&path, json).map_err(|e| e.to_string())
    }

    /// Create default settings file with comments
    fn create_default_file(&self) {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Seating
    "seating.tableSize": 10,
    "seating.enforceMinimum": true,

    // Parent groups (must match the Group column in the guest list)
    "parents.fatherGroup": "Father's family",
    "parents.motherGroup": "Mother's family",
    // Preference options: "separate", "together", "knight"
    "parents.fatherPreference": "separate",
    "parents.motherPreference": "separate",

    // Knight tables (22-seat banquet tables)
    "knight.group": null,
    "knight.maxTables": 0,

    // Default output directory for exports (null = current directory)
    "output.dir": null
}
"#;

        if let Err(e) = fs::write(&path, default_config) {
            eprintln!("Error writing default settings.json: {}", e);
        }
    }

    /// Get the config file path for display/opening
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }

    /// Engine options seeded from these settings. CLI flags override
    /// individual fields afterwards.
    pub fn arrange_options(&self) -> ArrangeOptions {
        let mut options = ArrangeOptions::with_table_size(self.table_size);
        options.parents = ParentGroups {
            father: self.father_group.clone(),
            mother: self.mother_group.clone(),
        };
        options.father_preference =
            ParentPreference::parse(&self.father_preference).unwrap_or_default();
        options.mother_preference =
            ParentPreference::parse(&self.mother_preference).unwrap_or_default();
        options.knight_group = self.knight_group.clone();
        options.max_knight_tables = self.max_knight_tables;
        options.enforce_minimum = self.enforce_minimum;
        options
    }
}

//! Project file storage
//!
//! A project file holds one financial model, the scenarios built on it and an
//! optional engine config:
//!
//! ```yaml
//! projectId: night-market
//! model:
//!   id: night-market
//!   projectId: night-market
//!   name: Night Market
//!   assumptions: { ... }
//! scenarios:
//!   - id: premium
//!     name: Premium pricing
//!     baseModelId: night-market
//!     projectId: night-market
//!     parameters: { pricingPercent: 20.0 }
//! ```
//!
//! `.yaml`/`.yml` files are read with serde-saphyr, `.json` with serde_json.

use std::fs;
use std::path::Path;

use forecast_core::ForecastConfig;
use forecast_core::model::{FinancialModel, ModelMetadata, ProjectId, Scenario};
use serde::{Deserialize, Serialize};

/// A model with its scenarios, as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub project_id: ProjectId,
    #[serde(default)]
    pub config: ForecastConfig,
    pub model: FinancialModel,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl ProjectFile {
    pub fn new(model: FinancialModel) -> Self {
        Self {
            project_id: model.project_id.clone(),
            config: ForecastConfig::default(),
            model,
            scenarios: Vec::new(),
        }
    }

    /// Force the forecast horizon, whatever the model or config says
    pub fn override_horizon(&mut self, periods: u32) {
        self.config.default_horizon = periods;
        if let Some(assumptions) = self.model.assumptions.as_mut() {
            match assumptions.metadata.as_mut() {
                Some(ModelMetadata::WeeklyEvent(event)) => event.weeks = periods,
                Some(ModelMetadata::Generic(generic)) => generic.periods = Some(periods),
                None => {}
            }
        }
    }

    /// Scenarios matching `selectors` by id or name, in selector order.
    ///
    /// An empty selector list selects every scenario.
    pub fn select_scenarios(&self, selectors: &[String]) -> Result<Vec<Scenario>, StorageError> {
        if selectors.is_empty() {
            return Ok(self.scenarios.clone());
        }

        selectors
            .iter()
            .map(|selector| {
                self.scenarios
                    .iter()
                    .find(|s| s.id.as_str() == selector.as_str() || s.name == *selector)
                    .cloned()
                    .ok_or_else(|| StorageError::UnknownScenario(selector.clone()))
            })
            .collect()
    }
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    UnsupportedFormat(String),
    UnknownScenario(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {msg}"),
            StorageError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            StorageError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported project file extension '{ext}' (use .yaml, .yml or .json)")
            }
            StorageError::UnknownScenario(name) => write!(f, "No scenario named '{name}'"),
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self, StorageError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            _ => Err(StorageError::UnsupportedFormat(ext)),
        }
    }
}

/// Load a project file, picking the parser from the file extension
pub fn load_project(path: &Path) -> Result<ProjectFile, StorageError> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        StorageError::Io(format!("Failed to read {}: {e}", path.display()))
    })?;

    let project: ProjectFile = match format {
        FileFormat::Yaml => serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {e}", path.display())))?,
        FileFormat::Json => serde_json::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {e}", path.display())))?,
    };

    tracing::debug!(
        path = %path.display(),
        model = %project.model.id,
        scenarios = project.scenarios.len(),
        "loaded project"
    );
    Ok(project)
}

/// Write a project file in the format implied by its extension
pub fn save_project(path: &Path, project: &ProjectFile) -> Result<(), StorageError> {
    let content = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_saphyr::to_string(project)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize project: {e}")))?,
        FileFormat::Json => serde_json::to_string_pretty(project)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize project: {e}")))?,
    };

    fs::write(path, content)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::config::ModelBuilder;
    use forecast_core::model::{ScenarioId, ScenarioParameterDeltas};

    fn project() -> ProjectFile {
        let model = ModelBuilder::weekly_event("Night Market", 8, 150.0)
            .project("markets")
            .ticket_price(10.0)
            .fb_spend(5.0)
            .fb_cogs_percent(30.0)
            .staff(3, 120.0)
            .build();

        let premium = Scenario::new(
            ScenarioId::new("premium"),
            "Premium pricing",
            model.id.clone(),
            model.project_id.clone(),
        )
        .with_parameters(ScenarioParameterDeltas {
            pricing_percent: 20.0,
            ..Default::default()
        });
        let lean = Scenario::new(
            ScenarioId::new("lean"),
            "Lean marketing",
            model.id.clone(),
            model.project_id.clone(),
        );

        let mut project = ProjectFile::new(model);
        project.scenarios = vec![premium, lean];
        project
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.yaml");

        save_project(&path, &project()).unwrap();
        assert_eq!(load_project(&path).unwrap(), project());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");

        save_project(&path, &project()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"baseModelId\""));
        assert_eq!(load_project(&path).unwrap(), project());
    }

    #[test]
    fn test_hand_written_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.yml");
        fs::write(
            &path,
            r#"projectId: shop
model:
  id: corner-shop
  projectId: shop
  name: Corner Shop
  assumptions:
    revenue:
      - name: Sales
        value: 1000.0
    costs:
      - name: Rent
        value: 400.0
        type: recurring
    growthModel:
      type: linear
      rate: 0.1
scenarios:
  - id: push
    name: Marketing push
    baseModelId: corner-shop
    projectId: shop
    parameters:
      marketingSpendPercent: 25.0
"#,
        )
        .unwrap();

        let project = load_project(&path).unwrap();
        assert_eq!(project.model.name, "Corner Shop");
        assert_eq!(project.config, ForecastConfig::default());
        assert_eq!(project.scenarios.len(), 1);
        assert_eq!(project.scenarios[0].parameters.marketing_spend_percent, 25.0);
        assert!(project.model.assumptions().unwrap().complete().is_ok());
    }

    #[test]
    fn test_demo_project_evaluates() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/night_market.yaml");
        let project = load_project(&path).unwrap();
        assert_eq!(project.scenarios.len(), 3);

        let evaluation = forecast_core::scenario::forecast_scenarios(
            &project.model,
            &project.scenarios,
            &project.config,
        )
        .unwrap();
        assert_eq!(evaluation.baseline.len(), 16);
        assert_eq!(
            evaluation.baseline[0].date.map(|d| d.to_string()),
            Some("2025-05-02".to_string())
        );
        assert_eq!(evaluation.scenarios.len(), 3);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.toml");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            load_project(&path),
            Err(StorageError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_project(&dir.path().join("absent.json")),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"projectId\": ").unwrap();

        assert!(matches!(load_project(&path), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_override_horizon() {
        let mut project = project();
        project.override_horizon(3);

        let series = forecast_core::forecast::generate_with_config(&project.model, &project.config)
            .unwrap();
        assert_eq!(series.len(), 3);

        let mut generic = ProjectFile::new(ModelBuilder::generic("Shop").build());
        generic.override_horizon(20);
        let series = forecast_core::forecast::generate_with_config(&generic.model, &generic.config)
            .unwrap();
        assert_eq!(series.len(), 20);
    }

    #[test]
    fn test_select_scenarios() {
        let project = project();

        let all = project.select_scenarios(&[]).unwrap();
        assert_eq!(all.len(), 2);

        let picked = project
            .select_scenarios(&["lean".to_string(), "Premium pricing".to_string()])
            .unwrap();
        let ids: Vec<&str> = picked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["lean", "premium"]);

        assert!(matches!(
            project.select_scenarios(&["missing".to_string()]),
            Err(StorageError::UnknownScenario(name)) if name == "missing"
        ));
    }
}

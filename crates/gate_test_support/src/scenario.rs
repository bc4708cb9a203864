use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const SCENARIOS_FORMAT_V1: &str = "selection-gate-scenarios-v1";

#[derive(Clone, Debug, Deserialize)]
struct ScenarioManifest {
    format: String,
    #[serde(rename = "scenario")]
    scenarios: Vec<Scenario>,
}

/// One page configuration plus the user steps run against it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub id: String,
    /// Option values of `#existing_name`; `None` leaves the select out of the page.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Option marked `selected` in markup.
    #[serde(default)]
    pub selected: Option<String>,
    /// Initial value of `#new_name`; `None` leaves the input out of the page.
    #[serde(default)]
    pub free_text: Option<String>,
    #[serde(default)]
    pub free_text_disabled: bool,
    #[serde(default)]
    pub sync_on_init: bool,
    pub expect_bound: bool,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub action: StepAction,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub expect: Option<Expectation>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// User picks an option; fires `change` when the value differs.
    Select,
    /// `change` fired without a value change.
    Dispatch,
    /// Value restored without an event (history navigation).
    Restore,
    /// User types into the free-text input.
    Type,
    /// Script writes the free-text value directly.
    SetText,
}

/// Free-text state after a step.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    pub value: String,
    pub disabled: bool,
}

impl Expectation {
    pub fn line(&self, step: usize, action: StepAction, value: &str) -> String {
        format!(
            "step {step}: {action:?} {value:?} -> value={:?} disabled={}",
            self.value, self.disabled
        )
    }
}

pub fn load_scenarios(path: &Path) -> Vec<Scenario> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario manifest {path:?}: {err}"));
    let manifest: ScenarioManifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario manifest {path:?}: {err}"));

    assert_eq!(
        manifest.format, SCENARIOS_FORMAT_V1,
        "unsupported scenario manifest format in {path:?}"
    );

    let mut seen = BTreeSet::new();
    for scenario in &manifest.scenarios {
        assert!(
            !scenario.id.trim().is_empty(),
            "empty scenario id in {path:?}"
        );
        assert!(
            seen.insert(scenario.id.as_str()),
            "duplicate scenario id in {path:?}: {}",
            scenario.id
        );
        if let (Some(options), Some(selected)) = (&scenario.options, &scenario.selected) {
            assert!(
                options.contains(selected),
                "scenario '{}' selects {selected:?} which is not an option",
                scenario.id
            );
        }
    }

    manifest.scenarios
}

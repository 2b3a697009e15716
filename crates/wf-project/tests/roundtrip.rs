use wf_project::schema::*;
use wf_project::{
    ProjectError, from_yaml_str, load, load_json, load_yaml, save_json, save_yaml,
    validate_project,
};
use wf_pvt::{CriticalPropertyMethod, ZRootPolicy};

#[test]
fn roundtrip_yaml_reference_project() {
    let project = WellProject::reference();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("wf_project_roundtrip_reference.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_with_sour_gas_and_solver() {
    let mut project = WellProject::reference();
    project.name = "Sour well".to_string();
    project.well.non_hydrocarbons.co2 = 0.05;
    project.well.non_hydrocarbons.h2s = 0.02;
    project.solver.critical_properties = CriticalPropertyMethod::Sutton;
    project.solver.z_root = ZRootPolicy::Largest;

    let path = std::env::temp_dir().join("wf_project_roundtrip_sour.json");
    save_json(&path, &project).unwrap();
    assert_eq!(load_json(&path).unwrap(), project);
    assert_eq!(load(&path).unwrap(), project);
}

#[test]
fn hand_written_yaml_loads() {
    let yaml = r#"
version: 1
name: Example well
well:
  tubing_inner_diameter: 1.995
  wellhead_pressure: 260.0
  liquid_rate: 2000.0
  gas_liquid_ratio: 150.0
  water_cut: 10.0
  oil_api_gravity: 32.0
  water_specific_gravity: 1.05
  gas_specific_gravity: 0.68
  water_fvf: 1.02
  tubing_depth: 7500.0
  wellhead_temperature: 80.0
  temperature_gradient: 0.013
  number_of_segments: 5000
solver:
  critical_properties: sutton
  z_root: smallest
"#;
    let project = from_yaml_str(yaml).unwrap();
    assert_eq!(project.well.non_hydrocarbons.total(), 0.0);
    assert_eq!(project.solver.critical_properties, CriticalPropertyMethod::Sutton);
    assert_eq!(project.solver.max_iterations, 5000);
    assert_eq!(project.well, wf_traverse::WellConfiguration::reference());
}

#[test]
fn invalid_project_is_not_saved() {
    let mut project = WellProject::reference();
    project.well.water_cut = 150.0;

    let path = std::env::temp_dir().join("wf_project_invalid.yaml");
    let _ = std::fs::remove_file(&path);
    let err = save_yaml(&path, &project).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn unknown_root_policy_is_a_yaml_error() {
    let mut value = serde_yaml::to_value(WellProject::reference()).unwrap();
    value
        .get_mut("solver")
        .and_then(|s| s.as_mapping_mut())
        .unwrap()
        .insert("z_root".into(), "middle".into());
    let yaml = serde_yaml::to_string(&value).unwrap();
    assert!(matches!(from_yaml_str(&yaml), Err(ProjectError::Yaml(_))));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("wf_project_does_not_exist.yaml");
    assert!(matches!(load_yaml(&path), Err(ProjectError::Io(_))));
}

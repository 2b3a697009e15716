//! Project validation logic.

use crate::schema::WellProject;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid well: {reason}")]
    Well { reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &WellProject) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if project.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", project.name),
            reason: "must not be empty".to_string(),
        });
    }

    project
        .well
        .validate()
        .map_err(|e| ValidationError::Well {
            reason: e.to_string(),
        })?;

    let solver = &project.solver;
    if !solver.tolerance.is_finite() || solver.tolerance <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.tolerance".to_string(),
            value: solver.tolerance.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if solver.max_iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.max_iterations".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_project_is_valid() {
        validate_project(&WellProject::reference()).unwrap();
    }

    #[test]
    fn reject_future_version() {
        let project = WellProject {
            version: LATEST_VERSION + 1,
            ..WellProject::reference()
        };
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn reject_blank_name() {
        let project = WellProject {
            name: "  ".to_string(),
            ..WellProject::reference()
        };
        let err = validate_project(&project).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn reject_invalid_well() {
        let mut project = WellProject::reference();
        project.well.number_of_segments = 0;
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::Well { .. })
        ));
    }

    #[test]
    fn reject_bad_solver() {
        let mut project = WellProject::reference();
        project.solver.tolerance = -1.0;
        let err = validate_project(&project).unwrap_err();
        assert!(err.to_string().contains("solver.tolerance"));

        let mut project = WellProject::reference();
        project.solver.max_iterations = 0;
        assert!(validate_project(&project).is_err());
    }
}

use serde::Serialize;

/// Artifact type attached to every npm package in a report
pub const NPM_ARTIFACT_TYPE: &str = "npm";

/// Chain of package names leading from a direct dependency to (but excluding)
/// the artifact itself. `None` means the artifact is a direct dependency or
/// that no chain could be found.
pub type Trail = Option<Vec<String>>;

/// A classified lock entry as it appears in the tracker report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub artifact: String,
    pub classifier: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub trail: Trail,
}

impl Artifact {
    pub fn npm(identity: String, trail: Trail) -> Self {
        Self {
            artifact: identity,
            classifier: None,
            artifact_type: NPM_ARTIFACT_TYPE.to_string(),
            trail,
        }
    }
}

/// Artifacts of one npm module split by dependency group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleDependencies {
    pub compile: Vec<Artifact>,
    pub development: Vec<Artifact>,
}

impl ModuleDependencies {
    pub fn push(&mut self, artifact: Artifact, dev: bool) {
        if dev {
            self.development.push(artifact);
        } else {
            self.compile.push(artifact);
        }
    }

    pub fn total_count(&self) -> usize {
        self.compile.len() + self.development.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_serializes_tracker_shape() {
        let artifact = Artifact::npm("@npm:b:1.0.0".to_string(), Some(vec!["a".to_string()]));
        let json = serde_json::to_value(&artifact).unwrap();

        assert_eq!(json["artifact"], "@npm:b:1.0.0");
        assert_eq!(json["type"], "npm");
        assert!(json["classifier"].is_null());
        assert_eq!(json["trail"][0], "a");
    }

    #[test]
    fn test_direct_artifact_has_null_trail() {
        let artifact = Artifact::npm("@npm:a:1.0.0".to_string(), None);
        let json = serde_json::to_value(&artifact).unwrap();
        assert!(json["trail"].is_null());
    }

    #[test]
    fn test_push_partitions_by_dev_flag() {
        let mut deps = ModuleDependencies::default();
        deps.push(Artifact::npm("@npm:a:1.0.0".to_string(), None), false);
        deps.push(Artifact::npm("@npm:jest:29.0.0".to_string(), None), true);

        assert_eq!(deps.compile.len(), 1);
        assert_eq!(deps.development.len(), 1);
        assert_eq!(deps.total_count(), 2);
    }
}

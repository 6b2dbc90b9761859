//! What to do when the target bundle version already exists

use std::path::Path;

use clap::ValueEnum;
use inquire::Confirm;

use crate::error::{BundlerError, Result};

/// Overwrite decision for an existing bundle directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OverwritePolicy {
    /// Ask on the terminal
    #[default]
    Prompt,
    /// Replace the existing bundle
    Yes,
    /// Keep the existing bundle and fail
    No,
}

impl OverwritePolicy {
    /// Resolve the policy for an existing bundle at `path`
    pub fn decide(self, version: &str, path: &Path) -> Result<bool> {
        match self {
            OverwritePolicy::Yes => Ok(true),
            OverwritePolicy::No => Ok(false),
            OverwritePolicy::Prompt => confirm_overwrite(version, path),
        }
    }
}

/// Ask whether to replace an existing bundle; anything but yes keeps it
fn confirm_overwrite(version: &str, path: &Path) -> Result<bool> {
    Confirm::new(&format!(
        "Bundle version {version} already exists, do you wish to overwrite?"
    ))
    .with_default(false)
    .with_help_message(&format!("{} will be deleted and recreated", path.display()))
    .prompt()
    .map_err(BundlerError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_prompts() {
        assert_eq!(OverwritePolicy::default(), OverwritePolicy::Prompt);
    }

    #[test]
    fn test_fixed_policies_do_not_prompt() {
        let path = Path::new("/repo/addons/nvidia-gpu-addon/main/1.0.0");
        assert!(OverwritePolicy::Yes.decide("1.0.0", path).unwrap());
        assert!(!OverwritePolicy::No.decide("1.0.0", path).unwrap());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            OverwritePolicy::from_str("yes", true).unwrap(),
            OverwritePolicy::Yes
        );
        assert_eq!(
            OverwritePolicy::from_str("no", true).unwrap(),
            OverwritePolicy::No
        );
        assert!(OverwritePolicy::from_str("maybe", true).is_err());
    }
}

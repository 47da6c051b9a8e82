pub mod error;
pub mod mount;
pub mod package;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use package::{package, package_paths, verify, ArtifactPaths, PackageReport, Verification};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::fs;

    #[test]
    fn end_to_end_example_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::defaults(dir.path());
        fs::create_dir_all(dir.path().join("dist-single")).unwrap();
        fs::write(&paths.script, "console.log(1)").unwrap();
        fs::write(&paths.style, "body{color:red}").unwrap();

        package_paths(&paths).expect("packaging should succeed");
        let first = fs::read_to_string(&paths.output).unwrap();
        let regions = package::extract_regions(&first).unwrap();
        assert_eq!(regions.script, "console.log(1)");
        assert_eq!(regions.style, "body{color:red}");

        package_paths(&paths).expect("repackaging should succeed");
        assert_eq!(fs::read_to_string(&paths.output).unwrap(), first);
        assert!(verify(&paths).unwrap().is_ok());
    }
}

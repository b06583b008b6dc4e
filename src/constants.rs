//! Common constants used throughout the site kickstarter.

/// Supported settings file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["kickstarter.json", "kickstarter.yml", "kickstarter.yaml"];

/// Directory new site packages are created in unless configured otherwise
pub const DEFAULT_PACKAGES_DIR: &str = "Packages/Sites";

/// Package key format accepted by the package manager
pub const PACKAGE_KEY_PATTERN: &str = r"^[A-Za-z0-9]+\.(?:[A-Za-z0-9][.A-Za-z0-9]*)+$";

/// Package type tag written into the package manifest
pub const PACKAGE_TYPE: &str = "neos-site";

/// Package manifest file name
pub const MANIFEST_FILE: &str = "composer.json";

/// Dependencies every generated site package requires
pub const REQUIRED_PACKAGES: [&str; 2] = ["neos/neos", "neos/nodetypes"];

/// Dependencies every generated site package suggests
pub const SUGGESTED_PACKAGES: [&str; 1] = ["neos/seo"];

/// Namespace of the bundled template resources
pub const RESOURCE_NAMESPACE: &str = "resource://SiteKickstarter/";

/// Empty asset folders created below `Resources/Public`
pub const PUBLIC_FOLDERS: [&str; 3] = ["Images", "JavaScript", "Styles"];

pub const NEOS_VIEW_HELPER: &str = "{namespace neos=Neos\\Neos\\ViewHelpers}";
pub const FUSION_VIEW_HELPER: &str = "{namespace fusion=Neos\\Fusion\\ViewHelpers}";

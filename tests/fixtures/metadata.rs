/// Fixture: module metadata documents

/// `:shared` owns the UI, `:core` is built with Swift export
pub const SHARED_AND_EXPORTED_CORE: &str = r#"[
  {
    "name": ":shared",
    "packageNames": ["com.example.ui"],
    "frameworkBaseName": "Shared",
    "swiftExportEnabled": false,
    "flattenPackageConfigured": false
  },
  {
    "name": ":core",
    "packageNames": ["com.example.core"],
    "frameworkBaseName": "Core",
    "swiftExportEnabled": true,
    "flattenPackageConfigured": false
  }
]"#;

pub const SHARED_AND_OBJC_CORE: &str = r#"[
  {
    "name": ":shared",
    "packageNames": ["com.example.ui"],
    "frameworkBaseName": "Shared",
    "swiftExportEnabled": false,
    "flattenPackageConfigured": false
  },
  {
    "name": ":core",
    "packageNames": ["com.example.core"],
    "frameworkBaseName": "Core",
    "swiftExportEnabled": false,
    "flattenPackageConfigured": false
  }
]"#;

pub const SHARED_AND_FLATTENED_CORE: &str = r#"[
  {
    "name": ":shared",
    "packageNames": ["com.example.ui"],
    "frameworkBaseName": "Shared",
    "swiftExportEnabled": false,
    "flattenPackageConfigured": false
  },
  {
    "name": ":core",
    "packageNames": ["com.example.core"],
    "frameworkBaseName": "Core",
    "swiftExportEnabled": true,
    "flattenPackageConfigured": true
  }
]"#;

//! Property-based tests for configuration resolution.
//!
//! These tests use proptest to check the precedence rules across randomly
//! generated flags and manifests.

use proptest::prelude::*;

use cfn2ts::core::config::{resolve_descriptor, ConfigurationError, ExplicitFlags};
use cfn2ts::core::manifest::{CdkBuildConfig, Manifest, ScopeValue};

/// Strategy for CloudFormation-style scope identifiers.
fn scope_entry() -> impl Strategy<Value = String> {
    "AWS::[A-Z][A-Za-z0-9]{1,12}"
}

/// Strategy for non-empty scope lists.
fn scope_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(scope_entry(), 1..5)
}

/// Strategy for import paths.
fn import_path() -> impl Strategy<Value = String> {
    "@[a-z]{1,8}/[a-z]{1,8}"
}

/// Strategy for the manifest scope field.
fn scope_value() -> impl Strategy<Value = Option<ScopeValue>> {
    prop_oneof![
        Just(None),
        scope_entry().prop_map(|s| Some(ScopeValue::Single(s))),
        scope_list().prop_map(|v| Some(ScopeValue::Many(v))),
    ]
}

/// Strategy for an optional manifest.
fn manifest() -> impl Strategy<Value = Option<Manifest>> {
    let block = (
        scope_value(),
        prop::option::of("AWS::[A-Z][a-z]{1,8}"),
        prop::option::of(import_path()),
    )
        .prop_map(|(cloudformation, filter_resource_prefix, core_import)| {
            Manifest {
                cdk_build: Some(CdkBuildConfig {
                    cloudformation,
                    filter_resource_prefix,
                    core_import,
                }),
            }
        });

    prop_oneof![Just(None), Just(Some(Manifest::default())), block.prop_map(Some)]
}

/// Strategy for explicit flags.
fn flags() -> impl Strategy<Value = ExplicitFlags> {
    (
        prop::collection::vec(scope_entry(), 0..4),
        prop::option::of("AWS::[A-Z][a-z]{1,8}"),
        "[a-z]{1,8}(/[a-z]{1,8})?",
        import_path(),
    )
        .prop_map(|(scope, filter_resource_prefix, out_dir, core_import)| ExplicitFlags {
            scope,
            filter_resource_prefix,
            out_dir,
            core_import,
        })
}

proptest! {
    #[test]
    fn explicit_scope_always_wins(
        scope in scope_list(),
        manifest in manifest(),
        base in flags(),
    ) {
        let flags = ExplicitFlags { scope: scope.clone(), ..base };
        let descriptor = resolve_descriptor(&flags, manifest.as_ref()).unwrap();
        prop_assert_eq!(descriptor.scope.as_slice(), scope.as_slice());
    }

    #[test]
    fn string_scope_becomes_single_entry(entry in scope_entry(), base in flags()) {
        let manifest = Manifest {
            cdk_build: Some(CdkBuildConfig {
                cloudformation: Some(ScopeValue::Single(entry.clone())),
                ..Default::default()
            }),
        };
        let flags = ExplicitFlags { scope: Vec::new(), ..base };
        let descriptor = resolve_descriptor(&flags, Some(&manifest)).unwrap();
        prop_assert_eq!(descriptor.scope.as_slice(), &[entry][..]);
    }

    #[test]
    fn manifest_core_import_always_wins(
        override_import in import_path(),
        scope in scope_value(),
        base in flags(),
    ) {
        let manifest = Manifest {
            cdk_build: Some(CdkBuildConfig {
                cloudformation: scope,
                core_import: Some(override_import.clone()),
                ..Default::default()
            }),
        };
        // Scope may be unresolved; the law only concerns successful resolutions.
        if let Ok(descriptor) = resolve_descriptor(&base, Some(&manifest)) {
            prop_assert_eq!(descriptor.core_import, override_import);
        }
    }

    #[test]
    fn out_dir_comes_from_flags(manifest in manifest(), base in flags(), scope in scope_list()) {
        let flags = ExplicitFlags { scope, ..base };
        let descriptor = resolve_descriptor(&flags, manifest.as_ref()).unwrap();
        prop_assert_eq!(descriptor.out_dir, flags.out_dir);
    }

    #[test]
    fn missing_scope_is_configuration_error(
        manifest in manifest(),
        base in flags(),
    ) {
        let flags = ExplicitFlags { scope: Vec::new(), ..base };
        let manifest_has_scope = manifest
            .as_ref()
            .and_then(|m| m.scope())
            .is_some();
        let result = resolve_descriptor(&flags, manifest.as_ref());
        if manifest_has_scope {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), ConfigurationError);
        }
    }

    #[test]
    fn resolution_is_idempotent(manifest in manifest(), flags in flags()) {
        let first = resolve_descriptor(&flags, manifest.as_ref());
        let second = resolve_descriptor(&flags, manifest.as_ref());
        prop_assert_eq!(first, second);
    }
}

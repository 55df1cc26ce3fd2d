//! 述語のユニットテスト

use super::*;
use crate::types::{TypeRegistry, BASE_DEPLOYABLE_FILE_ARTIFACT, BASE_DEPLOYED};
use crate::udm::Deployable;

fn handle(name: &str) -> TypeHandle {
    TypeHandle::value_of(name)
}

fn registry_with_deployed_types() -> TypeRegistry {
    let mut registry = TypeRegistry::builtin();
    registry
        .register(handle("jee.EarModule"), vec![handle(BASE_DEPLOYED)], false)
        .unwrap();
    registry
        .register(handle("jee.WarModule"), vec![handle(BASE_DEPLOYED)], false)
        .unwrap();
    registry
}

mod subtype_of_tests {
    use super::*;

    #[test]
    fn includes_root_itself() {
        let registry = TypeRegistry::builtin();
        let predicate = SubtypeOf::new(&registry, &handle(BASE_DEPLOYABLE_FILE_ARTIFACT));
        assert!(predicate.is_subtype_or_self(&handle(BASE_DEPLOYABLE_FILE_ARTIFACT)));
        assert_eq!(predicate.root(), &handle(BASE_DEPLOYABLE_FILE_ARTIFACT));
    }

    #[test]
    fn includes_every_descendant() {
        let registry = TypeRegistry::builtin();
        let root = handle(BASE_DEPLOYABLE_FILE_ARTIFACT);
        let predicate = SubtypeOf::new(&registry, &root);

        for subtype in registry.subtypes(&root) {
            assert!(predicate.is_subtype_or_self(&subtype), "{}", subtype);
        }
        assert!(predicate.is_subtype_or_self(&handle("jee.Ear")));
    }

    #[test]
    fn rejects_unrelated_types() {
        let registry = TypeRegistry::builtin();
        let predicate = SubtypeOf::new(&registry, &handle(BASE_DEPLOYABLE_FILE_ARTIFACT));
        assert!(!predicate.is_subtype_or_self(&handle("generic.Resource")));
        assert!(!predicate.is_subtype_or_self(&handle("udm.BaseDeployable")));
        assert!(!predicate.is_subtype_or_self(&handle("acme.Unknown")));
    }

    #[test]
    fn snapshot_ignores_later_registrations() {
        let mut registry = TypeRegistry::builtin();
        let predicate = SubtypeOf::new(&registry, &handle(BASE_DEPLOYABLE_FILE_ARTIFACT));

        registry
            .register(
                handle("acme.Late"),
                vec![handle(BASE_DEPLOYABLE_FILE_ARTIFACT)],
                false,
            )
            .unwrap();

        assert!(!predicate.is_subtype_or_self(&handle("acme.Late")));
        assert!(subtype_of(&registry, &handle(BASE_DEPLOYABLE_FILE_ARTIFACT))(&handle(
            "acme.Late"
        )));
    }

    #[test]
    fn shareable_across_threads() {
        let registry = TypeRegistry::builtin();
        let predicate = std::sync::Arc::new(SubtypeOf::new(&registry, &handle("jee.Ear")));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let predicate = predicate.clone();
                std::thread::spawn(move || predicate.is_subtype_or_self(&handle("jee.Ear")))
            })
            .collect();

        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}

mod instance_of_tests {
    use super::*;

    #[test]
    fn applies_to_declared_type() {
        let registry = TypeRegistry::builtin();
        let is_file_artifact = instance_of(&registry, &handle(BASE_DEPLOYABLE_FILE_ARTIFACT));

        let ear = Deployable::new("Applications/a/1.0/a", handle("jee.Ear"));
        let resource = Deployable::new("Applications/a/1.0/r", handle("generic.Resource"));

        assert!(is_file_artifact(&ear));
        assert!(!is_file_artifact(&resource));
    }
}

mod delta_tests {
    use super::*;

    fn ear_module(id: &str) -> Deployed {
        Deployed::new(id, handle("jee.EarModule"))
    }

    fn war_module(id: &str) -> Deployed {
        Deployed::new(id, handle("jee.WarModule"))
    }

    #[test]
    fn extract_deployed_uses_previous_for_destroy() {
        let delta = Delta::destroy(ear_module("old"));
        assert_eq!(extract_deployed(&delta).map(|d| d.id()), Some("old"));
    }

    #[test]
    fn extract_deployed_uses_current_otherwise() {
        let delta = Delta::modify(ear_module("old"), ear_module("new"));
        assert_eq!(extract_deployed(&delta).map(|d| d.id()), Some("new"));

        let delta = Delta::create(ear_module("created"));
        assert_eq!(extract_deployed(&delta).map(|d| d.id()), Some("created"));

        let delta = Delta::new(Operation::Noop, None, Some(ear_module("same")));
        assert_eq!(extract_deployed(&delta).map(|d| d.id()), Some("same"));
    }

    #[test]
    fn delta_of_matches_extracted_entity_type() {
        let registry = registry_with_deployed_types();
        let is_ear_delta = delta_of(&registry, &handle("jee.EarModule"));

        assert!(is_ear_delta(&Delta::create(ear_module("a"))));
        assert!(is_ear_delta(&Delta::destroy(ear_module("a"))));
        assert!(!is_ear_delta(&Delta::create(war_module("a"))));
        // 変更前は EAR だが変更後は WAR
        assert!(!is_ear_delta(&Delta::modify(ear_module("a"), war_module("a"))));
    }

    #[test]
    fn delta_of_root_matches_all_deployed_subtypes() {
        let registry = registry_with_deployed_types();
        let is_deployed_delta = delta_of(&registry, &handle(BASE_DEPLOYED));

        assert!(is_deployed_delta(&Delta::create(ear_module("a"))));
        assert!(is_deployed_delta(&Delta::create(war_module("a"))));
    }

    #[test]
    fn delta_of_without_entity_is_false() {
        let registry = registry_with_deployed_types();
        let is_ear_delta = delta_of(&registry, &handle("jee.EarModule"));
        let empty_destroy = Delta::new(Operation::Destroy, None, Some(ear_module("a")));
        assert!(!is_ear_delta(&empty_destroy));
    }

    #[test]
    fn operation_is_compares_operation() {
        let is_destroy = operation_is(Operation::Destroy);
        assert!(is_destroy(&Delta::destroy(ear_module("a"))));
        assert!(!is_destroy(&Delta::create(ear_module("a"))));

        let is_noop = operation_is(Operation::Noop);
        assert!(is_noop(&Delta::new(Operation::Noop, None, None)));
    }
}

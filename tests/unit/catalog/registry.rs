//! Tests for catalog construction and JSON feature parsing

#[cfg(test)]
mod tests {
    use serde_json::json;
    use traitmix::TraitError;
    use traitmix::catalog::{Catalog, Feature, FeatureValue};

    // Tests document order is kept for features and values
    // Verified by building the catalog from a sorted map
    #[test]
    fn test_from_json_preserves_order() {
        let features = json!({
            "Zeta": { "z": 1, "a": 2 },
            "Alpha": { "m": 3 }
        });

        let catalog = Catalog::from_json(&features).unwrap();
        let names: Vec<&str> = catalog.features().iter().map(Feature::name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);

        let zeta = catalog.feature("Zeta").unwrap();
        let values: Vec<&str> = zeta.values().iter().map(FeatureValue::value).collect();
        assert_eq!(values, vec!["z", "a"]);
        assert_eq!(zeta.weights(), vec![1, 2]);
    }

    // Tests zero weights are accepted at load time
    #[test]
    fn test_from_json_accepts_zero_weight() {
        let catalog = Catalog::from_json(&json!({ "Hat": { "halo": 0, "cap": 1 } })).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    // Tests negative, fractional and textual weights are rejected
    #[test]
    fn test_from_json_rejects_bad_weights() {
        for weight in [json!(-1), json!(1.5), json!("3"), json!(null)] {
            let features = json!({ "Hat": { "cap": weight } });

            assert!(matches!(
                Catalog::from_json(&features),
                Err(TraitError::MalformedSpecification { .. })
            ));
        }
    }

    // Tests weights beyond u32 are rejected
    #[test]
    fn test_from_json_rejects_oversized_weight() {
        let features = json!({ "Hat": { "cap": u64::from(u32::MAX) + 1 } });

        assert!(Catalog::from_json(&features).is_err());
    }

    // Tests non-object shapes are rejected
    #[test]
    fn test_from_json_rejects_wrong_shapes() {
        assert!(Catalog::from_json(&json!([1, 2])).is_err());
        assert!(Catalog::from_json(&json!({ "Hat": ["cap"] })).is_err());
    }

    // Tests duplicate feature names are rejected
    // Verified by removing the seen-name check
    #[test]
    fn test_new_rejects_duplicate_names() {
        let features = vec![
            Feature::new("Hat", vec![FeatureValue::new("cap", 1)]),
            Feature::new("Hat", vec![FeatureValue::new("crown", 1)]),
        ];

        match Catalog::new(features) {
            Err(TraitError::MalformedSpecification { reason }) => {
                assert!(reason.contains("Hat"));
            }
            other => unreachable!("Expected MalformedSpecification, got {other:?}"),
        }
    }

    // Tests an empty features object gives an empty catalog
    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json(&json!({})).unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.feature("Hat").is_none());
    }

    // Tests a feature name repeated in the document is rejected
    // Verified by collecting the features object into a map
    #[test]
    fn test_from_json_str_rejects_repeated_feature() {
        let result = Catalog::from_json_str(r#"{ "A": { "a": 1 }, "B": { "b": 1 }, "A": { "z": 1 } }"#);

        match result {
            Err(TraitError::MalformedSpecification { reason }) => {
                assert!(reason.contains("'A'"));
            }
            other => unreachable!("Expected MalformedSpecification, got {other:?}"),
        }
    }

    // Tests a value name repeated within one feature is rejected
    #[test]
    fn test_from_json_str_rejects_repeated_value() {
        let result = Catalog::from_json_str(r#"{ "Hat": { "cap": 1, "crown": 2, "cap": 3 } }"#);

        match result {
            Err(TraitError::MalformedSpecification { reason }) => {
                assert!(reason.contains("Hat:cap"));
            }
            other => unreachable!("Expected MalformedSpecification, got {other:?}"),
        }
    }

    // Tests text parsing keeps document order and splits syntax from shape errors
    #[test]
    fn test_from_json_str_order_and_errors() {
        let catalog = Catalog::from_json_str(r#"{ "Zeta": { "z": 1 }, "Alpha": { "a": 2 } }"#).unwrap();
        let names: Vec<&str> = catalog.features().iter().map(Feature::name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);

        assert!(matches!(
            Catalog::from_json_str(r#"{ "Hat": { "cap": -1 } }"#),
            Err(TraitError::MalformedSpecification { .. })
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"{ "Hat": "#),
            Err(TraitError::Json { .. })
        ));
    }
}

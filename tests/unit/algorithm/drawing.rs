//! Tests for complete drawing runs from a parsed specification

#[cfg(test)]
mod tests {
    use traitmix::TraitError;
    use traitmix::algorithm::drawing::Drawing;
    use traitmix::io::specification::Specification;

    const SPEC: &str = r#"{
        "name": "Dinos",
        "count": 6,
        "features": {
            "Body": { "green": 1, "red": 1 },
            "Eyes": { "open": 1 }
        }
    }"#;

    // Tests the drawing carries vectors and both reports
    #[test]
    fn test_drawing_from_specification() {
        let spec = Specification::from_json_str(SPEC).unwrap();
        let drawing = Drawing::from_specification(&spec).unwrap();

        assert_eq!(drawing.name, "Dinos");
        assert_eq!(drawing.draw_count(), 6);
        assert_eq!(drawing.vectors.len(), 2);
        assert_eq!(drawing.duplicates.total(), 6);
        assert_eq!(drawing.weights.features().len(), 2);
    }

    // Tests reports reflect the expanded vectors
    #[test]
    fn test_drawing_weight_tallies() {
        let spec = Specification::from_json_str(SPEC).unwrap();
        let drawing = Drawing::from_specification(&spec).unwrap();

        let body = drawing.weights.feature("Body").unwrap();
        assert_eq!(body.actual_total, 6);
        assert!(body.values.iter().all(|t| t.actual == 3));
        assert!(body.max_deviation() < f64::EPSILON);
    }

    // Tests a negative count aborts before any report is built
    #[test]
    fn test_drawing_negative_count() {
        let spec = Specification::from_json_str(
            r#"{ "name": "Bad", "count": -1, "features": { "Body": { "a": 1 } } }"#,
        )
        .unwrap();

        assert!(matches!(
            Drawing::from_specification(&spec),
            Err(TraitError::InvalidCount { count: -1 })
        ));
    }
}

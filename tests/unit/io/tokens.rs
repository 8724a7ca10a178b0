//! Tests for token file writing and reading

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use traitmix::algorithm::vector::Vector;
    use traitmix::io::tokens::{TokenSheet, load_tokens, tokens_to_json, write_tokens};

    fn vectors() -> Vec<Vector> {
        vec![
            Vector::new(
                vec![
                    ("Body".to_string(), "dino".to_string()),
                    ("Hat".to_string(), "cap".to_string()),
                ],
                2,
            ),
            Vector::new(
                vec![
                    ("Body".to_string(), "robot".to_string()),
                    ("Hat".to_string(), "crown".to_string()),
                ],
                1,
            ),
        ]
    }

    // Tests each vector is repeated count times in output order
    // Verified by writing each vector once
    #[test]
    fn test_tokens_expand_counts() {
        let json = tokens_to_json(&vectors()).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        let tokens = parsed.as_array().unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], tokens[1]);
        assert_eq!(tokens[2]["Body"], "robot");
    }

    // Tests token objects keep feature order
    #[test]
    fn test_token_sheet_keeps_feature_order() {
        let json = serde_json::to_string(&TokenSheet(&vectors()[1..])).unwrap();

        assert_eq!(json, r#"[{"Body":"robot","Hat":"crown"}]"#);
    }

    // Tests an empty drawing writes an empty array
    #[test]
    fn test_empty_token_list() {
        assert_eq!(serde_json::to_string(&TokenSheet(&[])).unwrap(), "[]");
    }

    // Tests written tokens read back with one entry per draw
    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tokens.json");

        write_tokens(&vectors(), &path).unwrap();
        let tokens = load_tokens(&path).unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].get("Hat").map(String::as_str), Some("cap"));
    }

    // Tests loading rejects non-string values with the path in the message
    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, r#"[{"Body": 3}]"#).unwrap();

        let err = load_tokens(&path).unwrap_err();
        assert!(err.to_string().contains("tokens.json"));
    }
}

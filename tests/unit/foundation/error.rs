use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GenartError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GenartError::render("x").to_string().contains("render error:"));
    assert!(
        GenartError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        GenartError::external("x")
            .to_string()
            .contains("external error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GenartError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: GenartError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, GenartError::Serde(_)));
}

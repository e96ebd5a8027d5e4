use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SceneError::config("x").to_string().contains("config error:"));
    assert!(SceneError::text("x").to_string().contains("text error:"));
    assert!(SceneError::render("x").to_string().contains("render error:"));
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_and_json_errors_convert() {
    let io: SceneError = std::io::Error::other("disk").into();
    assert!(io.to_string().starts_with("io error:"));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SceneError = json.into();
    assert!(err.to_string().starts_with("serialization error:"));
}

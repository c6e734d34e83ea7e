use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CharadeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CharadeError::fetch("x").to_string().contains("fetch error:"));
    assert!(
        CharadeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        CharadeError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CharadeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_convert() {
    fn open() -> CharadeResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing file"))?;
        Ok(())
    }
    let err = open().unwrap_err();
    assert!(matches!(err, CharadeError::Io(_)));
    assert!(err.to_string().contains("missing file"));
}

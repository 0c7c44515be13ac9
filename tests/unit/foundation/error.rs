use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixmixError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixmixError::format("x")
            .to_string()
            .contains("format error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixmixError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn inner() -> PixmixResult<()> {
        Err(anyhow::anyhow!("collaborator failed"))?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert!(matches!(err, PixmixError::Other(_)));
    assert_eq!(err.to_string(), "collaborator failed");
}

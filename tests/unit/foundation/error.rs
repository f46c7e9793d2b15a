use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ImgRomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ImgRomError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(ImgRomError::media("x").to_string().contains("media error:"));
    assert!(
        ImgRomError::from(std::io::Error::other("x"))
            .to_string()
            .contains("io error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ImgRomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

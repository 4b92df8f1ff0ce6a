use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(ConvertError::parse("x").to_string().contains("parse error:"));
    assert!(
        ConvertError::unknown_kind("Skeleton")
            .to_string()
            .contains("unknown document kind: Skeleton")
    );
    assert!(ConvertError::asset("x").to_string().contains("asset error:"));
    assert!(
        ConvertError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_errors_name_the_path() {
    let err = ConvertError::io("out/a.prefab", std::io::Error::other("denied"));
    let msg = err.to_string();
    assert!(msg.contains("out/a.prefab"));
    assert!(msg.contains("denied"));
    assert!(!err.is_document_fatal());
}

#[test]
fn document_fatal_classification() {
    assert!(ConvertError::parse("bad").is_document_fatal());
    assert!(ConvertError::unknown_kind("x").is_document_fatal());
    assert!(ConvertError::Cycle(PathBuf::from("a.csd")).is_document_fatal());
    assert!(!ConvertError::import("x").is_document_fatal());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ConvertError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

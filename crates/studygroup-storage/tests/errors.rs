use studygroup_core::error::StoreError;
use studygroup_storage::error::StorageError;

#[test]
fn serialization_errors_keep_their_kind() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let store: StoreError = StorageError::Serialization(json_err).into();
    assert!(matches!(store, StoreError::Serialization(_)));
}

#[test]
fn backend_errors_carry_the_s3_message() {
    let store: StoreError = StorageError::GetObject("access denied".to_string()).into();
    match store {
        StoreError::Backend(message) => assert!(message.contains("access denied")),
        other => panic!("unexpected: {other:?}"),
    }
}

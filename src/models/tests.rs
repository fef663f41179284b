use serde_json::json;

use super::patch::{apply_patch, PatchError, PatchOp, PatchOperation};
use super::record::{ModelError, Record, MAX_NAME_LEN};

fn record(name: &str) -> Record {
    Record {
        id: "4aa3d1a2-20c1-43b5-9cf3-60bbf86622a5".to_string(),
        name: name.to_string(),
    }
}

#[test]
fn validate_accepts_plain_name() {
    assert_eq!(record("Alice").validate(), Ok(()));
}

#[test]
fn validate_rejects_empty_name() {
    assert_eq!(record("").validate(), Err(ModelError::EmptyName));
}

#[test]
fn validate_rejects_oversized_name() {
    let long = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(record(&long).validate(), Err(ModelError::NameTooLong));
}

#[test]
fn replace_name_updates_only_name() {
    let mut rec = record("Bob");
    let ops = vec![PatchOperation {
        op: PatchOp::Replace,
        path: "/name".to_string(),
        value: Some(json!("Bobby")),
    }];

    apply_patch(&mut rec, &ops).unwrap();

    assert_eq!(rec.name, "Bobby");
    assert_eq!(rec.id, "4aa3d1a2-20c1-43b5-9cf3-60bbf86622a5");
}

#[test]
fn remove_name_clears_field_and_fails_validation() {
    let mut rec = record("Bob");
    let ops = vec![PatchOperation {
        op: PatchOp::Remove,
        path: "/name".to_string(),
        value: None,
    }];

    apply_patch(&mut rec, &ops).unwrap();
    assert_eq!(rec.validate(), Err(ModelError::EmptyName));
}

#[test]
fn replace_with_non_string_value_is_rejected() {
    let mut rec = record("Bob");
    let ops = vec![PatchOperation {
        op: PatchOp::Replace,
        path: "/name".to_string(),
        value: Some(json!(42)),
    }];

    assert_eq!(
        apply_patch(&mut rec, &ops),
        Err(PatchError::InvalidValue("/name".to_string()))
    );
    assert_eq!(rec.name, "Bob");
}

#[test]
fn unknown_path_is_rejected() {
    let mut rec = record("Bob");
    let ops = vec![PatchOperation {
        op: PatchOp::Replace,
        path: "/id".to_string(),
        value: Some(json!("other")),
    }];

    assert_eq!(
        apply_patch(&mut rec, &ops),
        Err(PatchError::UnknownPath("/id".to_string()))
    );
}

#[test]
fn patch_operation_wire_format_round_trips() {
    let raw = r#"[{"op":"replace","path":"/name","value":"Bobby"}]"#;
    let ops: Vec<PatchOperation> = serde_json::from_str(raw).unwrap();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].op, PatchOp::Replace);
    assert_eq!(ops[0].path, "/name");
}

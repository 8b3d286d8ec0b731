use railway_rail::{create, failure, from_optional, success, unit, Error, RailExt, Result};

#[test]
fn success_has_value_and_no_error() {
    let r = success(42);

    assert!(r.is_success());
    assert!(!r.is_failure());
    assert_eq!(r.value(), Some(&42));
    assert_eq!(r.error(), &Error::NONE);
}

#[test]
fn create_is_success() {
    assert_eq!(create("Laptop"), success("Laptop"));
}

#[test]
fn failure_carries_error_and_no_value() {
    let err = Error::new("E1", "m1");
    let r = failure::<u32>(err.clone());

    assert!(!r.is_success());
    assert!(r.is_failure());
    assert_eq!(r.value(), None);
    assert_eq!(r.error(), &err);
}

#[test]
fn success_with_any_payload_reports_sentinel() {
    let r: Result<Vec<u8>> = success(Vec::new());
    assert!(r.error().is_none());

    let r: Result<Option<u8>> = success(None);
    assert!(r.is_success());
    assert!(r.error().is_none());
}

#[test]
fn from_optional_present_is_success() {
    let r = from_optional(Some("Mouse"), Error::new("NOT_FOUND", "missing"));
    assert_eq!(r, Ok("Mouse"));
}

#[test]
fn from_optional_absent_is_failure() {
    let err = Error::new("NOT_FOUND", "missing");
    let r = from_optional(None::<&str>, err.clone());
    assert_eq!(r, Err(err));
}

#[test]
fn unit_factories() {
    let ok = unit::success();
    assert!(ok.is_success());
    assert!(ok.error().is_none());
    assert_eq!(unit::create(), Ok(()));

    let err = Error::new("PRODUCT_NOT_FOUND", "gone");
    let failed = unit::failure(err.clone());
    assert!(failed.is_failure());
    assert_eq!(failed.error(), &err);
}

#[test]
fn unit_result_is_default_shape() {
    fn delete() -> Result {
        unit::success()
    }

    assert_eq!(delete(), Ok(()));
}

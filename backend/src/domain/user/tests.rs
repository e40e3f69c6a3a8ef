//! Regression coverage for the user model and its JSON shape.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn user() -> User {
    User {
        id: UserId::new(7),
        name: "Name 7".to_owned(),
        last_name: "Lastname 70".to_owned(),
        age: 33,
        place_of_birth: "Smolensk".to_owned(),
        salary: 512_000,
    }
}

#[rstest]
fn serialises_with_camel_case_keys(user: User) {
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": 7,
            "name": "Name 7",
            "lastName": "Lastname 70",
            "age": 33,
            "placeOfBirth": "Smolensk",
            "salary": 512_000
        })
    );
}

#[rstest]
fn decodes_query_service_payload(user: User) {
    let payload = r#"{"id":7,"name":"Name 7","lastName":"Lastname 70","age":33,"placeOfBirth":"Smolensk","salary":512000}"#;
    let decoded: User = serde_json::from_str(payload).expect("decode user");
    assert_eq!(decoded, user);
}

#[rstest]
fn rejects_payload_with_missing_field() {
    let payload = r#"{"id":1,"name":"Name 1","age":20,"placeOfBirth":"Kazan","salary":1}"#;
    assert!(serde_json::from_str::<User>(payload).is_err());
}

#[rstest]
fn new_user_with_id_keeps_fields(user: User) {
    let new_user = NewUser {
        name: user.name.clone(),
        last_name: user.last_name.clone(),
        age: user.age,
        place_of_birth: user.place_of_birth.clone(),
        salary: user.salary,
    };
    assert_eq!(new_user.with_id(UserId::new(7)), user);
}

#[rstest]
fn converts_from_synthetic_user() {
    let synthetic = synthetic_users::SyntheticUser {
        name: "Name 1".to_owned(),
        last_name: "Lastname 10".to_owned(),
        age: 19,
        place_of_birth: "Kaluga".to_owned(),
        salary: 40_000,
    };
    let new_user = NewUser::from(synthetic);
    assert_eq!(new_user.name, "Name 1");
    assert_eq!(new_user.last_name, "Lastname 10");
    assert_eq!(new_user.age, 19);
    assert_eq!(new_user.place_of_birth, "Kaluga");
    assert_eq!(new_user.salary, 40_000);
}

#[rstest]
fn user_id_displays_raw_value() {
    assert_eq!(UserId::from(42).to_string(), "42");
    assert_eq!(UserId::new(42).get(), 42);
}

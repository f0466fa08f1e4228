use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    let request = validate_register_input(" alice ", " alice@stud.noroff.no ", "hunter22").unwrap();
    assert_eq!(request.name, "alice");
    assert_eq!(request.email, "alice@stud.noroff.no");
    assert_eq!(request.password, "hunter22");
    assert_eq!(request.venue_manager, None);
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(validate_register_input("", "a@b.c", "hunter22"), Err("Enter name, email and password."));
    assert_eq!(validate_register_input("alice", " ", "hunter22"), Err("Enter name, email and password."));
    assert_eq!(validate_register_input("alice", "a@b.c", ""), Err("Enter name, email and password."));
}

#[test]
fn validate_register_input_enforces_min_password_length() {
    assert_eq!(
        validate_register_input("alice", "a@b.c", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_register_input("alice", "a@b.c", "exactly8").is_ok());
}

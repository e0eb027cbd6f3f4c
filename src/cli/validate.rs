use crate::element::keywords::ReservedWords;
use crate::error::GenError;

/// Check that `name` can be used as the generated class name.
pub fn validate_class_name(name: &str, reserved: &ReservedWords) -> Result<(), GenError> {
    check_identifier("class name", name, reserved)
}

/// Check a dot-separated namespace such as `Tests.Pages`.
pub fn validate_namespace(namespace: &str, reserved: &ReservedWords) -> Result<(), GenError> {
    if namespace.is_empty() {
        return Err(invalid("namespace", namespace, "must not be empty"));
    }

    for segment in namespace.split('.') {
        check_identifier("namespace", segment, reserved).map_err(|_| {
            invalid(
                "namespace",
                namespace,
                &format!("segment '{}' is not a valid identifier", segment),
            )
        })?;
    }

    Ok(())
}

fn check_identifier(what: &'static str, value: &str, reserved: &ReservedWords) -> Result<(), GenError> {
    let mut chars = value.chars();

    match chars.next() {
        None => return Err(invalid(what, value, "must not be empty")),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(invalid(what, value, "must start with a letter or '_'"));
        }
        Some(_) => {}
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(what, value, "may only contain letters, digits and '_'"));
    }

    if reserved.contains_exact(value) {
        return Err(invalid(what, value, "is a reserved keyword"));
    }

    Ok(())
}

fn invalid(what: &'static str, value: &str, reason: &str) -> GenError {
    GenError::InvalidIdentifier {
        what,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

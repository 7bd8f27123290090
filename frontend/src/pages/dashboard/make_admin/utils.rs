use crate::api::MakeAdminRequest;

/// Minimal shape check: one `@` with text on both sides and a dot in the domain.
pub fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !raw.chars().any(char::is_whitespace)
}

pub fn validate_admin_email(raw: &str) -> Result<MakeAdminRequest, String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Please enter an email".into());
    }
    if !is_plausible_email(email) {
        return Err(format!("'{}' is not a valid email address", email));
    }
    Ok(MakeAdminRequest {
        email: email.to_lowercase(),
    })
}

use crate::api::LoginRequest;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
}

impl LoginFormState {
    pub fn validate(&self) -> Result<LoginRequest, String> {
        validate_credentials(&self.email, &self.password)?;
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}

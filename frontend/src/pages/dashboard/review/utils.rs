use crate::api::{NewReview, UserResponse};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormState {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            rating: MAX_RATING,
            comment: String::new(),
        }
    }
}

impl ReviewFormState {
    pub fn for_user(user: Option<&UserResponse>) -> Self {
        let mut state = Self::default();
        if let Some(user) = user {
            state.name = user.label().to_string();
            state.email = user.email.clone();
        }
        state
    }

    /// Parses the rating select value; anything out of range keeps the current rating.
    pub fn set_rating(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<u8>() {
            if (MIN_RATING..=MAX_RATING).contains(&value) {
                self.rating = value;
            }
        }
    }

    pub fn validate(&self) -> Result<NewReview, String> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name".into());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING));
        }
        if self.comment.trim().is_empty() {
            return Err("Please write a short review".into());
        }
        Ok(NewReview {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            rating: self.rating,
            comment: self.comment.trim().to_string(),
        })
    }

    /// Clears the review text, keeping who wrote it.
    pub fn reset(&mut self) {
        self.rating = MAX_RATING;
        self.comment.clear();
    }
}

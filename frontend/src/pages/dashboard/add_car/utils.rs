use crate::api::NewCar;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCarFormState {
    pub name: String,
    /// Raw input; parsed on submit.
    pub price: String,
    pub image: String,
    pub description: String,
}

impl AddCarFormState {
    pub fn validate(&self) -> Result<NewCar, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please enter the car name".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price must be zero or more".into());
        }
        let image = self.image.trim();
        if !(image.starts_with("http://") || image.starts_with("https://")) {
            return Err("Image must be an http(s) URL".into());
        }
        Ok(NewCar {
            name: name.to_string(),
            price,
            image: image.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

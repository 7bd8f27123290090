use crate::api::{Acknowledgement, ApiClient, ApiError, NewCar};
use std::rc::Rc;

#[derive(Clone)]
pub struct AddCarRepository {
    client: Rc<ApiClient>,
}

impl AddCarRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn add(&self, car: NewCar) -> Result<NewCar, ApiError> {
        let ack: Acknowledgement = self.client.create_car(&car).await?;
        log::debug!("Car '{}' stored: {:?}", car.name, ack.affected);
        Ok(car)
    }
}

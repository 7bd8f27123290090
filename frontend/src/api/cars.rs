use serde_json::Value;

use super::{
    client::ApiClient,
    types::{Acknowledgement, ApiError, Car, CatalogLimit, NewCar},
};

/// Keeps every record that passes validation, in received order.
pub fn decode_catalog(raw: Vec<Value>) -> Vec<Car> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match Car::from_value(value) {
            Ok(car) => Some(car),
            Err(err) => {
                log::warn!("Skipping catalog record #{}: {}", index, err);
                None
            }
        })
        .collect()
}

impl ApiClient {
    pub async fn get_cars(&self, limit: CatalogLimit) -> Result<Vec<Car>, ApiError> {
        let url = self
            .endpoint(&format!("cars/{}", limit.path_segment()))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        let raw: Vec<Value> = self.map_json_response(response).await?;
        Ok(decode_catalog(raw))
    }

    pub async fn create_car(&self, car: &NewCar) -> Result<Acknowledgement, ApiError> {
        let url = self.endpoint("cars").await;
        let response = self
            .send(self.with_auth(self.http_client().post(url).json(car)))
            .await?;
        self.map_json_response(response).await
    }
}

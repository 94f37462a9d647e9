use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::customer_service;

#[derive(Serialize, ToSchema)]
pub struct CustomerServiceResponse {
    pub qr_code_url: String,
    /// Service hours, e.g. "10:00-23:00".
    pub online_time: String,
}

impl From<customer_service::Model> for CustomerServiceResponse {
    fn from(m: customer_service::Model) -> Self {
        Self {
            qr_code_url: m.qr_code_url,
            online_time: m.online_time,
        }
    }
}

use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::API_KEY_HEADER;
use shared::{
    DashboardConfig, DateCheck, Holiday, HolidayApi, HolidayCatalog, MutationResponse, RequestError,
    YearHolidays, YearHolidaysPayload,
};

/// API client for the remote holiday service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the configured service
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a 2xx JSON body
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RequestError> {
        let response = request.send().await.map_err(|e| {
            log::error!("Holiday service unreachable: {}", e);
            RequestError::network(e)
        })?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = RequestError::from_response(status, &body);
            log::warn!("{} answered {}: {}", response.url(), status, error);
            return Err(error);
        }
        response.json::<T>().await.map_err(RequestError::decode)
    }
}

#[async_trait(?Send)]
impl HolidayApi for ApiClient {
    async fn list_all(&self) -> Result<HolidayCatalog, RequestError> {
        self.fetch(Request::get(&self.url("/feriados/all"))).await
    }

    async fn list_upcoming(&self, count: u32) -> Result<Vec<Holiday>, RequestError> {
        let count = count.to_string();
        let request = Request::get(&self.url("/feriados/proximos")).query([("cantidad", count.as_str())]);
        self.fetch(request).await
    }

    async fn get_by_year(&self, year: i32) -> Result<YearHolidays, RequestError> {
        let payload: YearHolidaysPayload = self.fetch(Request::get(&self.url(&format!("/feriados/{}", year)))).await?;
        Ok(YearHolidays::from_payload(year, payload))
    }

    async fn check_date(&self, date: &str) -> Result<DateCheck, RequestError> {
        let encoded = String::from(js_sys::encode_uri_component(date));
        self.fetch(Request::get(&self.url(&format!("/feriados/consultar/{}", encoded)))).await
    }

    async fn create(
        &self,
        year: i32,
        date: &str,
        name: &str,
        api_key: &str,
    ) -> Result<MutationResponse, RequestError> {
        let year = year.to_string();
        let request = Request::post(&self.url("/feriados/agregar/"))
            .query([("anio", year.as_str()), ("fecha", date), ("nombre", name)])
            .header(API_KEY_HEADER, api_key);
        self.fetch(request).await
    }

    async fn delete(&self, year: i32, date: &str, api_key: &str) -> Result<MutationResponse, RequestError> {
        let year = year.to_string();
        let request = Request::delete(&self.url("/feriados/eliminar/"))
            .query([("anio", year.as_str()), ("fecha", date)])
            .header(API_KEY_HEADER, api_key);
        self.fetch(request).await
    }
}

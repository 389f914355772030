//! Seam between the dashboard logic and the remote holiday service.
//!
//! The browser client in the frontend crate implements this over HTTP; tests
//! implement it in memory. Futures are not `Send` because everything runs on
//! the single-threaded browser event loop.

use async_trait::async_trait;

use crate::error::RequestError;
use crate::{DateCheck, Holiday, HolidayCatalog, MutationResponse, YearHolidays};

/// Header carrying the admin credential on mutating calls
pub const API_KEY_HEADER: &str = "X-API-Key";

/// One method per remote action, a single round trip each
#[async_trait(?Send)]
pub trait HolidayApi {
    /// `GET /feriados/all`
    async fn list_all(&self) -> Result<HolidayCatalog, RequestError>;

    /// `GET /feriados/proximos?cantidad={count}`
    async fn list_upcoming(&self, count: u32) -> Result<Vec<Holiday>, RequestError>;

    /// `GET /feriados/{year}`
    async fn get_by_year(&self, year: i32) -> Result<YearHolidays, RequestError>;

    /// `GET /feriados/consultar/{date}`
    async fn check_date(&self, date: &str) -> Result<DateCheck, RequestError>;

    /// `POST /feriados/agregar/?anio=&fecha=&nombre=`
    async fn create(
        &self,
        year: i32,
        date: &str,
        name: &str,
        api_key: &str,
    ) -> Result<MutationResponse, RequestError>;

    /// `DELETE /feriados/eliminar/?anio=&fecha=`
    async fn delete(&self, year: i32, date: &str, api_key: &str) -> Result<MutationResponse, RequestError>;
}

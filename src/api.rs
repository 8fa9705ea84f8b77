//! Endpoint catalog for the Dayforce API.
//!
//! [`Api`] is the authenticated session: a fixed set of named operations,
//! one per remote resource, each composing a resource path (and query
//! parameters where the endpoint takes them) and delegating to the
//! request executor. No method validates identifiers or reclassifies
//! failures; malformed identifiers pass through verbatim and surface as a
//! domain error with the remote system's status code.
//!
//! Construct sessions through [`Client::api`](crate::client::Client::api).
//!
//! # Example
//!
//! ```no_run
//! use dayforce_api::Client;
//!
//! # async fn example() -> dayforce_api::Result<()> {
//! let api = Client::new("https://www.dayforcehcm.com", "acme").api("user", "pass")?;
//!
//! for xrefcode in api.get_employees(&[]).await? {
//!     let details = api.get_employee_details(&xrefcode).await?;
//!     println!("{xrefcode}: {details}");
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, TimeZone};
use serde_json::Value;
use std::fmt;

use crate::error::{Error, Result};
use crate::http_client::HttpClient;
use crate::time::format_filter_date;

/// An authenticated Dayforce API session.
///
/// Immutable after construction and stateless between calls; all methods
/// take `&self`, so one session may serve concurrent calls. Ordering and
/// connection pooling are the transport's concern.
#[derive(Debug)]
pub struct Api {
    http: HttpClient,
}

impl Api {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Lists the XRefCodes of all employees.
    ///
    /// Caller-supplied `params` are forwarded verbatim as the query string
    /// (the endpoint accepts server-side filters such as
    /// `employmentStatusXrefCode`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the envelope carries no
    /// data, or a record lacks the `XRefCode` field.
    pub async fn get_employees(&self, params: &[(&str, &str)]) -> Result<Vec<String>> {
        let query: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let data = self.http.get("Employees", &query).await?;

        let records = data
            .as_array()
            .ok_or_else(|| Error::malformed("Employees Data is not an array"))?;

        records
            .iter()
            .map(|record| {
                record
                    .get("XRefCode")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| Error::malformed("employee record missing XRefCode"))
            })
            .collect()
    }

    /// Fetches one employee's details.
    pub async fn get_employee_details(&self, xrefcode: &str) -> Result<Value> {
        self.get(format!("Employees/{xrefcode}")).await
    }

    /// Fetches an employee's addresses.
    pub async fn get_employee_addresses(&self, xrefcode: &str) -> Result<Value> {
        self.get(format!("Employees/{xrefcode}/Addresses")).await
    }

    /// Fetches an employee's contacts.
    pub async fn get_employee_contacts(&self, xrefcode: &str) -> Result<Value> {
        self.get(format!("Employees/{xrefcode}/Contacts")).await
    }

    /// Fetches an employee's availability.
    pub async fn get_employee_availability(&self, xrefcode: &str) -> Result<Value> {
        self.get(format!("Employees/{xrefcode}/Availability")).await
    }

    /// Fetches an employee's schedule between two dates.
    ///
    /// Both boundary dates are formatted with the fixed
    /// `YYYY-MM-DDThh:mm:ss` pattern, whatever timezone they carry.
    pub async fn get_employee_schedules<Tz: TimeZone>(
        &self,
        xrefcode: &str,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Value>
    where
        Tz::Offset: fmt::Display,
    {
        let query = vec![
            (
                "filterScheduleStartDate".to_string(),
                format_filter_date(start),
            ),
            ("filterScheduleEndDate".to_string(), format_filter_date(end)),
        ];
        self.http
            .get(&format!("Employees/{xrefcode}/Schedules"), &query)
            .await
    }

    /// Fetches an employee's compensation summary.
    pub async fn get_employee_compensation(&self, xrefcode: &str) -> Result<Value> {
        self.get(format!("Employees/{xrefcode}/CompensationSummary"))
            .await
    }

    /// Fetches an employee's time-away-from-work entries.
    pub async fn get_employee_time_away(&self, xrefcode: &str) -> Result<Value> {
        self.get(format!("Employees/{xrefcode}/TimeAwayFromWork"))
            .await
    }

    /// Fetches report metadata: the full catalog when `xrefcode` is
    /// `None`, one named report otherwise.
    pub async fn get_report_metadata(&self, xrefcode: Option<&str>) -> Result<Value> {
        match xrefcode {
            Some(code) => self.get(format!("ReportMetadata/{code}")).await,
            None => self.get("ReportMetadata".to_string()).await,
        }
    }

    /// Returns the underlying request executor, for POST operations and
    /// endpoints not yet in the catalog.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    async fn get(&self, path: String) -> Result<Value> {
        self.http.get(&path, &[]).await
    }
}

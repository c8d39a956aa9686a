//! DNSPod legacy API client.


use crate::error::{DdnsError, Result};
use crate::params::{field_text, fill_defaults, Params};
use crate::pending::ApiCall;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://dnsapi.cn";

/// Account credentials attached to every outbound request.
///
/// Built once at startup and held for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    login_email: String,
    login_password: String,
    format: String,
    lang: String,
}

impl Credentials {
    /// Create a credentials bundle with the API defaults (JSON responses).
    pub fn new(email: String, password: String) -> Self {
        Self {
            login_email: email,
            login_password: password,
            format: "json".to_string(),
            lang: "cn".to_string(),
        }
    }

    fn apply(&self, params: &mut Params) {
        params.insert("login_email".to_string(), self.login_email.clone());
        params.insert("login_password".to_string(), self.login_password.clone());
        params.insert("format".to_string(), self.format.clone());
        params.insert("lang".to_string(), self.lang.clone());
    }
}

/// DNSPod DNS update client.
///
/// Calls are dispatched on the runtime handle captured at construction;
/// the caller gets an [`ApiCall`] back immediately and only suspends when
/// it first reads a field from it.
pub struct DnspodClient {
    client: reqwest::Client,
    credentials: Credentials,
    runtime: tokio::runtime::Handle,
    base_url: String,
}

impl DnspodClient {
    /// Create a new client. Must be called within a Tokio runtime.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (for testing).
    pub fn with_base_url(credentials: Credentials, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            runtime: tokio::runtime::Handle::current(),
            base_url,
        }
    }

    /// Dispatch an API method, returning a pending result immediately.
    ///
    /// Credentials are merged into the form fields and the POST runs on a
    /// spawned task. A non-2xx status surfaces as a network error when the
    /// result is first read.
    pub fn call_method(&self, method: &str, mut params: Params) -> ApiCall {
        self.credentials.apply(&mut params);

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), method);
        let client = self.client.clone();

        tracing::debug!("dispatching {}", url);

        ApiCall::new(self.runtime.spawn(async move {
            let response = client
                .post(&url)
                .form(&params)
                .send()
                .await?
                .error_for_status()?;

            Ok(response.text().await?)
        }))
    }

    /// List account domains, optionally filtered by a name keyword.
    ///
    /// The payload carries the matches under a `domains` key.
    pub fn list_domains(&self, keyword: &str) -> ApiCall {
        let mut params = Params::new();
        params.insert("keyword".to_string(), keyword.to_string());
        self.call_method("domain.list", params)
    }

    /// List records of a domain, optionally filtered by a name keyword.
    ///
    /// The payload carries the matches under a `records` key.
    pub fn list_records(&self, domain_id: &str, keyword: &str) -> ApiCall {
        let mut params = Params::new();
        params.insert("domain_id".to_string(), domain_id.to_string());
        params.insert("keyword".to_string(), keyword.to_string());
        self.call_method("record.list", params)
    }

    /// Find a record by domain and record name, then submit a modify
    /// request for it.
    ///
    /// `overrides` must carry at least the new `value` (the IP address).
    /// Every modify parameter the caller does not supply is copied
    /// verbatim from the located record, so its other attributes (type,
    /// TTL, routing line, ...) survive the update. When several entries
    /// match a keyword, the first in response order wins.
    pub async fn update_record(
        &self,
        domain: &str,
        record: &str,
        mut overrides: Params,
    ) -> Result<ApiCall> {
        let domain_list = self.list_domains(domain);
        let domains = domain_list.field("domains").await?;
        let domain_info = first_entry(&domains).ok_or_else(|| DdnsError::DomainNotFound {
            domain: domain.to_string(),
        })?;
        let domain_id = field_text(domain_info, "id")?;

        let record_list = self.list_records(&domain_id, record);
        let records = record_list.field("records").await?;
        let record_info = first_entry(&records).ok_or_else(|| DdnsError::RecordNotFound {
            record: record.to_string(),
        })?;

        let defaults = [
            ("domain_id", domain_id),
            ("record_id", field_text(record_info, "id")?),
            ("sub_domain", field_text(record_info, "name")?),
            ("record_type", field_text(record_info, "type")?),
            ("record_line", field_text(record_info, "line")?),
            ("mx", field_text(record_info, "mx")?),
            ("ttl", field_text(record_info, "ttl")?),
            ("status", field_text(record_info, "status")?),
        ];
        fill_defaults(&mut overrides, &defaults);

        Ok(self.call_method("record.modify", overrides))
    }
}

fn first_entry(list: &Value) -> Option<&Value> {
    list.as_array().and_then(|entries| entries.first())
}

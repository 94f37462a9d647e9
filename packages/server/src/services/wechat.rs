use serde::Deserialize;

use crate::config::WechatConfig;
use crate::error::AppError;

/// Client for the mini-program identity exchange (`jscode2session`).
pub struct WechatClient {
    http: reqwest::Client,
    app_id: String,
    app_secret: String,
    api_url: String,
}

/// Response body of the session exchange. On failure the endpoint returns
/// 200 with a non-zero `errcode` instead of an HTTP error status.
#[derive(Debug, Deserialize)]
struct WxSession {
    openid: Option<String>,
    #[allow(dead_code)]
    session_key: Option<String>,
    errcode: Option<i32>,
    errmsg: Option<String>,
}

impl WechatClient {
    pub fn new(config: &WechatConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            api_url: config.api_url.clone(),
        }
    }

    /// Exchange a client login code for a stable openid.
    #[tracing::instrument(skip(self, code))]
    pub async fn code_to_openid(&self, code: &str) -> Result<String, AppError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("appid", self.app_id.as_str()),
                ("secret", self.app_secret.as_str()),
                ("js_code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("Login service unreachable: {err}")))?;

        let session: WxSession = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("Malformed login response: {err}")))?;

        if let Some(errcode) = session.errcode
            && errcode != 0
        {
            let errmsg = session.errmsg.unwrap_or_else(|| "unknown error".into());
            return Err(AppError::Upstream(format!(
                "Login rejected ({errcode}): {errmsg}"
            )));
        }

        session
            .openid
            .ok_or_else(|| AppError::Upstream("Login response missing openid".into()))
    }
}

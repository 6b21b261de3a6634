//! Minimal HTTP transport used by [`RestStore`](crate::store::RestStore).
//!
//! Browser builds go through `reqwasm` (the Fetch API); native builds such as the desktop
//! target and the test suite go through `reqwest`. Both report the status code and the body
//! text and leave status interpretation to the caller.

/// Status code and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpClient;
#[cfg(target_arch = "wasm32")]
pub use wasm::HttpClient;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::HttpResponse;

    #[derive(Clone, Default)]
    pub struct HttpClient {
        client: reqwest::Client,
    }

    impl HttpClient {
        pub async fn get(
            &self,
            url: &str,
            headers: &[(&str, &str)],
        ) -> Result<HttpResponse, String> {
            let mut request = self.client.get(url);
            for (name, value) in headers {
                request = request.header(*name, *value);
            }

            read(request.send().await.map_err(|e| e.to_string())?).await
        }

        pub async fn post(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            body: String,
        ) -> Result<HttpResponse, String> {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(*name, *value);
            }

            read(request.body(body).send().await.map_err(|e| e.to_string())?).await
        }
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, String> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use reqwasm::http::Request;

    use super::HttpResponse;

    #[derive(Clone, Default)]
    pub struct HttpClient;

    impl HttpClient {
        pub async fn get(
            &self,
            url: &str,
            headers: &[(&str, &str)],
        ) -> Result<HttpResponse, String> {
            let mut request = Request::get(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }

            read(request.send().await.map_err(|e| e.to_string())?).await
        }

        pub async fn post(
            &self,
            url: &str,
            headers: &[(&str, &str)],
            body: String,
        ) -> Result<HttpResponse, String> {
            let mut request = Request::post(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }

            read(request.body(body).send().await.map_err(|e| e.to_string())?).await
        }
    }

    async fn read(response: reqwasm::http::Response) -> Result<HttpResponse, String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, body })
    }
}

use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

pub(crate) fn build(base_url: &str, client: &Client) -> RequestBuilder {
    let url = format!("{base_url}/roles");
    client.get(url)
}

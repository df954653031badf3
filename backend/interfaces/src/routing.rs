use common_utils::CustomResult;
use domain_types::errors::ConnectorError;
use error_stack::{report, ResultExt};
use url::Url;

const BASKET_ID_PARAMETER: &str = "basketId";

/// A shop route: controller, action and the optional basket id segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteParameters<'a> {
    pub controller: &'a str,
    pub action: &'a str,
    pub basket_id: Option<&'a str>,
}

impl<'a> RouteParameters<'a> {
    pub fn new(controller: &'a str, action: &'a str) -> Self {
        Self {
            controller,
            action,
            basket_id: None,
        }
    }

    pub fn with_basket_id(mut self, basket_id: &'a str) -> Self {
        self.basket_id = Some(basket_id);
        self
    }
}

/// Builds absolute URLs into the shop front end.
pub trait Router: Send + Sync {
    fn assemble(&self, params: &RouteParameters<'_>) -> CustomResult<String, ConnectorError>;
}

/// Router producing SEO style URLs below the shop's base URL:
/// `<base>/<controller>/<action>[/basketId/<id>]`.
#[derive(Clone, Debug)]
pub struct ShopRouter {
    base_url: Url,
}

impl ShopRouter {
    pub fn new(base_url: &str) -> CustomResult<Self, ConnectorError> {
        let base_url = Url::parse(base_url)
            .change_context(ConnectorError::InvalidConnectorConfig {
                config: "shop base url",
            })
            .attach_printable_lazy(|| format!("unable to parse {base_url}"))?;
        if base_url.cannot_be_a_base() {
            return Err(report!(ConnectorError::InvalidConnectorConfig {
                config: "shop base url",
            }));
        }
        Ok(Self { base_url })
    }
}

impl Router for ShopRouter {
    fn assemble(&self, params: &RouteParameters<'_>) -> CustomResult<String, ConnectorError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                report!(ConnectorError::UrlBuildFailed {
                    url_name: "shop route",
                })
            })?;
            segments
                .pop_if_empty()
                .extend([params.controller, params.action]);
            if let Some(basket_id) = params.basket_id {
                segments.extend([BASKET_ID_PARAMETER, basket_id]);
            }
        }
        Ok(url.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_shop_routes() {
        let router = ShopRouter::new("https://shop.example/de/").unwrap();

        let return_url = router
            .assemble(&RouteParameters::new("PaypalUnified", "return").with_basket_id("PayPalPlus"))
            .unwrap();
        assert_eq!(
            return_url,
            "https://shop.example/de/PaypalUnified/return/basketId/PayPalPlus"
        );

        let cancel_url = router
            .assemble(&RouteParameters::new("PaypalUnified", "cancel"))
            .unwrap();
        assert_eq!(cancel_url, "https://shop.example/de/PaypalUnified/cancel");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(ShopRouter::new("mailto:shop@example.com").is_err());
        assert!(ShopRouter::new("not a url").is_err());
    }
}

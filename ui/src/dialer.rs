use dioxus_logger::tracing::info;
use model::dial::tel_uri;
use model::dial::Dialer;

use crate::compat::UriRoute;

/// Dials through the host platform. See [`crate::compat::open_uri`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDialer;

/// A dial, resolved for the current target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    pub route: UriRoute,
    pub uri: String,
}

impl SystemDialer {
    pub fn request(phone_number: &str) -> DialRequest {
        DialRequest {
            route: crate::compat::ROUTE,
            uri: tel_uri(phone_number),
        }
    }
}

impl Dialer for SystemDialer {
    fn launch_dial(&self, phone_number: &str) {
        let request = Self::request(phone_number);
        info!("opening {} via {:?}", request.uri, request.route);
        crate::compat::open_uri(&request.uri);
    }
}

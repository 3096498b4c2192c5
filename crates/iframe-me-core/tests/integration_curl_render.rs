//! Integration test: render through the curl client against a local HTTP server.
//!
//! Covers the status classification end to end (2xx, 3xx, 4xx, 5xx, refused
//! connection) and the HEAD/GET probe method setting.

mod common;

use common::status_server::{self, StatusServerOptions};
use iframe_me_core::config::{ProbeConfig, ProbeMethod};
use iframe_me_core::{
    render, CurlClient, EmbedAttributes, HttpClient, Reachability, RenderError, Renderer,
    RequestError,
};

fn fast_client(method: ProbeMethod) -> CurlClient {
    CurlClient::new(ProbeConfig {
        method,
        connect_timeout_secs: 2,
        timeout_secs: 5,
        ..ProbeConfig::default()
    })
}

#[test]
fn reachable_target_renders_markup() {
    let server = status_server::start(200);
    let attrs = EmbedAttributes::from([("class", " wide "), ("height", "480")]);
    let renderer = Renderer::new(server.url.clone(), attrs, fast_client(ProbeMethod::Head))
        .expect("non-empty url");
    let html = renderer.output().expect("reachable");
    assert_eq!(
        html,
        format!(
            "<iframe src='{}' class='iframe-me wide' height='480'></iframe>",
            server.url
        )
    );
    assert_eq!(server.methods(), ["HEAD"]);
}

#[test]
fn client_error_status_is_request_error() {
    let server = status_server::start(404);
    let renderer =
        Renderer::new(server.url.clone(), EmbedAttributes::new(), fast_client(ProbeMethod::Head))
            .unwrap();
    assert_eq!(renderer.output(), Err(RequestError::ClientStatus(404)));
}

#[test]
fn server_error_status_is_request_error() {
    let server = status_server::start(503);
    let err = render(server.url.clone(), EmbedAttributes::new(), fast_client(ProbeMethod::Get))
        .unwrap_err();
    assert_eq!(err, RenderError::Request(RequestError::ServerStatus(503)));
    assert_eq!(server.methods(), ["GET"]);
}

#[test]
fn refused_connection_is_transport_failure() {
    let url = status_server::closed_port_url();
    let renderer =
        Renderer::new(url, EmbedAttributes::new(), fast_client(ProbeMethod::Head)).unwrap();
    assert!(matches!(renderer.check(), Reachability::TransportFailure(_)));
    assert!(matches!(renderer.output(), Err(RequestError::Transport(_))));
}

#[test]
fn redirect_is_followed_to_final_status() {
    let server = status_server::start_with_options(StatusServerOptions {
        status: 500,
        redirect_to: Some("/moved"),
        ..Default::default()
    });
    let client = fast_client(ProbeMethod::Head);
    assert_eq!(
        iframe_me_core::reachability::check(&client, &server.url),
        Reachability::ServerError(500)
    );
    assert_eq!(server.methods().len(), 2);
}

#[test]
fn redirect_not_followed_when_disabled() {
    let server = status_server::start_with_options(StatusServerOptions {
        status: 500,
        redirect_to: Some("/moved"),
        ..Default::default()
    });
    let client = CurlClient::new(ProbeConfig {
        follow_redirects: false,
        connect_timeout_secs: 2,
        timeout_secs: 5,
        ..ProbeConfig::default()
    });
    assert_eq!(
        client.fetch(&server.url).expect("response").status,
        Some(302)
    );
}

#[test]
fn get_probe_works_where_head_is_blocked() {
    let server = status_server::start_with_options(StatusServerOptions {
        head_allowed: false,
        ..Default::default()
    });
    let head = Renderer::new(server.url.clone(), EmbedAttributes::new(), fast_client(ProbeMethod::Head))
        .unwrap();
    assert_eq!(head.output(), Err(RequestError::ClientStatus(405)));

    let get = Renderer::new(server.url.clone(), EmbedAttributes::new(), fast_client(ProbeMethod::Get))
        .unwrap();
    assert!(get.output().is_ok());
}

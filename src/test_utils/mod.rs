#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{serve, spawn_failing_backend, spawn_stub_backend, unreachable_base_url};
pub(crate) use form::{
    assert_form_input, assert_form_submit_button_with_text, assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, parse_html_document, parse_html_fragment, parse_markup_fragment,
};
pub(crate) use http::get_header;
